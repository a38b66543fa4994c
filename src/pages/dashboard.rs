//! Dashboard Page
//!
//! Signed-in home: aggregate stats cards and the user's recent analyses
//! with links into the full reports.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::{AnalysisResponse, StatsResponse};
use crate::components::{DashboardLayout, ListSkeleton};
use crate::state::global::GlobalState;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (stats, set_stats) = create_signal::<Option<StatsResponse>>(None);
    let (history, set_history) = create_signal::<Vec<AnalysisResponse>>(Vec::new());
    let (loading, set_loading) = create_signal(true);

    let state_for_fetch = state.clone();
    create_effect(move |_| {
        let user_id = state_for_fetch.user_id();
        let state = state_for_fetch.clone();
        spawn_local(async move {
            if let Ok(response) = api::get_stats().await {
                set_stats.set(Some(response));
            }
            match api::get_history(user_id.as_deref()).await {
                Ok(analyses) => set_history.set(analyses),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let title = state.t("dashboard");
    let empty_label = state.t("no_startups_yet");

    view! {
        <DashboardLayout>
            <div class="max-w-5xl mx-auto space-y-8">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">{title}</h1>
                    <A
                        href="/analyze"
                        class="px-5 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                    >
                        "+ New analysis"
                    </A>
                </div>

                // Stats cards
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    {move || {
                        let current = stats.get();
                        view! {
                            <StatCard
                                label="Total analyses"
                                value=current
                                    .as_ref()
                                    .map(|s| s.total_analyses.to_string())
                                    .unwrap_or_else(|| "—".to_string())
                            />
                            <StatCard
                                label="Investors tracked"
                                value=current
                                    .as_ref()
                                    .map(|s| s.total_investors.to_string())
                                    .unwrap_or_else(|| "—".to_string())
                            />
                            <StatCard
                                label="Average fit score"
                                value=current
                                    .as_ref()
                                    .map(|s| s.avg_score.clone())
                                    .unwrap_or_else(|| "—".to_string())
                            />
                        }
                    }}
                </div>

                // Recent analyses
                <div class="bg-gray-800 rounded-xl border border-gray-700">
                    <div class="px-6 py-4 border-b border-gray-700">
                        <h2 class="font-semibold">"Recent analyses"</h2>
                    </div>
                    {move || {
                        if loading.get() {
                            view! { <div class="p-6"><ListSkeleton /></div> }.into_view()
                        } else if history.get().is_empty() {
                            view! {
                                <div class="p-10 text-center space-y-3">
                                    <p class="text-gray-400">{empty_label}</p>
                                    <A href="/analyze" class="text-indigo-400 hover:text-indigo-300 font-medium">
                                        "Run your first analysis"
                                    </A>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <ul class="divide-y divide-gray-700">
                                    {history.get().into_iter().map(|analysis| {
                                        view! { <HistoryRow analysis /> }
                                    }).collect_view()}
                                </ul>
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </DashboardLayout>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 p-6">
            <p class="text-3xl font-bold text-indigo-400">{value}</p>
            <p class="text-gray-400 mt-1 text-sm">{label}</p>
        </div>
    }
}

/// "Jan 15, 2026" style date from the RFC 3339 timestamp the backend
/// sends, or the raw string if it does not parse.
fn format_created(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
fn HistoryRow(analysis: AnalysisResponse) -> impl IntoView {
    let href = format!("/results/{}", analysis.analysis_id);
    let summary = analysis.startup_summary.clone();
    let score = analysis.overall_score;
    let confidence = analysis.confidence_indicator.label();
    let created = analysis
        .created_at
        .as_deref()
        .map(format_created)
        .unwrap_or_default();

    view! {
        <li>
            <A href class="flex items-center justify-between px-6 py-4 hover:bg-gray-700/50 transition-colors">
                <div class="min-w-0">
                    <p class="font-medium truncate">{summary}</p>
                    <p class="text-sm text-gray-500 mt-1">{created}</p>
                </div>
                <div class="flex items-center gap-4 shrink-0 ml-4">
                    <span class="text-xs text-gray-400 uppercase">{confidence}</span>
                    <span class="text-lg font-bold text-indigo-400">{score}"%"</span>
                </div>
            </A>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_created_renders_readable_date() {
        assert_eq!(format_created("2026-01-15T09:30:00+05:30"), "Jan 15, 2026");
        // Unparseable timestamps pass through untouched.
        assert_eq!(format_created("yesterday"), "yesterday");
    }
}
