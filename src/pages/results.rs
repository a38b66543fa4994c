//! Results Page
//!
//! Renders a single investor fit report, fetched by the id in the route.
//! The record is write-once server-side; this page only ever reads it.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::{AnalysisResponse, EvidenceUsed, InvestorRecommendation};
use crate::components::{DashboardLayout, Loading};
use crate::state::global::GlobalState;

/// What the page renders. A missing or failed analysis is an explicit
/// empty state, not an error surface.
#[derive(Clone, Debug, PartialEq)]
enum ResultsView {
    Loading,
    NotFound,
    Report(AnalysisResponse),
}

fn results_view(loading: bool, analysis: Option<AnalysisResponse>) -> ResultsView {
    if loading {
        return ResultsView::Loading;
    }
    match analysis {
        Some(report) => ResultsView::Report(report),
        None => ResultsView::NotFound,
    }
}

#[component]
pub fn Results() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let (analysis, set_analysis) = create_signal::<Option<AnalysisResponse>>(None);
    let (loading, set_loading) = create_signal(true);

    let state_for_fetch = state.clone();
    create_effect(move |_| {
        let Some(id) = params.with(|p| p.get("id").cloned()) else {
            set_loading.set(false);
            return;
        };
        let user_id = state_for_fetch.user_id();

        set_loading.set(true);
        spawn_local(async move {
            match api::get_analysis_by_id(&id, user_id.as_deref()).await {
                Ok(response) => set_analysis.set(Some(response)),
                Err(e) => {
                    set_analysis.set(None);
                    web_sys::console::error_1(
                        &format!("Failed to load analysis: {}", e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    let state_for_view = state.clone();

    view! {
        <DashboardLayout>
            {move || {
                let state = state_for_view.clone();
                match results_view(loading.get(), analysis.get()) {
                    ResultsView::Loading => view! {
                        <div class="flex flex-col items-center justify-center py-24 space-y-4">
                            <Loading />
                            <p class="text-gray-400">"Loading your report..."</p>
                        </div>
                    }.into_view(),
                    ResultsView::Report(report) => view! { <Report report state /> }.into_view(),
                    ResultsView::NotFound => view! {
                        <div class="flex flex-col items-center justify-center py-24 space-y-4">
                            <span class="text-5xl">"🔎"</span>
                            <h2 class="text-xl font-semibold">"Report not found"</h2>
                            <p class="text-gray-400">
                                "This analysis does not exist or belongs to another account."
                            </p>
                            <A
                                href="/analyze"
                                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                            >
                                {state.t("run_new")}
                            </A>
                        </div>
                    }.into_view(),
                }
            }}
        </DashboardLayout>
    }
}

#[component]
fn Report(report: AnalysisResponse, state: GlobalState) -> impl IntoView {
    let score = report.overall_score;
    let confidence = report.confidence_indicator.label();
    let evidence_count = report.evidence_used.len();

    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            // Header
            <div class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold">{state.t("report_title")}</h1>
                        <p class="text-gray-400 mt-1">{state.t("report_desc")}</p>
                    </div>
                    <div class="text-right">
                        <p class="text-4xl font-bold text-indigo-400">{score}"%"</p>
                        <p class="text-sm text-gray-400">{state.t("fit_score")}</p>
                    </div>
                </div>
                <p class="text-gray-300 leading-relaxed">{report.startup_summary.clone()}</p>
                <div class="flex items-center gap-3 text-sm">
                    <span class=move || format!(
                        "px-3 py-1 rounded-full font-medium {}",
                        match confidence {
                            "HIGH" => "bg-emerald-900/50 text-emerald-400",
                            "MEDIUM" => "bg-amber-900/50 text-amber-400",
                            _ => "bg-red-900/50 text-red-400",
                        }
                    )>
                        {state.t("confidence")}": "{confidence}
                    </span>
                    <span class="text-gray-500">
                        {evidence_count}" "{state.t("sources_used")}
                    </span>
                    {match report.created_at.clone() {
                        Some(ts) => view! {
                            <span class="text-gray-500">
                                {state.t("analysis_completed")}" · "{ts}
                            </span>
                        }.into_view(),
                        None => view! {}.into_view(),
                    }}
                </div>
            </div>

            // Recommended investors
            <section class="space-y-4">
                <h2 class="text-xl font-semibold">{state.t("recommended_investors")}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {report.recommended_investors.iter().cloned().map(|investor| {
                        let state = state.clone();
                        view! { <InvestorCard investor state /> }
                    }).collect_view()}
                </div>
            </section>

            // Why it fits
            <section class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-3">
                <h2 class="text-lg font-semibold text-emerald-400">{state.t("why_fits")}</h2>
                <ul class="space-y-2">
                    {report.why_fits.iter().cloned().map(|reason| view! {
                        <li class="flex gap-3">
                            <span class="text-emerald-400 shrink-0">"✓"</span>
                            <span class="text-gray-300">{reason}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            // Considerations
            <section class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-3">
                <h2 class="text-lg font-semibold text-amber-400">{state.t("considerations")}</h2>
                {if report.why_does_not_fit.is_empty() {
                    view! {
                        <p class="text-gray-400">{state.t("no_risks_found")}</p>
                    }.into_view()
                } else {
                    view! {
                        <ul class="space-y-2">
                            {report.why_does_not_fit.iter().cloned().map(|reason| view! {
                                <li class="flex gap-3">
                                    <span class="text-amber-400 shrink-0">"!"</span>
                                    <span class="text-gray-300">{reason}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }}
            </section>

            // Evidence used (collapsible)
            <EvidenceSection evidence=report.evidence_used.clone() state=state.clone() />

            // Footer actions
            <div class="flex items-center gap-4 pb-8">
                <A
                    href="/analyze"
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                >
                    {state.t("run_new")}
                </A>
                <A
                    href="/evidence"
                    class="px-6 py-3 border border-gray-700 hover:border-gray-500 rounded-lg font-medium transition-colors"
                >
                    {state.t("view_evidence")}
                </A>
            </div>
        </div>
    }
}

#[component]
fn InvestorCard(investor: InvestorRecommendation, state: GlobalState) -> impl IntoView {
    let initials = investor.initials();
    let fit = investor.fit_score;

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 p-5 space-y-3">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <span class="w-10 h-10 rounded-full bg-indigo-900/60 text-indigo-300 flex items-center justify-center font-bold text-sm">
                        {initials}
                    </span>
                    <h3 class="font-semibold">{investor.name.clone()}</h3>
                </div>
                <span class="text-indigo-400 font-bold">{fit}"% "{state.t("match")}</span>
            </div>
            <div class="flex flex-wrap gap-2">
                {investor.focus_areas.iter().cloned().map(|area| view! {
                    <span class="px-2 py-1 bg-gray-700 rounded text-xs text-gray-300">{area}</span>
                }).collect_view()}
            </div>
            {if !investor.reasons.is_empty() {
                view! {
                    <div class="text-sm space-y-1">
                        <p class="text-gray-500">{state.t("key_reasons")}</p>
                        <ul class="space-y-1">
                            {investor.reasons.iter().cloned().map(|reason| view! {
                                <li class="text-gray-300">"• "{reason}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }}
        </div>
    }
}

#[component]
fn EvidenceSection(evidence: Vec<EvidenceUsed>, state: GlobalState) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);
    let count = evidence.len();
    let used_for_label = state.t("used_for");

    view! {
        <section class="bg-gray-800 rounded-xl border border-gray-700">
            <button
                class="w-full flex items-center justify-between px-6 py-4 hover:bg-gray-700/50 transition-colors"
                on:click=move |_| set_expanded.update(|e| *e = !*e)
            >
                <h2 class="text-lg font-semibold">
                    {state.t("evidence")}" ("{count}")"
                </h2>
                <span class="text-gray-400">
                    {move || if expanded.get() { "▲" } else { "▼" }}
                </span>
            </button>
            {move || {
                if !expanded.get() {
                    return view! {}.into_view();
                }
                view! {
                    <ul class="divide-y divide-gray-700 border-t border-gray-700">
                        {evidence.iter().cloned().map(|item| {
                            view! {
                                <li class="px-6 py-4 space-y-1">
                                    <div class="flex items-center gap-2">
                                        <span>{item.source_type.icon()}</span>
                                        <span class="font-medium">{item.title.clone()}</span>
                                    </div>
                                    <p class="text-sm text-gray-500">
                                        {item.source_name.clone()}
                                        {if item.year.is_empty() {
                                            String::new()
                                        } else {
                                            format!(" · {}", item.year)
                                        }}
                                    </p>
                                    {if item.usage_reason.is_empty() {
                                        view! {}.into_view()
                                    } else {
                                        view! {
                                            <p class="text-sm text-gray-400">
                                                {used_for_label}": "{item.usage_reason.clone()}
                                            </p>
                                        }.into_view()
                                    }}
                                    {match item.url.clone() {
                                        Some(url) => view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener"
                                                class="text-sm text-indigo-400 hover:text-indigo-300"
                                            >
                                                "View source ↗"
                                            </a>
                                        }.into_view(),
                                        None => view! {}.into_view(),
                                    }}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnalysisMetadata, ConfidenceIndicator};

    fn report() -> AnalysisResponse {
        AnalysisResponse {
            analysis_id: "a-1".to_string(),
            startup_summary: "An agritech marketplace.".to_string(),
            confidence_indicator: ConfidenceIndicator::High,
            overall_score: 80,
            recommended_investors: vec![],
            why_fits: vec![],
            why_does_not_fit: vec![],
            evidence_used: vec![],
            metadata: AnalysisMetadata {
                language: "en".to_string(),
                engine_version: "2.0".to_string(),
                evidence_count: 0,
                sector: None,
                stage: None,
                geography: None,
            },
            created_at: None,
        }
    }

    #[test]
    fn test_failed_or_missing_fetch_is_an_empty_state_not_an_error() {
        // A fetch failure leaves no analysis behind; the page renders the
        // not-found empty state rather than surfacing an error.
        assert_eq!(results_view(false, None), ResultsView::NotFound);
        assert_eq!(results_view(true, None), ResultsView::Loading);
        // An in-flight refetch wins over an already-loaded report.
        assert_eq!(results_view(true, Some(report())), ResultsView::Loading);
    }

    #[test]
    fn test_loaded_report_renders_as_report() {
        let loaded = report();
        assert_eq!(
            results_view(false, Some(loaded.clone())),
            ResultsView::Report(loaded)
        );
    }
}
