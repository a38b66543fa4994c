//! Loading Component
//!
//! Loading spinners, skeleton states, and the staged analysis progress
//! modal.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 animate-pulse">
            <div class="h-4 bg-gray-700 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-700 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-700 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-700 rounded h-12" />
            }).collect_view()}
        </div>
    }
}

/// Stage captions for the analysis progress modal. Purely cosmetic: the
/// backend exposes no progress protocol, so the modal animates through a
/// fixed script while the single /analyze request is in flight.
const ANALYSIS_STEPS: [&str; 7] = [
    "Initializing RAG orchestrator...",
    "Executing semantic vector search...",
    "Scanning internal knowledge base...",
    "Triggering real-time generative crawl...",
    "Cross-referencing verified facts...",
    "Synthesizing investor fit report...",
    "Finalizing localized response...",
];

/// Full-screen modal shown while an analysis request is outstanding.
/// Steps advance on a timer and the bar never reaches 100%; the modal
/// closes when the request resolves, not when the script ends.
#[component]
pub fn AnalysisProgressModal(
    #[prop(into)]
    visible: Signal<bool>,
) -> impl IntoView {
    let (current_step, set_current_step) = create_signal(0usize);
    let (progress, set_progress) = create_signal(0.0f64);
    let interval_handle = store_value(None::<gloo_timers::callback::Interval>);

    create_effect(move |_| {
        if visible.get() {
            set_current_step.set(0);
            set_progress.set(0.0);

            let interval = gloo_timers::callback::Interval::new(800, move || {
                set_current_step.update(|step| {
                    if *step + 1 < ANALYSIS_STEPS.len() {
                        *step += 1;
                    }
                });
                set_progress.update(|p| {
                    if *p < 96.0 {
                        *p += 11.0;
                    }
                });
            });
            interval_handle.set_value(Some(interval));
        } else {
            // Dropping the interval cancels it
            interval_handle.set_value(None);
        }
    });

    on_cleanup(move || interval_handle.set_value(None));

    view! {
        {move || {
            if !visible.get() {
                return view! {}.into_view();
            }

            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/80 backdrop-blur-sm">
                    <div class="w-full max-w-md bg-gray-800 rounded-xl border-2 border-indigo-500/20 p-8 space-y-8 shadow-2xl">
                        <div class="text-center space-y-2">
                            <div class="inline-flex items-center justify-center w-16 h-16 rounded-full bg-indigo-600/10 text-indigo-400 mb-4 animate-pulse">
                                <span class="text-3xl">"✨"</span>
                            </div>
                            <h2 class="text-2xl font-bold tracking-tight">"AI Multi-Source Analysis"</h2>
                            <p class="text-gray-400">
                                "Executing grounded retrieval across verified data sources."
                            </p>
                        </div>

                        // Progress bar
                        <div class="h-2 w-full bg-gray-700 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-indigo-500 transition-all duration-500"
                                style=move || format!("width: {}%", progress.get().min(98.0))
                            />
                        </div>

                        // Step list
                        <div class="space-y-3">
                            {ANALYSIS_STEPS.iter().enumerate().map(|(idx, text)| {
                                view! {
                                    <div class=move || {
                                        let step = current_step.get();
                                        if idx == step {
                                            "flex items-center gap-3 text-indigo-400 font-semibold transition-all"
                                        } else if idx < step {
                                            "flex items-center gap-3 text-gray-500 transition-all"
                                        } else {
                                            "flex items-center gap-3 text-gray-600 transition-all"
                                        }
                                    }>
                                        <span class="text-sm">{*text}</span>
                                        {move || {
                                            if idx < current_step.get() {
                                                view! {
                                                    <span class="ml-auto w-2 h-2 rounded-full bg-emerald-500" />
                                                }.into_view()
                                            } else {
                                                view! {}.into_view()
                                            }
                                        }}
                                    </div>
                                }
                            }).collect_view()}
                        </div>

                        <div class="p-4 rounded-lg bg-gray-700/50 border border-gray-700 text-center">
                            <p class="text-xs text-gray-400">
                                "Integrating latest market intelligence and investor thesis alignment..."
                            </p>
                        </div>
                    </div>
                </div>
            }.into_view()
        }}
    }
}
