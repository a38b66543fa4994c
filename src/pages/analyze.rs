//! Analyze Page
//!
//! The analysis submission form. On submit the progress modal covers the
//! page while the single /analyze request is in flight, then the user is
//! routed to the results page for the new report.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::AnalysisRequest;
use crate::components::{AnalysisProgressModal, DashboardLayout};
use crate::state::global::GlobalState;

const SECTORS: [&str; 8] = [
    "Agritech",
    "Fintech",
    "Healthtech",
    "Edtech",
    "SaaS",
    "D2C / Consumer",
    "Climate / Clean energy",
    "Deeptech",
];

const FUNDING_STAGES: [&str; 5] = [
    "Pre-seed",
    "Seed",
    "Series A",
    "Series B",
    "Growth",
];

const GEOGRAPHIES: [&str; 5] = [
    "India",
    "Southeast Asia",
    "United States",
    "Europe",
    "Global",
];

#[component]
pub fn Analyze() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (description, set_description) = create_signal(String::new());
    let (sector, set_sector) = create_signal(SECTORS[0].to_string());
    let (stage, set_stage) = create_signal(FUNDING_STAGES[1].to_string());
    let (geography, set_geography) = create_signal(GEOGRAPHIES[0].to_string());
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();
    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let text = description.get().trim().to_string();
        if text.is_empty() || submitting.get() {
            return;
        }

        let request = AnalysisRequest {
            startup_description: text,
            sector: sector.get(),
            funding_stage: stage.get(),
            geography: geography.get(),
            language: state_for_submit.report_language.get().code().to_string(),
        };

        set_submitting.set(true);
        let state = state_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::analyze_startup(&request).await {
                Ok(response) => {
                    set_submitting.set(false);
                    navigate(
                        &format!("/results/{}", response.analysis_id),
                        Default::default(),
                    );
                }
                Err(e) => {
                    set_submitting.set(false);
                    state.show_error(&e);
                }
            }
        });
    };

    let title = state.t("analyze");

    view! {
        <DashboardLayout>
            <div class="max-w-3xl mx-auto space-y-8">
                <div>
                    <h1 class="text-2xl font-bold">{title}</h1>
                    <p class="text-gray-400 mt-1">
                        "Describe your startup and we will match it against investors and market evidence."
                    </p>
                </div>

                <form on:submit=on_submit class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-6">
                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">
                            "Startup description"
                        </label>
                        <textarea
                            rows=6
                            class="w-full px-4 py-3 bg-gray-900 border border-gray-700 rounded-lg focus:border-indigo-500 focus:outline-none resize-y"
                            placeholder="What do you build, for whom, and what traction do you have?"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                        <SelectField
                            label="Sector"
                            options=&SECTORS
                            value=sector
                            on_change=set_sector
                        />
                        <SelectField
                            label="Funding stage"
                            options=&FUNDING_STAGES
                            value=stage
                            on_change=set_stage
                        />
                        <SelectField
                            label="Geography"
                            options=&GEOGRAPHIES
                            value=geography
                            on_change=set_geography
                        />
                    </div>

                    <div class="flex items-center justify-between">
                        <p class="text-sm text-gray-500">
                            "Reports are generated in "
                            {
                                let report_language = state.report_language;
                                move || report_language.get().label()
                            }
                            "."
                        </p>
                        <button
                            type="submit"
                            class="px-8 py-3 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-lg font-semibold transition-colors"
                            disabled=move || {
                                submitting.get() || description.get().trim().is_empty()
                            }
                        >
                            "Run analysis"
                        </button>
                    </div>
                </form>
            </div>

            <AnalysisProgressModal visible=Signal::derive(move || submitting.get()) />
        </DashboardLayout>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [&'static str],
    value: ReadSignal<String>,
    on_change: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-300 mb-2">{label}</label>
            <select
                class="w-full px-4 py-3 bg-gray-900 border border-gray-700 rounded-lg focus:border-indigo-500 focus:outline-none"
                on:change=move |ev| on_change.set(event_target_value(&ev))
            >
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
