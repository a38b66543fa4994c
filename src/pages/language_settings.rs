//! Language Settings Page
//!
//! Interface and report language preference. Chrome strings switch
//! immediately; full-page coverage is delegated to the injected
//! translation widget via a change event on its select control.

use leptos::*;

use crate::components::DashboardLayout;
use crate::i18n::{self, Language, LANGUAGES};
use crate::state::global::GlobalState;

#[component]
pub fn LanguageSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (selected, set_selected) = create_signal(state.language.get_untracked());
    let (report_selected, set_report_selected) =
        create_signal(state.report_language.get_untracked());

    let state_for_save = state.clone();
    let save = move |_| {
        let language = selected.get();
        let report_language = report_selected.get();
        state_for_save.language.set(language);
        state_for_save.report_language.set(report_language);
        i18n::save_language(language);
        i18n::save_report_language(report_language);
        i18n::trigger_page_translation(language.code());
        state_for_save.show_success(state_for_save.t("prefs_saved"));
    };

    let title = state.t("language_settings");
    let interface_heading = state.t("interface_lang");
    let interface_desc = state.t("interface_desc");
    let report_heading = state.t("report_lang");
    let report_desc = state.t("report_lang_desc");
    let save_label = state.t("save_prefs");

    view! {
        <DashboardLayout>
            <div class="max-w-3xl mx-auto space-y-8">
                <h1 class="text-2xl font-bold">{title}</h1>

                <section class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                    <div>
                        <h2 class="text-lg font-semibold">{interface_heading}</h2>
                        <p class="text-gray-400 text-sm mt-1">{interface_desc}</p>
                    </div>
                    <div class="grid grid-cols-2 sm:grid-cols-4 gap-3">
                        {LANGUAGES.iter().map(|lang| {
                            let lang = *lang;
                            view! {
                                <button
                                    class=move || format!(
                                        "flex flex-col items-center gap-1 px-4 py-3 rounded-lg border transition-colors {}",
                                        if selected.get() == lang {
                                            "border-indigo-500 bg-indigo-900/30"
                                        } else {
                                            "border-gray-700 hover:border-gray-500"
                                        }
                                    )
                                    on:click=move |_| set_selected.set(lang)
                                >
                                    <span class="text-xl">{lang.flag()}</span>
                                    <span class="font-medium text-sm">{lang.native_name()}</span>
                                    <span class="text-xs text-gray-500">{lang.label()}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </section>

                <section class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                    <div>
                        <h2 class="text-lg font-semibold">{report_heading}</h2>
                        <p class="text-gray-400 text-sm mt-1">{report_desc}</p>
                    </div>
                    <select
                        class="w-full sm:w-72 px-4 py-3 bg-gray-900 border border-gray-700 rounded-lg focus:border-indigo-500 focus:outline-none"
                        on:change=move |ev| {
                            if let Some(lang) = Language::from_code(&event_target_value(&ev)) {
                                set_report_selected.set(lang);
                            }
                        }
                    >
                        {LANGUAGES.iter().map(|lang| {
                            let lang = *lang;
                            view! {
                                <option
                                    value=lang.code()
                                    selected=move || report_selected.get() == lang
                                >
                                    {format!("{} ({})", lang.label(), lang.native_name())}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </section>

                <button
                    class="px-8 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-semibold transition-colors"
                    on:click=save
                >
                    {save_label}
                </button>
            </div>
        </DashboardLayout>
    }
}
