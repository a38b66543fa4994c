//! Chat Page
//!
//! Grounded Q&A assistant. The transcript lives in a [`Transcript`] state
//! machine; this page wires it to the chat endpoint, the persisted
//! per-user transcript, and an optional analysis context selector.

use leptos::*;

use crate::api;
use crate::api::{ChatMessage, ChatRequest, ChatRole};
use crate::components::DashboardLayout;
use crate::state::chat::Transcript;
use crate::state::global::GlobalState;

const SUGGESTED_PROMPTS: [&str; 4] = [
    "Which investors are most active in my sector right now?",
    "What funding stage should I target with my current traction?",
    "Summarize recent policy changes affecting my market.",
    "What do investors in my space typically look for?",
];

#[component]
pub fn Chat() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let transcript = create_rw_signal(Transcript::default());
    let (input, set_input) = create_signal(String::new());
    let (contexts, set_contexts) = create_signal::<Vec<(String, String)>>(Vec::new());
    let (selected_context, set_selected_context) = create_signal::<Option<String>>(None);

    // Analysis context options come from the user's history.
    let state_for_contexts = state.clone();
    create_effect(move |_| {
        let user_id = state_for_contexts.user_id();
        spawn_local(async move {
            if let Ok(analyses) = api::get_history(user_id.as_deref()).await {
                set_contexts.set(
                    analyses
                        .into_iter()
                        .map(|a| (a.analysis_id, a.startup_summary))
                        .collect(),
                );
            }
        });
    });

    // The server keeps one transcript per user. Load it when a session is
    // present, clear the local copy when it goes away.
    let session = state.session;
    create_effect(move |_| {
        match session.get().map(|s| s.user.id) {
            Some(user_id) => {
                spawn_local(async move {
                    if let Ok(messages) = api::get_chat_messages(&user_id).await {
                        transcript.update(|t| t.load(messages));
                    }
                });
            }
            None => transcript.update(|t| t.clear()),
        }
    });

    let state_for_send = state.clone();
    let send = move |text: String| {
        let Some((message, history)) = transcript
            .try_update(|t| t.begin_send(&text))
            .flatten()
        else {
            return;
        };
        set_input.set(String::new());

        let request = ChatRequest {
            message,
            analysis_id: selected_context.get_untracked(),
            language: state_for_send.language.get_untracked().code().to_string(),
            user_id: state_for_send.user_id(),
            chat_history: history,
        };

        let state = state_for_send.clone();
        spawn_local(async move {
            match api::chat_with_ai(&request).await {
                Ok(response) => {
                    transcript.update(|t| t.complete(response.answer, response.sources));
                }
                Err(e) => {
                    transcript.update(|t| t.fail());
                    state.show_error(&e);
                }
            }
        });
    };

    let send_for_submit = send.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send_for_submit(input.get());
    };

    let title = state.t("q_and_a");
    let subtitle = state.t("chat_with_ai");
    let placeholder = state.t("type_message");
    let context_label = state.t("select_context");
    let empty_hint = state.t("keep_dreaming");

    view! {
        <DashboardLayout>
            <div class="max-w-3xl mx-auto h-full flex flex-col space-y-4">
                <div class="flex items-center justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold">{title}</h1>
                        <p class="text-gray-400 text-sm mt-1">{subtitle}</p>
                    </div>
                    <select
                        class="px-3 py-2 bg-gray-800 border border-gray-700 rounded-lg text-sm focus:border-indigo-500 focus:outline-none max-w-[16rem]"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_selected_context.set(if value.is_empty() { None } else { Some(value) });
                        }
                    >
                        <option value="">{context_label}</option>
                        {move || contexts.get().into_iter().map(|(id, summary)| {
                            let selected = selected_context.get() == Some(id.clone());
                            view! {
                                <option value=id selected=selected>{truncate(&summary, 60)}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                // Transcript
                <div class="flex-1 overflow-y-auto space-y-4 bg-gray-800/40 rounded-xl border border-gray-700 p-4 min-h-[24rem]">
                    {move || {
                        let current = transcript.get();
                        if current.is_empty() {
                            let send = send.clone();
                            view! {
                                <div class="h-full flex flex-col items-center justify-center space-y-6 py-12">
                                    <span class="text-4xl">"💬"</span>
                                    <p class="text-gray-400">{empty_hint}</p>
                                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 w-full max-w-xl">
                                        {SUGGESTED_PROMPTS.iter().map(|prompt| {
                                            let prompt = *prompt;
                                            let send = send.clone();
                                            view! {
                                                <button
                                                    class="text-left px-4 py-3 bg-gray-800 border border-gray-700 hover:border-indigo-500 rounded-lg text-sm text-gray-300 transition-colors"
                                                    on:click=move |_| send(prompt.to_string())
                                                >
                                                    {prompt}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                {current.messages().iter().cloned().map(|message| {
                                    view! { <MessageBubble message /> }
                                }).collect_view()}
                                {if current.is_pending() {
                                    view! { <TypingIndicator /> }.into_view()
                                } else {
                                    view! {}.into_view()
                                }}
                            }.into_view()
                        }
                    }}
                </div>

                // Composer
                <form on:submit=on_submit class="flex gap-3">
                    <input
                        type="text"
                        class="flex-1 px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg focus:border-indigo-500 focus:outline-none"
                        placeholder=placeholder
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-lg font-semibold transition-colors"
                        disabled=move || {
                            transcript.with(|t| t.is_pending()) || input.get().trim().is_empty()
                        }
                    >
                        "Send"
                    </button>
                </form>
            </div>
        </DashboardLayout>
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == ChatRole::User;

    view! {
        <div class=move || format!(
            "flex {}",
            if is_user { "justify-end" } else { "justify-start" }
        )>
            <div class=move || format!(
                "max-w-[85%] rounded-xl px-4 py-3 space-y-2 {}",
                if is_user {
                    "bg-indigo-600 text-white"
                } else {
                    "bg-gray-800 border border-gray-700 text-gray-200"
                }
            )>
                <p class="whitespace-pre-wrap leading-relaxed">{message.content.clone()}</p>
                {if message.sources.is_empty() {
                    view! {}.into_view()
                } else {
                    view! {
                        <div class="flex flex-wrap gap-2 pt-1 border-t border-gray-700">
                            {message.sources.iter().cloned().map(|source| {
                                let chip = view! {
                                    <span class="px-2 py-1 bg-gray-700 rounded text-xs text-gray-300">
                                        "📎 "{source.title.clone()}
                                    </span>
                                };
                                match source.url {
                                    Some(url) => view! {
                                        <a href=url target="_blank" rel="noopener" class="hover:opacity-80">
                                            {chip}
                                        </a>
                                    }.into_view(),
                                    None => chip.into_view(),
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="bg-gray-800 border border-gray-700 rounded-xl px-4 py-3">
                <span class="text-gray-400 animate-pulse">"Thinking..."</span>
            </div>
        </div>
    }
}
