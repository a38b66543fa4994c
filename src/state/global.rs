//! Global Application State
//!
//! Reactive state management using Leptos signals. The only cross-page
//! shared state beyond UI chrome is the externally-owned auth session,
//! cached here and refreshed via the auth subscription.

use leptos::*;

use crate::auth::Session;
use crate::i18n::{self, Language};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Cached copy of the provider-owned auth session
    pub session: RwSignal<Option<Session>>,
    /// Current UI language
    pub language: RwSignal<Language>,
    /// Language analysis reports are generated in
    pub report_language: RwSignal<Language>,
    /// Dark mode flag (mirrors the `dark` class on the document element)
    pub dark_mode: RwSignal<bool>,
    /// Sidebar collapse state, shared across pages
    pub sidebar_collapsed: RwSignal<bool>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(crate::auth::get_session()),
        language: create_rw_signal(i18n::load_saved_language()),
        report_language: create_rw_signal(i18n::load_saved_report_language()),
        dark_mode: create_rw_signal(false),
        sidebar_collapsed: create_rw_signal(false),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Current user id, if signed in
    pub fn user_id(&self) -> Option<String> {
        self.session.get().map(|s| s.user.id)
    }

    /// Chrome string in the current UI language
    pub fn t(&self, key: &'static str) -> &'static str {
        i18n::t(self.language.get(), key)
    }

    /// Toggle dark mode and mirror it onto the document element
    pub fn toggle_theme(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);

        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().toggle("dark");
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
