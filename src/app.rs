//! Main Application Component
//!
//! Root component wiring up routing, global state, and the auth
//! subscription that keeps the cached session in sync.

use leptos::*;
use leptos_router::*;

use crate::auth;
use crate::components::Toast;
use crate::pages::{
    Analyze, Chat, Dashboard, Evidence, Landing, LanguageSettings, Login, Results,
};
use crate::state::global::{provide_global_state, GlobalState};

#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    auth::init_storage_listener();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Keep the cached session in sync with the auth provider.
    let session_signal = state.session;
    let subscription = auth::on_auth_state_change(move |session| {
        session_signal.set(session);
    });
    on_cleanup(move || subscription.unsubscribe());

    view! {
        <Router>
            <Toast />
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/login" view=Login />
                <Route path="/dashboard" view=Dashboard />
                <Route path="/analyze" view=Analyze />
                <Route path="/results/:id" view=Results />
                <Route path="/evidence" view=Evidence />
                <Route path="/chat" view=Chat />
                <Route path="/settings/language" view=LanguageSettings />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// Fallback for unknown routes
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-900 text-white space-y-4">
            <h1 class="text-5xl font-bold">"404"</h1>
            <p class="text-gray-400">"This page does not exist."</p>
            <A href="/" class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors">
                "Back to home"
            </A>
        </div>
    }
}
