//! Login Page
//!
//! Sign-in is handled by the external identity provider; this page just
//! frames the hand-off and bounces already-signed-in users to the
//! dashboard.

use leptos::*;
use leptos_router::*;

use crate::auth;
use crate::components::AuthLayout;
use crate::state::global::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Already signed in, nothing to do here.
    let session = state.session;
    let navigate = use_navigate();
    create_effect(move |_| {
        if session.get().is_some() {
            navigate("/dashboard", Default::default());
        }
    });

    view! {
        <AuthLayout
            title="Welcome back"
            subtitle="Sign in to run analyses and keep your reports"
        >
            <div class="space-y-4">
                <button
                    class="w-full px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-semibold transition-colors"
                    on:click=move |_| auth::redirect_to_sign_in()
                >
                    "Continue to sign in"
                </button>
                <p class="text-center text-sm text-gray-500">
                    "You will be redirected to our secure sign-in page."
                </p>
            </div>
        </AuthLayout>
    }
}
