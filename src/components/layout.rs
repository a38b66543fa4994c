//! Dashboard Layout
//!
//! Sidebar navigation shell wrapping every signed-in page: nav links,
//! collapse toggle, mobile drawer, theme toggle, and sign-out.

use leptos::*;
use leptos_router::*;

use crate::auth;
use crate::state::global::GlobalState;

struct NavItem {
    icon: &'static str,
    label_key: &'static str,
    path: &'static str,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem { icon: "📊", label_key: "dashboard", path: "/dashboard" },
    NavItem { icon: "🔍", label_key: "analyze", path: "/analyze" },
    NavItem { icon: "📄", label_key: "evidence", path: "/evidence" },
    NavItem { icon: "💬", label_key: "q_and_a", path: "/chat" },
    NavItem { icon: "🌐", label_key: "language_settings", path: "/settings/language" },
];

/// Dashboard shell with sidebar and main content area
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let collapsed = state.sidebar_collapsed;
    let (mobile_open, set_mobile_open) = create_signal(false);

    let state_for_theme = state.clone();
    let toggle_theme = move |_| state_for_theme.toggle_theme();

    let navigate = use_navigate();
    let logout = move |_| {
        auth::sign_out();
        navigate("/", Default::default());
    };

    let state_for_nav = state.clone();
    let state_for_footer = state.clone();

    view! {
        <div class="min-h-screen flex bg-gray-900 text-white">
            // Mobile overlay
            {move || {
                if mobile_open.get() {
                    view! {
                        <div
                            class="fixed inset-0 bg-gray-950/60 backdrop-blur-sm z-40 lg:hidden"
                            on:click=move |_| set_mobile_open.set(false)
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Sidebar
            <aside class=move || format!(
                "fixed lg:sticky top-0 left-0 z-50 h-screen bg-gray-800 border-r border-gray-700 \
                 flex flex-col transition-all duration-300 {} {}",
                if collapsed.get() { "w-20" } else { "w-64" },
                if mobile_open.get() { "translate-x-0" } else { "-translate-x-full lg:translate-x-0" },
            )>
                // Brand and collapse toggle
                <div class="h-16 flex items-center justify-between px-4 border-b border-gray-700">
                    <A href="/dashboard" class="flex items-center space-x-3">
                        <span class="text-2xl">"📈"</span>
                        {move || {
                            if !collapsed.get() {
                                view! {
                                    <span class="text-lg font-bold">"FundingSense"</span>
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}
                    </A>
                    <button
                        class="hidden lg:block px-2 py-1 rounded hover:bg-gray-700 text-gray-400"
                        on:click=move |_| collapsed.update(|c| *c = !*c)
                    >
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                </div>

                // Navigation links
                <nav class="flex-1 p-4 space-y-1 overflow-y-auto">
                    {NAV_ITEMS.iter().map(|item| {
                        let state = state_for_nav.clone();
                        let label_key = item.label_key;
                        let icon = item.icon;
                        view! {
                            <A
                                href=item.path
                                class="flex items-center gap-3 px-4 py-3 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                active_class="bg-gray-700 text-white"
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                <span class="text-xl shrink-0">{icon}</span>
                                {move || {
                                    if !collapsed.get() {
                                        view! {
                                            <span class="font-medium">{state.t(label_key)}</span>
                                        }.into_view()
                                    } else {
                                        view! {}.into_view()
                                    }
                                }}
                            </A>
                        }
                    }).collect_view()}
                </nav>

                // Theme toggle and sign-out
                <div class="p-4 border-t border-gray-700 space-y-1">
                    <button
                        on:click=toggle_theme
                        class="flex items-center gap-3 px-4 py-3 rounded-lg w-full text-gray-300 hover:bg-gray-700 transition-colors"
                    >
                        <span class="text-xl shrink-0">
                            {
                                let dark_mode = state.dark_mode;
                                move || if dark_mode.get() { "☀️" } else { "🌙" }
                            }
                        </span>
                        {
                            let state = state_for_footer.clone();
                            move || {
                                if !collapsed.get() {
                                    view! {
                                        <span class="font-medium">{state.t("toggle_theme")}</span>
                                    }.into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }
                        }
                    </button>
                    <button
                        on:click=logout
                        class="flex items-center gap-3 px-4 py-3 rounded-lg w-full text-gray-300 hover:bg-red-900/30 hover:text-red-400 transition-colors"
                    >
                        <span class="text-xl shrink-0">"🚪"</span>
                        {
                            let state = state.clone();
                            move || {
                                if !collapsed.get() {
                                    view! {
                                        <span class="font-medium">{state.t("logout")}</span>
                                    }.into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }
                        }
                    </button>
                </div>
            </aside>

            // Main column
            <div class="flex-1 flex flex-col min-h-screen">
                // Mobile header
                <header class="lg:hidden h-16 border-b border-gray-700 flex items-center justify-between px-4 bg-gray-900 sticky top-0 z-30">
                    <button
                        class="px-2 py-1 rounded hover:bg-gray-700"
                        on:click=move |_| set_mobile_open.set(true)
                    >
                        "☰"
                    </button>
                    <A href="/dashboard" class="flex items-center gap-2">
                        <span class="text-xl">"📈"</span>
                        <span class="font-bold">"FundingSense"</span>
                    </A>
                    <div class="w-8" />
                </header>

                <main class="flex-1 p-6 lg:p-8 overflow-auto">{children()}</main>
            </div>
        </div>
    }
}
