//! Auth Layout
//!
//! Split-panel shell for sign-in style pages: brand panel on the left,
//! form content on the right.

use leptos::*;
use leptos_router::*;

/// Two-panel layout for unauthenticated pages
#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-gray-900 text-white">
            // Brand panel
            <div class="hidden lg:flex lg:w-1/2 flex-col justify-between p-12 bg-gradient-to-br from-indigo-950 via-gray-900 to-gray-950">
                <A href="/" class="flex items-center gap-3">
                    <span class="text-3xl">"📈"</span>
                    <span class="text-xl font-bold">"FundingSense"</span>
                </A>
                <div class="space-y-4 max-w-md">
                    <h2 class="text-3xl font-bold leading-tight">
                        "Investor intelligence for founders who do their homework"
                    </h2>
                    <p class="text-gray-400">
                        "Evidence-backed investor matches, funding landscape context, and a \
                         research assistant that cites its sources."
                    </p>
                </div>
                <p class="text-sm text-gray-500">"© 2026 FundingSense"</p>
            </div>

            // Form panel
            <div class="flex-1 flex flex-col items-center justify-center p-6">
                <div class="w-full max-w-md space-y-8">
                    <div class="lg:hidden flex justify-center">
                        <A href="/" class="flex items-center gap-2">
                            <span class="text-2xl">"📈"</span>
                            <span class="text-lg font-bold">"FundingSense"</span>
                        </A>
                    </div>
                    <div class="text-center space-y-2">
                        <h1 class="text-2xl font-bold">{title}</h1>
                        <p class="text-gray-400">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}
