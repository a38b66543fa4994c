//! Evidence Page
//!
//! Two-tab evidence browser: sources cited across the user's analyses,
//! and the full indexed intelligence library. Entries refetch on every
//! tab switch so each view is fresh.

use leptos::*;

use crate::api;
use crate::api::{EvidenceUsed, LibraryEntry, SourceType};
use crate::components::{DashboardLayout, ListSkeleton};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EvidenceTab {
    Used,
    Library,
}

/// Collection an activated tab fetches from. Every activation maps to
/// exactly one fetch; there is no cross-tab cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FetchTarget {
    UsedEvidence,
    Library,
}

fn fetch_target(tab: EvidenceTab) -> FetchTarget {
    match tab {
        EvidenceTab::Used => FetchTarget::UsedEvidence,
        EvidenceTab::Library => FetchTarget::Library,
    }
}

/// Case-insensitive match across the searchable text of a cited source.
pub(crate) fn matches_used(item: &EvidenceUsed, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(&query)
        || item.source_name.to_lowercase().contains(&query)
        || item.usage_reason.to_lowercase().contains(&query)
}

/// Case-insensitive match across the searchable text of a library entry.
pub(crate) fn matches_library(item: &LibraryEntry, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(&query)
        || item.source_name.to_lowercase().contains(&query)
        || item
            .content
            .as_deref()
            .map(|c| c.to_lowercase().contains(&query))
            .unwrap_or(false)
}

/// Count entries per source type for the filter chips.
pub(crate) fn type_counts(types: impl Iterator<Item = SourceType>) -> (usize, usize, usize) {
    let mut news = 0;
    let mut policy = 0;
    let mut dataset = 0;
    for t in types {
        match t {
            SourceType::News => news += 1,
            SourceType::Policy => policy += 1,
            SourceType::Dataset => dataset += 1,
        }
    }
    (news, policy, dataset)
}

#[component]
pub fn Evidence() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (tab, set_tab) = create_signal(EvidenceTab::Used);
    let (used, set_used) = create_signal::<Vec<EvidenceUsed>>(Vec::new());
    let (library, set_library) = create_signal::<Vec<LibraryEntry>>(Vec::new());
    let (loading, set_loading) = create_signal(true);
    let (query, set_query) = create_signal(String::new());
    let (type_filter, set_type_filter) = create_signal::<Option<SourceType>>(None);

    // Refetch on every tab switch; stale cross-tab data is never shown.
    let state_for_fetch = state.clone();
    create_effect(move |_| {
        let current_tab = tab.get();
        let user_id = state_for_fetch.user_id();
        let state = state_for_fetch.clone();

        set_loading.set(true);
        spawn_local(async move {
            match fetch_target(current_tab) {
                FetchTarget::UsedEvidence => {
                    match api::get_all_evidence(user_id.as_deref()).await {
                        Ok(items) => set_used.set(items),
                        Err(e) => state.show_error(&e),
                    }
                }
                FetchTarget::Library => match api::get_intelligence_library().await {
                    Ok(items) => set_library.set(items),
                    Err(e) => state.show_error(&e),
                },
            }
            set_loading.set(false);
        });
    });

    let filtered_used = create_memo(move |_| {
        let q = query.get();
        let filter = type_filter.get();
        used.get()
            .into_iter()
            .filter(|item| filter.map_or(true, |t| item.source_type == t))
            .filter(|item| matches_used(item, &q))
            .collect::<Vec<_>>()
    });

    let filtered_library = create_memo(move |_| {
        let q = query.get();
        let filter = type_filter.get();
        library.get()
            .into_iter()
            .filter(|item| filter.map_or(true, |t| item.source_type == t))
            .filter(|item| matches_library(item, &q))
            .collect::<Vec<_>>()
    });

    let counts = create_memo(move |_| match tab.get() {
        EvidenceTab::Used => type_counts(used.get().iter().map(|i| i.source_type)),
        EvidenceTab::Library => type_counts(library.get().iter().map(|i| i.source_type)),
    });

    let title = state.t("evidence");
    let search_placeholder = state.t("search_sources");
    let all_label = state.t("all_types");
    let used_for_label = state.t("used_for");
    let state_for_total = state.clone();

    view! {
        <DashboardLayout>
            <div class="max-w-4xl mx-auto space-y-6">
                <h1 class="text-2xl font-bold">{title}</h1>

                // Tabs
                <div class="flex gap-2 border-b border-gray-700">
                    <TabButton
                        label="Used in my analyses"
                        active=Signal::derive(move || tab.get() == EvidenceTab::Used)
                        on_select=move |_| set_tab.set(EvidenceTab::Used)
                    />
                    <TabButton
                        label="Intelligence library"
                        active=Signal::derive(move || tab.get() == EvidenceTab::Library)
                        on_select=move |_| set_tab.set(EvidenceTab::Library)
                    />
                </div>

                // Search and type filter
                <div class="flex flex-col sm:flex-row gap-3">
                    <input
                        type="text"
                        class="flex-1 px-4 py-2 bg-gray-800 border border-gray-700 rounded-lg focus:border-indigo-500 focus:outline-none"
                        placeholder=search_placeholder
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <div class="flex gap-2">
                        <FilterChip
                            label=Signal::derive(move || all_label.to_string())
                            active=Signal::derive(move || type_filter.get().is_none())
                            on_select=move |_| set_type_filter.set(None)
                        />
                        <FilterChip
                            label=Signal::derive(move || format!("📰 {}", counts.get().0))
                            active=Signal::derive(move || type_filter.get() == Some(SourceType::News))
                            on_select=move |_| set_type_filter.set(Some(SourceType::News))
                        />
                        <FilterChip
                            label=Signal::derive(move || format!("📜 {}", counts.get().1))
                            active=Signal::derive(move || type_filter.get() == Some(SourceType::Policy))
                            on_select=move |_| set_type_filter.set(Some(SourceType::Policy))
                        />
                        <FilterChip
                            label=Signal::derive(move || format!("🗄️ {}", counts.get().2))
                            active=Signal::derive(move || type_filter.get() == Some(SourceType::Dataset))
                            on_select=move |_| set_type_filter.set(Some(SourceType::Dataset))
                        />
                    </div>
                </div>

                // Result count
                <p class="text-sm text-gray-500">
                    {move || match tab.get() {
                        EvidenceTab::Used => filtered_used.get().len(),
                        EvidenceTab::Library => filtered_library.get().len(),
                    }}
                    " "
                    {state_for_total.t("total_sources")}
                </p>

                // Entries
                {move || {
                    if loading.get() {
                        return view! { <ListSkeleton count=5 /> }.into_view();
                    }
                    match tab.get() {
                        EvidenceTab::Used => view! {
                            <ul class="space-y-3">
                                {filtered_used.get().into_iter().map(|item| {
                                    view! { <UsedCard item used_for_label /> }
                                }).collect_view()}
                            </ul>
                        }.into_view(),
                        EvidenceTab::Library => view! {
                            <ul class="space-y-3">
                                {filtered_library.get().into_iter().map(|item| {
                                    view! { <LibraryCard item /> }
                                }).collect_view()}
                            </ul>
                        }.into_view(),
                    }
                }}
            </div>
        </DashboardLayout>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    on_select: impl Fn(ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            class=move || format!(
                "px-4 py-2 font-medium border-b-2 -mb-px transition-colors {}",
                if active.get() {
                    "border-indigo-500 text-white"
                } else {
                    "border-transparent text-gray-400 hover:text-white"
                }
            )
            on:click=on_select
        >
            {label}
        </button>
    }
}

#[component]
fn FilterChip(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] active: Signal<bool>,
    on_select: impl Fn(ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            class=move || format!(
                "px-3 py-2 rounded-lg text-sm font-medium transition-colors {}",
                if active.get() {
                    "bg-indigo-600 text-white"
                } else {
                    "bg-gray-800 text-gray-400 hover:text-white border border-gray-700"
                }
            )
            on:click=on_select
        >
            {move || label.get()}
        </button>
    }
}

#[component]
fn UsedCard(item: EvidenceUsed, used_for_label: &'static str) -> impl IntoView {
    view! {
        <li class="bg-gray-800 rounded-xl border border-gray-700 p-5 space-y-2">
            <div class="flex items-center gap-2">
                <span>{item.source_type.icon()}</span>
                <span class="font-medium">{item.title.clone()}</span>
                <span class="px-2 py-0.5 bg-gray-700 rounded text-xs text-gray-300 ml-auto">
                    {item.source_type.label()}
                </span>
            </div>
            <p class="text-sm text-gray-500">
                {item.source_name.clone()}
                {if item.year.is_empty() { String::new() } else { format!(" · {}", item.year) }}
            </p>
            {if item.usage_reason.is_empty() {
                view! {}.into_view()
            } else {
                view! {
                    <p class="text-sm text-gray-400">{used_for_label}": "{item.usage_reason.clone()}</p>
                }.into_view()
            }}
            {match item.url.clone() {
                Some(url) => view! {
                    <a href=url target="_blank" rel="noopener" class="text-sm text-indigo-400 hover:text-indigo-300">
                        "View source ↗"
                    </a>
                }.into_view(),
                None => view! {}.into_view(),
            }}
        </li>
    }
}

#[component]
fn LibraryCard(item: LibraryEntry) -> impl IntoView {
    view! {
        <li class="bg-gray-800 rounded-xl border border-gray-700 p-5 space-y-2">
            <div class="flex items-center gap-2">
                <span>{item.source_type.icon()}</span>
                <span class="font-medium">{item.title.clone()}</span>
                {match item.sector.clone() {
                    Some(sector) => view! {
                        <span class="px-2 py-0.5 bg-indigo-900/50 rounded text-xs text-indigo-300">
                            {sector}
                        </span>
                    }.into_view(),
                    None => view! {}.into_view(),
                }}
                <span class="px-2 py-0.5 bg-gray-700 rounded text-xs text-gray-300 ml-auto">
                    {item.source_type.label()}
                </span>
            </div>
            <p class="text-sm text-gray-500">
                {item.source_name.clone()}
                {if item.year.is_empty() { String::new() } else { format!(" · {}", item.year) }}
            </p>
            {match item.content.clone() {
                Some(content) => view! {
                    <p class="text-sm text-gray-400 line-clamp-3">{content}</p>
                }.into_view(),
                None => view! {}.into_view(),
            }}
            {match item.url.clone() {
                Some(url) => view! {
                    <a href=url target="_blank" rel="noopener" class="text-sm text-indigo-400 hover:text-indigo-300">
                        "View source ↗"
                    </a>
                }.into_view(),
                None => view! {}.into_view(),
            }}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(title: &str, source: &str, reason: &str, t: SourceType) -> EvidenceUsed {
        EvidenceUsed {
            source_type: t,
            title: title.to_string(),
            source_name: source.to_string(),
            year: "2024".to_string(),
            url: None,
            usage_reason: reason.to_string(),
        }
    }

    fn library(title: &str, content: Option<&str>, t: SourceType) -> LibraryEntry {
        LibraryEntry {
            source_type: t,
            title: title.to_string(),
            source_name: "ET".to_string(),
            content: content.map(str::to_string),
            sector: None,
            year: "2024".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_used_search_covers_title_source_and_reason() {
        let item = used(
            "Agritech funding up 40%",
            "Economic Times",
            "Market momentum",
            SourceType::News,
        );

        assert!(matches_used(&item, "agritech"));
        assert!(matches_used(&item, "ECONOMIC"));
        assert!(matches_used(&item, "momentum"));
        assert!(matches_used(&item, "  "));
        assert!(!matches_used(&item, "fintech"));
    }

    #[test]
    fn test_library_search_covers_indexed_content() {
        let with_content = library(
            "PLI scheme notification",
            Some("Production linked incentives for solar manufacturers"),
            SourceType::Policy,
        );
        let without = library("PLI scheme notification", None, SourceType::Policy);

        assert!(matches_library(&with_content, "solar"));
        assert!(!matches_library(&without, "solar"));
        assert!(matches_library(&without, "pli"));
    }

    #[test]
    fn test_each_tab_activation_triggers_its_own_fetch() {
        // Switching used -> library -> used is three activations and
        // three fetches against the right collections; nothing is served
        // from a cache.
        let activations = [EvidenceTab::Used, EvidenceTab::Library, EvidenceTab::Used];

        let mut used_calls = 0;
        let mut library_calls = 0;
        for tab in activations {
            match fetch_target(tab) {
                FetchTarget::UsedEvidence => used_calls += 1,
                FetchTarget::Library => library_calls += 1,
            }
        }

        assert_eq!(used_calls, 2);
        assert_eq!(library_calls, 1);
        assert_eq!(fetch_target(EvidenceTab::Library), FetchTarget::Library);
        assert_eq!(fetch_target(EvidenceTab::Used), FetchTarget::UsedEvidence);
    }

    #[test]
    fn test_type_counts_sum_per_category() {
        let types = [
            SourceType::News,
            SourceType::News,
            SourceType::Policy,
            SourceType::Dataset,
            SourceType::Dataset,
            SourceType::Dataset,
        ];
        assert_eq!(type_counts(types.into_iter()), (2, 1, 3));
        assert_eq!(type_counts(std::iter::empty()), (0, 0, 0));
    }
}
