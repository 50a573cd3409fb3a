//! Header search box with course-name suggestions.
//!
//! Submitting navigates to `/search?q=...` only when the trimmed query is
//! non-empty. The suggestion panel opens on focus and closes when focus
//! leaves the search container.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::config::ClientConfig;

const MAX_SUGGESTIONS: usize = 6;

/// Trimmed query, or `None` when there is nothing to search for.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Results-page URL for `raw`, or `None` for a blank query.
pub fn search_href(raw: &str) -> Option<String> {
    let query = normalize_query(raw)?;
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &query)
        .finish();
    Some(format!("/search?{encoded}"))
}

/// Up to `limit` names containing `input` (case-insensitive), prefix hits first.
pub fn suggest(input: &str, names: &[String], limit: usize) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return names.iter().take(limit).cloned().collect();
    }
    let mut hits: Vec<(bool, &String)> = names
        .iter()
        .filter_map(|name| {
            let lower = name.to_lowercase();
            lower.contains(&needle).then(|| (!lower.starts_with(&needle), name))
        })
        .collect();
    hits.sort_by_key(|(not_prefix, _)| *not_prefix);
    hits.into_iter().take(limit).map(|(_, name)| name.clone()).collect()
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());
    let open = RwSignal::new(false);
    let course_names = RwSignal::new(Vec::<String>::new());

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<ClientConfig>();
        leptos::task::spawn_local(async move {
            if let Some(courses) = crate::net::api::fetch_courses(config).await {
                course_names.set(courses.into_iter().map(|c| c.name).collect());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(href) = search_href(&query.get()) {
            open.set(false);
            navigate(&href, NavigateOptions::default());
        }
    };

    let suggestions = move || course_names.with(|names| suggest(&query.get(), names, MAX_SUGGESTIONS));

    view! {
        <form
            class="search-bar"
            role="search"
            on:submit=on_submit
            on:focusin=move |_| open.set(true)
            on:focusout=move |_| open.set(false)
        >
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search courses"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || open.get() && !suggestions().is_empty()>
                <ul class="search-bar__suggestions">
                    {move || {
                        suggestions()
                            .into_iter()
                            .map(|name| {
                                let href = search_href(&name).unwrap_or_default();
                                view! {
                                    <li class="search-bar__suggestion">
                                        // mousedown keeps focus in the form so the panel stays open for the click
                                        <a
                                            href=href
                                            on:mousedown=|ev| ev.prevent_default()
                                            on:click=move |_| open.set(false)
                                        >
                                            {name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </form>
    }
}
