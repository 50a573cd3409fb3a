//! Search results for `/search?q=...`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::course_card::CourseGrid;
use crate::config::ClientConfig;

#[component]
pub fn SearchPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let query_map = use_query_map();
    let query = move || query_map.read().get("q").unwrap_or_default();

    let results = LocalResource::new(move || crate::net::api::search_courses(config.clone(), query()));

    view! {
        <section class="search-page">
            <h1>"Results for \u{201c}" {query} "\u{201d}"</h1>
            <Suspense fallback=move || view! { <p>"Searching..."</p> }>
                {move || {
                    results
                        .get()
                        .map(|found| {
                            view! { <CourseGrid courses=found.unwrap_or_default() empty="No courses match your search."/> }
                        })
                }}
            </Suspense>
        </section>
    }
}
