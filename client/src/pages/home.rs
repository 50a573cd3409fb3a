//! Landing page with a hero banner and the newest courses.

use leptos::prelude::*;

use crate::components::course_card::CourseGrid;
use crate::config::ClientConfig;

const FEATURED_COUNT: usize = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let courses = LocalResource::new(move || crate::net::api::fetch_courses(config.clone()));

    view! {
        <section class="home-page">
            <div class="hero">
                <h1>"Learn something new"</h1>
                <p>"Browse courses from providers across the country and save the ones you like."</p>
                <a class="btn btn--primary" href="/course">"Browse all courses"</a>
            </div>
            <h2>"Featured courses"</h2>
            <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                {move || {
                    courses
                        .get()
                        .map(|list| {
                            let featured: Vec<_> = list.unwrap_or_default().into_iter().take(FEATURED_COUNT).collect();
                            view! { <CourseGrid courses=featured empty="Courses will appear here soon."/> }
                        })
                }}
            </Suspense>
        </section>
    }
}
