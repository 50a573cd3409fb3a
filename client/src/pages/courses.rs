//! Catalog pages: the full course list and a single course.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::course_card::CourseGrid;
use crate::config::ClientConfig;
use crate::net::api::AuthContext;
use crate::net::types::Course;
use crate::state::session::Session;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let courses = LocalResource::new(move || crate::net::api::fetch_courses(config.clone()));

    view! {
        <section class="catalog-page">
            <h1>"All courses"</h1>
            <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                {move || {
                    courses
                        .get()
                        .map(|list| {
                            view! { <CourseGrid courses=list.unwrap_or_default() empty="No courses available right now."/> }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let course_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());

    let course = LocalResource::new(move || {
        let config = config.clone();
        let id = course_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_course(config, id).await,
                None => None,
            }
        }
    });

    view! {
        <section class="course-page">
            <Suspense fallback=move || view! { <p>"Loading course..."</p> }>
                {move || {
                    course
                        .get()
                        .map(|found| match found {
                            Some(course) => view! { <CourseDetail course=course/> }.into_any(),
                            None => view! { <p class="course-page__missing">"Course not found."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn CourseDetail(course: Course) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let auth = AuthContext::from_context();
    let status = RwSignal::new(String::new());
    let id = course.id;

    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::add_favorite(auth, id).await {
                    Some(()) => status.set("Saved to favorites.".to_owned()),
                    None => status.set("Could not save this course.".to_owned()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, id, status);
        }
    };

    let dates = match (&course.start_date, &course.end_date) {
        (Some(start), Some(end)) => format!("{start} \u{2013} {end}"),
        (Some(start), None) => format!("Starts {start}"),
        _ => "Dates to be announced".to_owned(),
    };

    view! {
        <article class="course-detail">
            <h1>{course.name}</h1>
            <dl class="course-detail__facts">
                <dt>"Level"</dt>
                <dd>{course.difficulty_level.unwrap_or_else(|| "All levels".to_owned())}</dd>
                <dt>"Credits"</dt>
                <dd>{course.course_credits.to_string()}</dd>
                <dt>"Hours per week"</dt>
                <dd>{course.hours_per_week.to_string()}</dd>
                <dt>"Dates"</dt>
                <dd>{dates}</dd>
                <dt>"Certification"</dt>
                <dd>{course.related_certification.unwrap_or_else(|| "None".to_owned())}</dd>
            </dl>
            <p class="course-detail__description">{course.course_description.unwrap_or_default()}</p>
            <Show when=move || session.with(Session::is_logged_in)>
                <button class="btn btn--primary" on:click=on_save.clone()>"Save to favorites"</button>
            </Show>
            <p class="course-detail__status">{move || status.get()}</p>
        </article>
    }
}
