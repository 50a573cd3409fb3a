//! Admin area. The navigation guard keeps non-admins out of every page here.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::Course;
use crate::state::session::Session;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    view! {
        <section class="admin-page">
            <h1>"Admin dashboard"</h1>
            <p>"Signed in as " {move || session.with(|s| s.display_name().to_owned())} "."</p>
            <nav class="admin-page__links">
                <a class="btn" href="/admin/courses">"Manage courses"</a>
                <a class="btn" href="/admin/users">"Manage users"</a>
            </nav>
        </section>
    }
}

#[component]
pub fn AdminCoursesPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let courses = LocalResource::new(move || crate::net::api::fetch_courses(config.clone()));

    view! {
        <section class="admin-page">
            <h1>"Courses"</h1>
            <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                {move || {
                    courses
                        .get()
                        .map(|list| {
                            view! {
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"ID"</th>
                                            <th>"Name"</th>
                                            <th>"Level"</th>
                                            <th>"Credits"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.unwrap_or_default().into_iter().map(course_row).collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

// Plain text: admins stay inside the admin area, so public course links would bounce.
fn course_row(course: Course) -> impl IntoView {
    view! {
        <tr>
            <td>{course.id}</td>
            <td>{course.name}</td>
            <td>{course.difficulty_level.unwrap_or_default()}</td>
            <td>{course.course_credits}</td>
        </tr>
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    view! {
        <section class="admin-page">
            <h1>"Users"</h1>
            <p>"Accounts and roles are managed by the course API."</p>
            <p>
                "Your roles: "
                {move || session.with(|s| s.roles().iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))}
            </p>
        </section>
    }
}
