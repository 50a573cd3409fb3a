//! Static informational pages.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="info-page">
            <h1>"About us"</h1>
            <p>
                "The course catalog collects courses from several providers in one place, "
                "so you can compare levels, credits and schedules before you sign up."
            </p>
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="info-page">
            <h1>"Contact"</h1>
            <p>"Questions about a course or your account? Get in touch."</p>
            <address>
                "Email: " <a href="mailto:contact@course-catalog.example">"contact@course-catalog.example"</a>
            </address>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="info-page">
            <h1>"Page not found"</h1>
            <a href="/">"Back to the catalog"</a>
        </section>
    }
}
