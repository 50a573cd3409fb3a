//! Catalog card linking to a course's detail page.

use leptos::prelude::*;

use crate::net::types::Course;

const SUMMARY_CHARS: usize = 140;

#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let href = course.href();
    let summary = course.summary(SUMMARY_CHARS);
    let level = course.difficulty_level.clone().unwrap_or_else(|| "All levels".to_owned());
    let credits = format!("{} ECTS", course.course_credits);

    view! {
        <a class="course-card" href=href>
            <h3 class="course-card__title">{course.name}</h3>
            <div class="course-card__meta">
                <span class="course-card__level">{level}</span>
                <span class="course-card__credits">{credits}</span>
            </div>
            <p class="course-card__summary">{summary}</p>
        </a>
    }
}

/// Grid of [`CourseCard`]s with an empty-state message.
#[component]
pub fn CourseGrid(courses: Vec<Course>, #[prop(into)] empty: String) -> impl IntoView {
    if courses.is_empty() {
        return view! { <p class="course-grid__empty">{empty}</p> }.into_any();
    }
    view! {
        <div class="course-grid">
            {courses.into_iter().map(|course| view! { <CourseCard course=course/> }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
