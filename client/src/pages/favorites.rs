//! Saved courses for the logged-in user.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::net::api::AuthContext;
use crate::net::types::Course;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let auth = AuthContext::from_context();
    // Bumped after a removal so the list refetches.
    let version = RwSignal::new(0_u32);
    let favorites = {
        let auth = auth.clone();
        LocalResource::new(move || {
            version.track();
            crate::net::api::fetch_favorites(auth.clone())
        })
    };

    let remove = Callback::new(move |course_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::remove_favorite(auth, course_id).await.is_some() {
                    version.update(|v| *v += 1);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, course_id, version);
        }
    });

    view! {
        <section class="favorites-page">
            <h1>"My favorites"</h1>
            <Suspense fallback=move || view! { <p>"Loading favorites..."</p> }>
                {move || {
                    favorites
                        .get()
                        .map(|found| {
                            let list = found.unwrap_or_default();
                            if list.is_empty() {
                                return view! { <p>"You have not saved any courses yet."</p> }.into_any();
                            }
                            view! {
                                <ul class="favorites-page__list">
                                    {list
                                        .into_iter()
                                        .map(|course| view! { <FavoriteRow course=course on_remove=remove/> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn FavoriteRow(course: Course, on_remove: Callback<i64>) -> impl IntoView {
    let id = course.id;
    view! {
        <li class="favorites-page__row">
            <CourseCard course=course/>
            <button class="btn" on:click=move |_| on_remove.run(id)>"Remove"</button>
        </li>
    }
}
