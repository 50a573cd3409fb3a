//! Top bar with site links, the search box, and the account controls.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::config::ClientConfig;
use crate::routes::{self, NAV_PAGES};
use crate::state::persistence::BrowserPersistence;
use crate::state::session::Session;

/// Site header.
///
/// Links are filtered by each route's access metadata so guests never see
/// links the guard would bounce them from.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let persistence = expect_context::<BrowserPersistence>();
    let config = expect_context::<ClientConfig>();

    let links = move || {
        session.with(|s| {
            NAV_PAGES
                .iter()
                .filter_map(|page| routes::descriptor(*page))
                .filter(|route| route.visible_to(s))
                .map(|route| view! { <a class="nav-bar__link" href=route.path>{route.name}</a> })
                .collect::<Vec<_>>()
        })
    };

    // The guard moves the user off protected pages once the session clears.
    let on_logout = move |_| session.update(|s| s.logout(&persistence));

    let login_path = config.guard.login_path.clone();

    view! {
        <header class="nav-bar">
            <a href="/" class="nav-bar__brand">"Course Catalog"</a>
            <nav class="nav-bar__links">{links}</nav>
            <SearchBar/>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || session.with(Session::is_logged_in)
                fallback=move || view! { <a class="btn btn--primary" href=login_path.clone()>"Log in"</a> }
            >
                <a class="nav-bar__user" href="/account">
                    {move || session.with(|s| s.display_name().to_owned())}
                </a>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
