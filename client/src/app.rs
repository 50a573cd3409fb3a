//! Root application component with routing and context providers.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::guard::{NavigationOutcome, install_navigation_guard};
use crate::pages::{
    account::AccountPage,
    admin::{AdminCoursesPage, AdminDashboardPage, AdminUsersPage},
    courses::{CourseDetailPage, CoursesPage},
    favorites::FavoritesPage,
    home::HomePage,
    info::{AboutPage, ContactPage, NotFoundPage},
    login::LoginPage,
    search::SearchPage,
};
use crate::routes::Page;
use crate::state::persistence::BrowserPersistence;
use crate::state::session::Session;
use crate::theme::LIGHT_THEME;
use crate::util::clock;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=LIGHT_THEME.data_attr() style=LIGHT_THEME.css_variables()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session before anything routes so the first guard evaluation
/// already sees a rehydrated login.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let persistence = BrowserPersistence::new(config.persistence.clone());
    let session = RwSignal::new(Session::rehydrate(&persistence, config.rehydrate, clock::now_unix_secs()));

    provide_context(config);
    provide_context(persistence);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/course-catalog.css"/>
        <Title text="Course Catalog"/>

        <Router>
            <Layout/>
        </Router>
    }
}

/// Header + routed content. Lives inside `<Router>` so the guard can watch
/// the location.
#[component]
fn Layout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    provide_context(install_navigation_guard(session, config.guard));

    view! {
        <NavBar/>
        <main class="page">
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| page_view(Page::Home)/>
                <Route path=StaticSegment("course") view=|| page_view(Page::Courses)/>
                <Route path=(StaticSegment("course"), ParamSegment("id")) view=|| page_view(Page::CourseDetail)/>
                <Route path=StaticSegment("contact") view=|| page_view(Page::Contact)/>
                <Route path=StaticSegment("about") view=|| page_view(Page::About)/>
                <Route path=StaticSegment("search") view=|| page_view(Page::Search)/>
                <Route path=StaticSegment("login") view=|| page_view(Page::Login)/>
                <Route path=StaticSegment("account") view=|| page_view(Page::Account)/>
                <Route path=StaticSegment("favorites") view=|| page_view(Page::Favorites)/>
                <Route path=StaticSegment("admin") view=|| page_view(Page::AdminDashboard)/>
                <Route path=(StaticSegment("admin"), StaticSegment("courses")) view=|| page_view(Page::AdminCourses)/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=|| page_view(Page::AdminUsers)/>
            </Routes>
        </main>
    }
}

/// Route view for `page`. Content mounts only once the guard allows it.
fn page_view(page: Page) -> impl IntoView {
    view! { <Guarded page=page/> }
}

#[component]
fn Guarded(page: Page) -> impl IntoView {
    let outcome = expect_context::<Signal<NavigationOutcome>>();
    view! {
        <Show when=move || outcome.get().is_allow() fallback=|| view! { <p class="guarded__pending">"Redirecting..."</p> }>
            {move || page_content(page)}
        </Show>
    }
}

fn page_content(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Courses => view! { <CoursesPage/> }.into_any(),
        Page::CourseDetail => view! { <CourseDetailPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Search => view! { <SearchPage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Account => view! { <AccountPage/> }.into_any(),
        Page::Favorites => view! { <FavoritesPage/> }.into_any(),
        Page::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
        Page::AdminCourses => view! { <AdminCoursesPage/> }.into_any(),
        Page::AdminUsers => view! { <AdminUsersPage/> }.into_any(),
    }
}
