//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app.rs` mounts one Leptos `<Route>` per descriptor here. The navigation
//! guard and the nav bar look routes up by path to read their access
//! metadata, so this table is the single place that says which pages need a
//! login or a role.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Session;

/// Page component a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Courses,
    CourseDetail,
    Contact,
    About,
    Search,
    Login,
    Account,
    Favorites,
    AdminDashboard,
    AdminCourses,
    AdminUsers,
}

/// Access metadata for a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    /// Roles allowed to see the route. Empty means any visitor.
    pub roles: &'static [&'static str],
}

impl RouteMeta {
    const PUBLIC: Self = Self { requires_auth: false, roles: &[] };
    const MEMBER: Self = Self { requires_auth: true, roles: &[] };
    const ADMIN: Self = Self { requires_auth: true, roles: &["admin"] };
}

/// Path pattern, display name, page and access metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Segments starting with `:` match any single segment.
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    /// True when `path` (no query string) matches this route's pattern.
    pub fn matches(&self, path: &str) -> bool {
        let pattern: Vec<&str> = segments(self.path).collect();
        let actual: Vec<&str> = segments(path).collect();
        pattern.len() == actual.len()
            && pattern
                .iter()
                .zip(&actual)
                .all(|(want, got)| want.starts_with(':') || want == got)
    }

    /// Whether nav links to this route should be shown for `session`.
    pub fn visible_to(&self, session: &Session) -> bool {
        if self.meta.requires_auth && !session.is_logged_in() {
            return false;
        }
        self.meta.roles.is_empty() || self.meta.roles.iter().any(|role| session.has_role(role))
    }
}

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/", name: "Home", page: Page::Home, meta: RouteMeta::PUBLIC },
    RouteDescriptor { path: "/course", name: "Courses", page: Page::Courses, meta: RouteMeta::PUBLIC },
    RouteDescriptor { path: "/course/:id", name: "Course", page: Page::CourseDetail, meta: RouteMeta::PUBLIC },
    RouteDescriptor { path: "/contact", name: "Contact", page: Page::Contact, meta: RouteMeta::PUBLIC },
    RouteDescriptor { path: "/about", name: "About", page: Page::About, meta: RouteMeta::PUBLIC },
    RouteDescriptor { path: "/search", name: "Search", page: Page::Search, meta: RouteMeta::PUBLIC },
    RouteDescriptor { path: "/login", name: "Login", page: Page::Login, meta: RouteMeta::PUBLIC },
    RouteDescriptor { path: "/account", name: "Account", page: Page::Account, meta: RouteMeta::MEMBER },
    RouteDescriptor { path: "/favorites", name: "Favorites", page: Page::Favorites, meta: RouteMeta::MEMBER },
    RouteDescriptor { path: "/admin", name: "Admin", page: Page::AdminDashboard, meta: RouteMeta::ADMIN },
    RouteDescriptor {
        path: "/admin/courses",
        name: "Manage courses",
        page: Page::AdminCourses,
        meta: RouteMeta::ADMIN,
    },
    RouteDescriptor { path: "/admin/users", name: "Manage users", page: Page::AdminUsers, meta: RouteMeta::ADMIN },
];

/// Links shown in the header, in order.
pub const NAV_PAGES: &[Page] = &[Page::Home, Page::Courses, Page::About, Page::Contact, Page::Favorites, Page::AdminDashboard];

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('?').next().unwrap_or_default().split('/').filter(|s| !s.is_empty())
}

/// First route whose pattern matches `path`.
pub fn match_route(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.matches(path))
}

/// Metadata for `path`; unknown paths are public.
pub fn meta_for(path: &str) -> RouteMeta {
    match_route(path).map(|route| route.meta).unwrap_or_default()
}

/// Descriptor for `page`.
pub fn descriptor(page: Page) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.page == page)
}
