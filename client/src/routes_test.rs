use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::state::persistence::MemoryPersistence;

fn session_with_roles(roles: &[&str]) -> Session {
    let body = URL_SAFE_NO_PAD.encode(serde_json::json!({ "roles": roles }).to_string());
    let mut session = Session::default();
    session.login(&format!("aGVhZA.{body}.sig"), &MemoryPersistence::new()).unwrap();
    session
}

#[test]
fn static_paths_match_exactly() {
    assert_eq!(match_route("/").map(|r| r.page), Some(Page::Home));
    assert_eq!(match_route("/about").map(|r| r.page), Some(Page::About));
    assert_eq!(match_route("/admin/users").map(|r| r.page), Some(Page::AdminUsers));
}

#[test]
fn param_segment_matches_any_value() {
    assert_eq!(match_route("/course/42").map(|r| r.page), Some(Page::CourseDetail));
    assert_eq!(match_route("/course").map(|r| r.page), Some(Page::Courses));
    assert!(match_route("/course/42/extra").is_none());
}

#[test]
fn trailing_slash_and_query_are_ignored() {
    assert_eq!(match_route("/about/").map(|r| r.page), Some(Page::About));
    assert_eq!(match_route("/search?q=rust").map(|r| r.page), Some(Page::Search));
}

#[test]
fn unknown_paths_are_public() {
    assert!(match_route("/nope").is_none());
    assert_eq!(meta_for("/nope"), RouteMeta::default());
    assert!(!meta_for("/nope").requires_auth);
}

#[test]
fn admin_group_requires_auth_and_admin_role() {
    for path in ["/admin", "/admin/courses", "/admin/users"] {
        let meta = meta_for(path);
        assert!(meta.requires_auth, "{path} should require auth");
        assert_eq!(meta.roles, &["admin"]);
    }
}

#[test]
fn member_routes_require_auth() {
    assert!(meta_for("/account").requires_auth);
    assert!(meta_for("/favorites").requires_auth);
    assert!(!meta_for("/course/3").requires_auth);
}

#[test]
fn every_page_has_exactly_one_descriptor() {
    for route in ROUTES {
        let count = ROUTES.iter().filter(|r| r.page == route.page).count();
        assert_eq!(count, 1, "{:?} listed {count} times", route.page);
        assert_eq!(descriptor(route.page), Some(route));
    }
}

#[test]
fn visibility_follows_login_and_roles() {
    let admin_route = descriptor(Page::AdminDashboard).unwrap();
    let favorites = descriptor(Page::Favorites).unwrap();
    let about = descriptor(Page::About).unwrap();

    let guest = Session::default();
    assert!(about.visible_to(&guest));
    assert!(!favorites.visible_to(&guest));
    assert!(!admin_route.visible_to(&guest));

    let member = session_with_roles(&["ROLE_USER"]);
    assert!(favorites.visible_to(&member));
    assert!(!admin_route.visible_to(&member));

    let admin = session_with_roles(&["ROLE_ADMIN"]);
    assert!(admin_route.visible_to(&admin));
}
