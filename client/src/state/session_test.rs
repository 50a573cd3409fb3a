use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::state::persistence::MemoryPersistence;

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.sig")
}

fn admin_token() -> String {
    token_with(&serde_json::json!({
        "roles": ["admin"],
        "name": "Ada",
        "email": "ada@example.com",
        "userId": 1
    }))
}

// =============================================================
// login
// =============================================================

#[test]
fn login_sets_roles_and_identity() {
    let store = MemoryPersistence::new();
    let mut session = Session::default();
    let payload = session.login(&admin_token(), &store).unwrap();

    assert!(session.is_logged_in());
    assert_eq!(session.roles(), payload.roles.as_slice());
    assert_eq!(session.roles(), &[Role::new("admin")]);
    assert_eq!(session.name(), Some("Ada"));
    assert_eq!(session.email(), Some("ada@example.com"));
    assert_eq!(session.user_id(), Some("1"));
    assert!(session.has_role("admin"));
}

#[test]
fn login_persists_token_and_flag() {
    let store = MemoryPersistence::new();
    let token = admin_token();
    Session::default().login(&token, &store).unwrap();
    assert_eq!(store.load_token(), Some(token));
    assert!(store.is_marked_logged_in());
}

#[test]
fn login_stores_token_without_bearer_prefix() {
    let store = MemoryPersistence::new();
    let token = admin_token();
    Session::default().login(&format!("  Bearer {token} "), &store).unwrap();
    assert_eq!(store.load_token(), Some(token));
}

#[test]
fn login_replaces_previous_roles() {
    let store = MemoryPersistence::new();
    let mut session = Session::default();
    session.login(&admin_token(), &store).unwrap();
    session
        .login(&token_with(&serde_json::json!({ "roles": ["user"] })), &store)
        .unwrap();
    assert_eq!(session.roles(), &[Role::new("user")]);
    assert_eq!(session.name(), None);
}

#[test]
fn failed_login_leaves_logged_out_session_unchanged() {
    let store = MemoryPersistence::new();
    let mut session = Session::default();
    let err = session.login("not-a-token", &store).unwrap_err();

    assert_eq!(err, SessionError::MalformedToken(TokenError::Format));
    assert_eq!(session, Session::default());
    assert_eq!(store.load_token(), None);
    assert!(!store.is_marked_logged_in());
}

#[test]
fn failed_login_leaves_logged_in_session_unchanged() {
    let store = MemoryPersistence::new();
    let mut session = Session::default();
    session.login(&admin_token(), &store).unwrap();
    let before = session.clone();

    assert!(session.login("a.%%%.c", &store).is_err());
    assert_eq!(session, before);
    assert_eq!(store.load_token(), Some(admin_token()));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_resets_everything() {
    let store = MemoryPersistence::new();
    let mut session = Session::default();
    session.login(&admin_token(), &store).unwrap();
    session.logout(&store);

    assert!(!session.is_logged_in());
    assert!(session.roles().is_empty());
    assert_eq!(session, Session::default());
    assert_eq!(store.load_token(), None);
    assert!(!store.is_marked_logged_in());
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryPersistence::new();
    let mut session = Session::default();
    session.logout(&store);
    session.logout(&store);
    assert!(!session.is_logged_in());
    assert!(session.roles().is_empty());
}

#[test]
fn display_name_falls_back_to_email_then_generic() {
    let store = MemoryPersistence::new();
    let mut session = Session::default();
    assert_eq!(session.display_name(), "Account");
    session
        .login(&token_with(&serde_json::json!({ "roles": [], "email": "e@x.io" })), &store)
        .unwrap();
    assert_eq!(session.display_name(), "e@x.io");
}

// =============================================================
// rehydrate
// =============================================================

#[test]
fn rehydrate_restores_from_stored_token() {
    let store = MemoryPersistence::with_token(admin_token());
    let session = Session::rehydrate(&store, RehydratePolicy::FromCookie, 0);
    assert!(session.is_logged_in());
    assert!(session.has_role("admin"));
    assert!(store.is_marked_logged_in());
}

#[test]
fn rehydrate_rewrites_missing_logged_in_flag() {
    let store = MemoryPersistence::new();
    store.store_token(&admin_token());
    assert!(!store.is_marked_logged_in());

    let session = Session::rehydrate(&store, RehydratePolicy::FromCookie, 0);
    assert!(session.is_logged_in());
    assert!(store.is_marked_logged_in());
}

#[test]
fn rehydrate_never_ignores_stored_token() {
    let store = MemoryPersistence::with_token(admin_token());
    let session = Session::rehydrate(&store, RehydratePolicy::Never, 0);
    assert_eq!(session, Session::default());
    assert!(store.load_token().is_some());
}

#[test]
fn rehydrate_clears_expired_token() {
    let expired = token_with(&serde_json::json!({ "roles": ["user"], "exp": 1_000 }));
    let store = MemoryPersistence::with_token(expired);
    let session = Session::rehydrate(&store, RehydratePolicy::FromCookie, 2_000);
    assert!(!session.is_logged_in());
    assert_eq!(store.load_token(), None);
    assert!(!store.is_marked_logged_in());
}

#[test]
fn rehydrate_clears_malformed_token() {
    let store = MemoryPersistence::with_token("garbage");
    let session = Session::rehydrate(&store, RehydratePolicy::FromCookie, 0);
    assert!(!session.is_logged_in());
    assert_eq!(store.load_token(), None);
}

#[test]
fn rehydrate_drops_stale_flag_without_token() {
    let store = MemoryPersistence::new();
    store.mark_logged_in();
    let session = Session::rehydrate(&store, RehydratePolicy::FromCookie, 0);
    assert!(!session.is_logged_in());
    assert!(!store.is_marked_logged_in());
}
