use super::*;

#[test]
fn memory_store_round_trips_token_and_flag() {
    let store = MemoryPersistence::new();
    assert_eq!(store.load_token(), None);
    assert!(!store.is_marked_logged_in());

    store.store_token("a.b.c");
    store.mark_logged_in();
    assert_eq!(store.load_token().as_deref(), Some("a.b.c"));
    assert!(store.is_marked_logged_in());

    store.clear_token();
    store.clear_logged_in();
    assert_eq!(store.load_token(), None);
    assert!(!store.is_marked_logged_in());
}

#[test]
fn memory_store_clones_share_slots() {
    let store = MemoryPersistence::new();
    let other = store.clone();
    store.store_token("t.o.k");
    assert_eq!(other.load_token().as_deref(), Some("t.o.k"));
}

#[test]
fn seeded_memory_store_is_marked() {
    let store = MemoryPersistence::with_token("x.y.z");
    assert_eq!(store.load_token().as_deref(), Some("x.y.z"));
    assert!(store.is_marked_logged_in());
}

#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserPersistence::default();
    store.store_token("a.b.c");
    store.mark_logged_in();
    assert_eq!(store.load_token(), None);
    assert!(!store.is_marked_logged_in());
    assert_eq!(store.config().cookie_name, "authToken");
}
