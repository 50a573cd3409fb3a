use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_builds_see_an_empty_store() {
    set_item("isLoggedIn", "true");
    assert_eq!(get_item("isLoggedIn"), None);
    remove_item("isLoggedIn");
    assert_eq!(get_item("isLoggedIn"), None);
}
