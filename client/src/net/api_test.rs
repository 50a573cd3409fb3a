use super::*;

#[test]
fn success_range_is_ok() {
    assert_eq!(classify_status(200), ResponseClass::Ok);
    assert_eq!(classify_status(204), ResponseClass::Ok);
}

#[test]
fn forbidden_is_distinct_from_unauthorized() {
    assert_eq!(classify_status(401), ResponseClass::Unauthorized);
    assert_eq!(classify_status(403), ResponseClass::Forbidden);
}

#[test]
fn other_statuses_are_failures() {
    assert_eq!(classify_status(404), ResponseClass::Failed(404));
    assert_eq!(classify_status(500), ResponseClass::Failed(500));
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("a.b.c"), "Bearer a.b.c");
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(course_endpoint(42), "/courses/42");
    assert_eq!(favorite_endpoint(9), "/favorites/9");
}

#[test]
fn search_endpoint_encodes_query_as_path_segment() {
    assert_eq!(search_endpoint("  java  "), "/courses/search/java");
    assert_eq!(search_endpoint("data science"), "/courses/search/data%20science");
    assert_eq!(search_endpoint("c++/rust"), "/courses/search/c%2B%2B%2Frust");
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::InvalidCredentials.to_string(), "invalid username or password");
    assert_eq!(ApiError::Status(502).to_string(), "server responded with status 502");
}
