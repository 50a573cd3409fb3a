use super::*;

fn names() -> Vec<String> {
    ["Introduction to Java", "Advanced JavaScript", "Data Science with Python", "Cloud Fundamentals"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect()
}

#[test]
fn blank_query_has_no_href() {
    assert_eq!(search_href(""), None);
    assert_eq!(search_href("   "), None);
}

#[test]
fn search_href_encodes_query() {
    assert_eq!(search_href(" java ").as_deref(), Some("/search?q=java"));
    assert_eq!(search_href("c++ basics").as_deref(), Some("/search?q=c%2B%2B+basics"));
}

#[test]
fn normalize_query_trims() {
    assert_eq!(normalize_query("  rust "), Some("rust".to_owned()));
    assert_eq!(normalize_query("\t"), None);
}

#[test]
fn suggest_filters_case_insensitively() {
    let hits = suggest("java", &names(), 10);
    assert_eq!(hits, vec!["Introduction to Java".to_owned(), "Advanced JavaScript".to_owned()]);
}

#[test]
fn suggest_puts_prefix_hits_first() {
    let hits = suggest("c", &names(), 10);
    assert_eq!(hits.first().map(String::as_str), Some("Cloud Fundamentals"));
}

#[test]
fn suggest_respects_limit_and_blank_input() {
    assert_eq!(suggest("", &names(), 2).len(), 2);
    assert_eq!(suggest("a", &names(), 1).len(), 1);
    assert!(suggest("zzz", &names(), 5).is_empty());
}
