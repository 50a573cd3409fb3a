use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_empty() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("CATALOG_API_URL", "https://catalog.example.test/api/"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.listen_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.api_url.as_deref(), Some("https://catalog.example.test/api"));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = HostConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
}

#[test]
fn blank_api_url_means_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[("CATALOG_API_URL", "  ")])).unwrap();
    assert!(cfg.api_url.is_none());
}

#[test]
fn api_url_requires_http_scheme() {
    let err = HostConfig::from_lookup(lookup(&[("CATALOG_API_URL", "catalog:8080")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidApiUrl(_)));
}

#[test]
fn client_only_settings_do_not_affect_host_config() {
    // Session rehydration is a client build setting; the host must not reject it.
    let cfg = HostConfig::from_lookup(lookup(&[("REHYDRATE_SESSION", "maybe")])).unwrap();
    assert_eq!(cfg, HostConfig::default());
}
