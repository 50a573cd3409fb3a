//! Cookie helpers for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the token lives in `document.cookie`. During SSR the same
//! cookie arrives on the request headers, so reads work on both sides and the
//! server renders the same session state the browser hydrates with. Writes are
//! browser-only.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// `Set-Cookie` style assignment for `document.cookie`.
pub fn set_cookie_string(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; max-age={max_age_secs}; path=/; SameSite=Lax")
}

/// Assignment that expires `name` immediately.
pub fn delete_cookie_string(name: &str) -> String {
    format!("{name}=; max-age=0; path=/; SameSite=Lax")
}

/// Find `name` in a `Cookie` header / `document.cookie` string.
///
/// Empty values count as absent.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Read cookie `name` from the browser or, under SSR, the current request.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let raw = html.cookie().ok()?;
        find_cookie(&raw, name)
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let parts = leptos::prelude::use_context::<http::request::Parts>()?;
        parts
            .headers
            .get_all(http::header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|raw| find_cookie(raw, name))
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        let _ = name;
        None
    }
}

/// Assign a raw cookie string in the browser. No-op elsewhere.
pub fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        if html.set_cookie(assignment).is_err() {
            log::warn!("failed to write cookie");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}
