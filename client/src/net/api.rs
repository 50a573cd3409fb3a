//! REST helpers for the course API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Public catalog reads return `Option` so a failed fetch renders an empty
//! state instead of crashing hydration. Authorized calls return `None` without
//! touching the network when there is no session or stored token. A `403`
//! means the API no longer accepts the token: the session is logged out and
//! the browser is sent to the login route.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use thiserror::Error;

use super::types::{Course, Credentials};
use crate::config::ClientConfig;
use crate::state::persistence::BrowserPersistence;
use crate::state::session::Session;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("not available on server")]
    Unavailable,
}

/// How an API status code is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ResponseClass {
    Ok,
    Unauthorized,
    Forbidden,
    Failed(u16),
}

pub(crate) fn classify_status(status: u16) -> ResponseClass {
    match status {
        200..=299 => ResponseClass::Ok,
        401 => ResponseClass::Unauthorized,
        403 => ResponseClass::Forbidden,
        other => ResponseClass::Failed(other),
    }
}

pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

pub(crate) fn course_endpoint(id: i64) -> String {
    format!("/courses/{id}")
}

pub(crate) fn search_endpoint(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.trim().as_bytes()).collect();
    // Path segment, not a form body: spaces must not become '+'.
    format!("/courses/search/{}", encoded.replace('+', "%20"))
}

pub(crate) fn favorite_endpoint(course_id: i64) -> String {
    format!("/favorites/{course_id}")
}

/// Everything an authorized call needs: where to send it, which session to
/// log out on `403`, and where the bearer token is stored.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub config: ClientConfig,
    pub session: RwSignal<Session>,
    pub persistence: BrowserPersistence,
}

impl AuthContext {
    /// Pull the pieces `App` provides from context.
    pub fn from_context() -> Self {
        Self {
            config: expect_context::<ClientConfig>(),
            session: expect_context::<RwSignal<Session>>(),
            persistence: expect_context::<BrowserPersistence>(),
        }
    }

    /// Log out and send the browser to the login route.
    pub fn force_logout(&self) {
        log::warn!("course API rejected the stored token; logging out");
        let persistence = self.persistence.clone();
        self.session.update(|s| s.logout(&persistence));
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(&self.config.guard.login_path).is_err() {
                    log::warn!("failed to redirect to {}", self.config.guard.login_path);
                }
            }
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Delete,
}

#[cfg(feature = "hydrate")]
async fn send_authorized(auth: &AuthContext, method: Method, path: &str) -> Option<gloo_net::http::Response> {
    use gloo_net::http::Request;

    use crate::state::persistence::SessionPersistence;

    if !auth.session.with_untracked(Session::is_logged_in) {
        return None;
    }
    let token = auth.persistence.load_token()?;
    let url = auth.config.api_url(path);
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Delete => Request::delete(&url),
    };
    let resp = match builder.header("Authorization", &bearer_header(&token)).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("authorized request to {path} failed: {e}");
            return None;
        }
    };
    match classify_status(resp.status()) {
        ResponseClass::Ok => Some(resp),
        ResponseClass::Forbidden => {
            auth.force_logout();
            None
        }
        ResponseClass::Unauthorized | ResponseClass::Failed(_) => {
            log::warn!("authorized request to {path} returned {}", resp.status());
            None
        }
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(config: &ClientConfig, path: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(&config.api_url(path))
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        log::warn!("GET {path} returned {}", resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Exchange credentials for a token via `POST /authenticate`.
///
/// # Errors
///
/// [`ApiError::InvalidCredentials`] on `401`, [`ApiError::Status`] for other
/// non-success codes, and network/decode failures otherwise.
pub async fn authenticate(config: &ClientConfig, credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.api_url("/authenticate"))
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        match classify_status(resp.status()) {
            ResponseClass::Ok => {}
            ResponseClass::Unauthorized | ResponseClass::Forbidden => return Err(ApiError::InvalidCredentials),
            ResponseClass::Failed(status) => return Err(ApiError::Status(status)),
        }
        let body: super::types::AuthenticationResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.jwt)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the full catalog from `GET /courses`.
pub async fn fetch_courses(config: ClientConfig) -> Option<Vec<Course>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&config, "/courses").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// Fetch one course from `GET /courses/{id}`.
pub async fn fetch_course(config: ClientConfig, id: i64) -> Option<Course> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&config, &course_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
        None
    }
}

/// Search by free text via `GET /courses/search/{query}`.
pub async fn search_courses(config: ClientConfig, query: String) -> Option<Vec<Course>> {
    if query.trim().is_empty() {
        return Some(Vec::new());
    }
    #[cfg(feature = "hydrate")]
    {
        get_json(&config, &search_endpoint(&query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// The logged-in user's saved courses from `GET /favorites`.
pub async fn fetch_favorites(auth: AuthContext) -> Option<Vec<Course>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_authorized(&auth, Method::Get, "/favorites").await?;
        let favorites: Vec<super::types::Favorite> = resp.json().await.ok()?;
        Some(favorites.into_iter().map(|f| f.course).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        None
    }
}

/// Save a course via `POST /favorites/{id}`. `None` means nothing was sent.
pub async fn add_favorite(auth: AuthContext, course_id: i64) -> Option<()> {
    #[cfg(feature = "hydrate")]
    {
        send_authorized(&auth, Method::Post, &favorite_endpoint(course_id)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, course_id);
        None
    }
}

/// Unsave a course via `DELETE /favorites/{id}`.
pub async fn remove_favorite(auth: AuthContext, course_id: i64) -> Option<()> {
    #[cfg(feature = "hydrate")]
    {
        send_authorized(&auth, Method::Delete, &favorite_endpoint(course_id)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, course_id);
        None
    }
}
