//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves the server-rendered Leptos app, its `/pkg` assets,
//! a health check, and `/api/*`. The browser talks to the course API through
//! `/api` so the auth cookie and requests stay same-origin; this host only
//! forwards those requests when `CATALOG_API_URL` is configured.
//!
//! ERROR HANDLING
//! ==============
//! Proxy failures never panic: an unconfigured upstream answers 503 and a
//! transport failure answers 502, both logged at `warn`.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Request headers forwarded to the upstream course API.
const FORWARDED_HEADERS: [axum::http::HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

/// Upstream handle shared by proxy requests.
#[derive(Clone, Debug)]
pub struct ApiProxy {
    upstream: Option<Arc<str>>,
    http: reqwest::Client,
}

impl ApiProxy {
    pub fn new(upstream: Option<&str>) -> Self {
        Self { upstream: upstream.map(Arc::from), http: reqwest::Client::new() }
    }

    pub fn is_configured(&self) -> bool {
        self.upstream.is_some()
    }
}

/// `/healthz` plus the `/api/*` proxy.
pub fn api_routes(proxy: ApiProxy) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/{*rest}", any(proxy_api))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(proxy)
}

/// Leptos SSR frontend merged with the API routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(catalog_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || catalog_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(catalog_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let proxy = ApiProxy::new(config.api_url.as_deref());

    Ok(api_routes(proxy)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Join the upstream base, the captured path, and the raw query string.
fn upstream_url(base: &str, rest: &str, query: Option<&str>) -> String {
    let rest = rest.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{rest}?{q}"),
        None => format!("{base}/{rest}"),
    }
}

async fn proxy_api(
    State(proxy): State<ApiProxy>,
    Path(rest): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(upstream) = proxy.upstream.as_deref() else {
        tracing::warn!(path = %rest, "api request with no CATALOG_API_URL configured");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };

    let url = upstream_url(upstream, &rest, query.as_deref());
    let mut request = proxy.http.request(method, &url).body(body);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream_response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %url, "upstream request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = upstream_response.status();
    let content_type = upstream_response.headers().get(CONTENT_TYPE).cloned();
    match upstream_response.bytes().await {
        Ok(bytes) => {
            let mut response = (status, bytes).into_response();
            if let Some(content_type) = content_type {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            response
        }
        Err(e) => {
            tracing::warn!(error = %e, %url, "upstream body read failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
