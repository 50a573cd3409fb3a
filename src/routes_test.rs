use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Fake course API on an ephemeral port. Echoes the auth header back.
async fn spawn_upstream() -> String {
    async fn courses(headers: HeaderMap, RawQuery(query): RawQuery) -> impl IntoResponse {
        let auth = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("none")
            .to_string();
        axum::Json(serde_json::json!({ "auth": auth, "query": query }))
    }

    let upstream = Router::new()
        .route("/courses", get(courses))
        .route("/favorites", axum::routing::post(|| async { StatusCode::FORBIDDEN }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://api", "courses", None), "http://api/courses");
    assert_eq!(upstream_url("http://api", "/courses/3", Some("")), "http://api/courses/3");
    assert_eq!(
        upstream_url("http://api", "courses/search/rust", Some("page=2")),
        "http://api/courses/search/rust?page=2"
    );
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(ApiProxy::new(None));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_without_upstream_is_unavailable() {
    let proxy = ApiProxy::new(None);
    assert!(!proxy.is_configured());
    let response = api_routes(proxy)
        .oneshot(Request::builder().uri("/api/courses").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn api_forwards_auth_header_and_query() {
    let base = spawn_upstream().await;
    let app = api_routes(ApiProxy::new(Some(&base)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/courses?limit=5")
                .header(AUTHORIZATION, "Bearer abc.def.ghi")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["auth"], "Bearer abc.def.ghi");
    assert_eq!(body["query"], "limit=5");
}

#[tokio::test]
async fn api_passes_upstream_status_through() {
    let base = spawn_upstream().await;
    let response = api_routes(ApiProxy::new(Some(&base)))
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/favorites")
                .body(Body::from("{\"courseId\":1}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn api_unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = api_routes(ApiProxy::new(Some(&format!("http://{addr}"))))
        .oneshot(Request::builder().uri("/api/courses").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
