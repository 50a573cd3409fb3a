mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    match config.api_url.as_deref() {
        Some(url) => tracing::info!(%url, "proxying /api to course API"),
        None => tracing::warn!("CATALOG_API_URL not set; /api requests will return 503"),
    }

    let app = routes::app(&config).expect("leptos app init failed");
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "course catalog listening");
    axum::serve(listener, app).await.expect("server failed");
}
