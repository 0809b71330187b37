mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server config");
    let app = routes::app(&config).expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site_root = %config.site_root.as_deref().unwrap_or("(leptos default)"), "seeker listening");
    axum::serve(listener, app).await.expect("server failed");
}
