use std::{sync::Arc, time::Duration};

use axum::{
    routing::{get, post},
    Router,
};
use log::{error, info};

mod constants;
mod error;
mod handlers;
mod models;
mod services;

use models::{App, AppConfig};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    info!("🚀 Scrape savings analyzer starting...");
    info!("   Firecrawl URL: {}", config.firecrawl_url);
    info!("   Fetch timeout: {}s", config.fetch_timeout.as_secs());
    info!(
        "   Firecrawl timeout: {}s",
        config.firecrawl_timeout.as_secs()
    );
    info!("   Cost rate: ${}/1K tokens", config.cost_per_1k_tokens);

    let port = config.port;
    let app = App {
        client: reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap(),
        config: Arc::new(config),
    };

    let router = Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/analyze", post(handlers::analyze))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::compression::CompressionLayer::new())
        .with_state(app);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    info!("   Listening on: 0.0.0.0:{}", port);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("👋 Shutting down");
}
