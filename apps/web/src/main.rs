mod clients;
mod config;
mod cookies;
mod errors;
mod models;
mod render;
mod resume;
mod reveal;
mod routes;
mod state;
mod theme;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clients::{build_http_client, HttpPortfolioClient, HttpResumeClient};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting OneLink web v{}", env!("CARGO_PKG_VERSION"));

    // One connection pool shared by both API clients
    let http = build_http_client(config.http_timeout_secs)?;
    let portfolio = HttpPortfolioClient::new(http.clone(), &config.api_base_url)?;
    let resume = HttpResumeClient::new(http, &config.api_base_url)?;
    info!(
        "OneLink API client initialized ({}, timeout {}s)",
        config.api_base_url, config.http_timeout_secs
    );
    info!("Default theme pack: {}", config.default_theme_pack.as_str());

    let state = AppState {
        config: config.clone(),
        portfolio: Arc::new(portfolio),
        resume: Arc::new(resume),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
