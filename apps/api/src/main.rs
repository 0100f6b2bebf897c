mod classification;
mod config;
mod errors;
mod extract;
mod improvement;
mod llm_client;
mod models;
mod routes;
mod state;
mod zero_shot;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::app;
use crate::state::AppState;
use crate::zero_shot::HttpZeroShotClassifier;

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

    info!("Starting Assessment Insight API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let classifier = HttpZeroShotClassifier::new(
        config.zero_shot_url.clone(),
        config.zero_shot_api_token.clone(),
    );
    info!("Zero-shot classifier endpoint: {}", config.zero_shot_url);

    let state = AppState {
        llm: Arc::new(llm),
        classifier: Arc::new(classifier),
    };

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
