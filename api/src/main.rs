//! Headless RSS API Server
//!
//! Serves an RSS feed built from the article search of a CoreMedia headless
//! server. Every request re-runs the pipeline: GraphQL fetch, feed synthesis,
//! RSS rendering. Uses hexagonal (ports & adapters) architecture.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{HeadlessClientImpl, SearchQuery};
use app::FeedService;
use config::Config;
use domain::entities::ChannelMetadata;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<HeadlessClientImpl>>,
}

/// Wire the headless client and feed service from configuration
fn build_state(config: &Config) -> AppState {
    let content = Arc::new(HeadlessClientImpl::new(
        config.headless_server_url.clone(),
        SearchQuery::articles(config.site_id.clone()),
        config.fetch_timeout,
    ));

    AppState {
        feed_service: Arc::new(FeedService::new(content, ChannelMetadata::default())),
    }
}

/// Every method and path falls through to the feed handler
fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::get_feed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,headless_rss_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting headless RSS API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Using headless server: {}", config.headless_server_url);

    let app = build_router(build_state(&config));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Server terminated")?;

    Ok(())
}
