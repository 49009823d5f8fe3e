//! Lesson Chunker Service - Main Entry Point
//!
//! Chunks lesson content for embedding and forwards it downstream.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lesson_chunker::api::{self, AppState};
use lesson_chunker::jobs::LessonProcessor;
use lesson_chunker::output::DeliveryClient;
use lesson_chunker::types::ServiceConfig;
use lesson_chunker::RecursiveChunker;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "lesson_chunker=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = ServiceConfig::from_env()?;

    info!("Starting Lesson Chunker Service v{}", env!("CARGO_PKG_VERSION"));
    info!("Chunk size: {} tokens", config.chunk_size);
    info!("Delivery target: {}", config.delivery_url);

    // Initialize components
    let chunker = Arc::new(RecursiveChunker::new(
        config.chunk_size,
        config.min_chars_per_chunk,
    ));
    let delivery = Arc::new(DeliveryClient::new(&config));
    let processor = Arc::new(LessonProcessor::new(chunker, delivery));

    let port = config.port;
    let state = Arc::new(AppState { config, processor });

    let app = api::router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
