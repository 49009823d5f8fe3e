//! Service configuration.

use anyhow::{Context, Result};

use crate::{
    DEFAULT_CHUNK_SIZE, DEFAULT_DELIVERY_BASE_DELAY_MS, DEFAULT_DELIVERY_MAX_ATTEMPTS,
    DEFAULT_DELIVERY_TIMEOUT_SECS, DEFAULT_MIN_CHARS_PER_CHUNK, DEFAULT_PORT,
};

/// Global service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Shared secret expected in the `X-Internal-API-Key` header, and sent
    /// on the outbound delivery request
    pub api_key: String,

    /// URL of the external content API that receives chunked lessons
    pub delivery_url: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Maximum tokens per chunk
    pub chunk_size: usize,

    /// Minimum characters per chunk
    pub min_chars_per_chunk: usize,

    /// Per-attempt timeout for the outbound delivery request, in seconds
    pub delivery_timeout_secs: u64,

    /// Maximum delivery attempts before giving up
    pub delivery_max_attempts: u32,

    /// First backoff delay between delivery attempts, in milliseconds
    pub delivery_base_delay_ms: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// The shared secret and delivery URL have no sensible defaults and are
    /// required; everything else falls back to the crate defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: std::env::var("INTERNAL_API_KEY")
                .context("INTERNAL_API_KEY must be set")?,
            delivery_url: std::env::var("CONTENT_API_URL")
                .context("CONTENT_API_URL must be set")?,
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            chunk_size: std::env::var("CHUNK_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CHUNK_SIZE),
            min_chars_per_chunk: std::env::var("MIN_CHARS_PER_CHUNK")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MIN_CHARS_PER_CHUNK),
            delivery_timeout_secs: std::env::var("DELIVERY_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DELIVERY_TIMEOUT_SECS),
            delivery_max_attempts: std::env::var("DELIVERY_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DELIVERY_MAX_ATTEMPTS),
            delivery_base_delay_ms: std::env::var("DELIVERY_BASE_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DELIVERY_BASE_DELAY_MS),
        })
    }
}
