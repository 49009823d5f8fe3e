//! HTTP client for forwarding chunked lessons to the content API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::info;

use crate::retry::RetryPolicy;
use crate::types::{DeliveryPayload, ServiceConfig};

/// Header carrying the shared secret, both inbound and outbound.
pub const API_KEY_HEADER: &str = "X-Internal-API-Key";

/// Errors from a single delivery attempt.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for posting chunked lesson payloads to the external content API.
///
/// Each send drives the request through the retry policy; only retry
/// exhaustion surfaces an error to the caller.
pub struct DeliveryClient {
    client: Client,
    url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl DeliveryClient {
    /// Create a delivery client from the service configuration.
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.delivery_timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            url: config.delivery_url.clone(),
            api_key: config.api_key.clone(),
            retry: RetryPolicy::new(
                config.delivery_max_attempts,
                Duration::from_millis(config.delivery_base_delay_ms),
                2.0,
            ),
        }
    }

    /// Override the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Send the payload, retrying with backoff on any transport or
    /// HTTP-status failure.
    pub async fn send(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        self.retry.execute(|| self.send_once(payload)).await?;

        info!(
            lesson_id = payload.lesson_id,
            chunks = payload.chunks.len(),
            "Successfully sent payload to content API"
        );
        Ok(())
    }

    async fn send_once(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DeliveryError::Status { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServiceConfig {
        ServiceConfig {
            api_key: "secret".to_string(),
            delivery_url: "http://localhost:9/ingest".to_string(),
            port: 0,
            chunk_size: 400,
            min_chars_per_chunk: 100,
            delivery_timeout_secs: 50,
            delivery_max_attempts: 3,
            delivery_base_delay_ms: 2000,
        }
    }

    #[test]
    fn test_client_takes_retry_settings_from_config() {
        let client = DeliveryClient::new(&test_config());
        assert_eq!(client.retry.max_attempts, 3);
        assert_eq!(client.retry.base_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_retry_override() {
        let policy = RetryPolicy::new(5, Duration::from_millis(50), 2.0);
        let client = DeliveryClient::new(&test_config()).with_retry(policy);
        assert_eq!(client.retry.max_attempts, 5);
    }
}
