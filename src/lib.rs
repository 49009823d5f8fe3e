//! Lesson Chunker Service Library
//!
//! Accepts lesson text over HTTP, splits it into embedding-sized chunks,
//! and forwards the chunked result to an external content API with
//! retry-on-failure delivery.

pub mod api;
pub mod chunkers;
pub mod jobs;
pub mod output;
pub mod retry;
pub mod types;

pub use chunkers::{Chunker, RecursiveChunker, TiktokenCounter, TokenCounter};
pub use jobs::LessonProcessor;
pub use output::{DeliveryClient, DeliveryError};
pub use retry::RetryPolicy;
pub use types::{Chunk, DeliveryPayload, LessonInput, LessonType, ServiceConfig};

/// Default maximum chunk size in tokens
pub const DEFAULT_CHUNK_SIZE: usize = 400;

/// Default minimum characters per chunk
pub const DEFAULT_MIN_CHARS_PER_CHUNK: usize = 100;

/// Default per-attempt delivery timeout in seconds
pub const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 50;

/// Default maximum delivery attempts
pub const DEFAULT_DELIVERY_MAX_ATTEMPTS: u32 = 3;

/// Default first backoff delay in milliseconds
pub const DEFAULT_DELIVERY_BASE_DELAY_MS: u64 = 2000;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3020;
