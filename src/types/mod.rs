//! Core types for the lesson chunking service.

mod config;
mod lesson;

pub use config::ServiceConfig;
pub use lesson::{Chunk, DeliveryPayload, LessonInput, LessonType};
