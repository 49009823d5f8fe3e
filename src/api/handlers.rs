//! HTTP request handlers for the lesson chunking service.

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::jobs::LessonProcessor;
use crate::output::API_KEY_HEADER;
use crate::types::{LessonInput, ServiceConfig};

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServiceConfig,
    pub processor: Arc<LessonProcessor>,
}

/// Simple message body used for acks and errors alike.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Health check endpoint.
pub async fn root() -> Json<MessageResponse> {
    MessageResponse::new("Welcome to the Chunking API. Use POST /chunk to process lessons.")
}

/// Accept a lesson and process it in the background.
///
/// The key check runs first so unauthorized callers learn nothing about
/// payload validation. On success the response is immediate; chunking and
/// delivery outcomes are never reported back to the caller.
pub async fn chunk_lesson(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(lesson): Json<LessonInput>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    let presented_key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if presented_key != Some(state.config.api_key.as_str()) {
        return Err((StatusCode::UNAUTHORIZED, MessageResponse::new("Unauthorized")));
    }

    let Some(kind) = lesson.lesson_type() else {
        return Err((
            StatusCode::BAD_REQUEST,
            MessageResponse::new("Invalid lesson type"),
        ));
    };

    info!(
        lesson_id = lesson.lesson_id,
        course_id = lesson.course_id,
        kind = %kind,
        content_len = lesson.lesson_content.len(),
        "Received chunk request"
    );

    let processor = state.processor.clone();
    tokio::spawn(async move {
        processor.process_lesson(lesson, kind).await;
    });

    Ok(MessageResponse::new(
        "Chunking request accepted and processing in background.",
    ))
}
