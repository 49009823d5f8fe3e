//! Background processing of accepted lessons.

use std::sync::Arc;

use tracing::{error, info};

use crate::chunkers::Chunker;
use crate::output::DeliveryClient;
use crate::types::{DeliveryPayload, LessonInput, LessonType};

/// Orchestrates chunk-then-deliver for one accepted lesson.
///
/// Runs detached from the HTTP response. Every failure at any stage is
/// logged and swallowed; nothing propagates back to the original caller,
/// which has already been acknowledged.
pub struct LessonProcessor {
    chunker: Arc<dyn Chunker>,
    delivery: Arc<DeliveryClient>,
}

impl LessonProcessor {
    pub fn new(chunker: Arc<dyn Chunker>, delivery: Arc<DeliveryClient>) -> Self {
        Self { chunker, delivery }
    }

    /// Process a single lesson: normalize, chunk, assemble, deliver.
    pub async fn process_lesson(&self, lesson: LessonInput, kind: LessonType) {
        let full_text = lesson.lesson_content.trim().to_string();

        let chunks = match self.chunker.chunk(&full_text) {
            Ok(chunks) if !chunks.is_empty() => chunks,
            Ok(_) => {
                error!(
                    lesson_id = lesson.lesson_id,
                    "Chunking produced no chunks, dropping lesson"
                );
                return;
            }
            Err(e) => {
                error!(
                    lesson_id = lesson.lesson_id,
                    error = %e,
                    "Chunking failed, dropping lesson"
                );
                return;
            }
        };

        info!(
            lesson_id = lesson.lesson_id,
            course_id = lesson.course_id,
            chunks = chunks.len(),
            "Lesson chunked"
        );

        let payload = DeliveryPayload::assemble(&lesson, kind, full_text, chunks);

        match self.delivery.send(&payload).await {
            Ok(()) => {
                info!(
                    lesson_id = payload.lesson_id,
                    "Successfully processed and sent lesson"
                );
            }
            Err(e) => {
                error!(
                    lesson_id = payload.lesson_id,
                    error = %e,
                    "Final failure sending lesson to content API"
                );
            }
        }
    }
}
