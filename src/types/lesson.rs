//! Lesson and chunk type definitions.

use serde::{Deserialize, Serialize};

/// The kind of lesson event that triggered ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    /// Lesson was newly created
    Created,
    /// Existing lesson content was updated
    Updated,
    /// Lesson was removed
    Deleted,
}

impl LessonType {
    /// Parse a wire-format type tag. Returns `None` for unrecognized values
    /// so the handler can reject them with a client error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created" => Some(LessonType::Created),
            "updated" => Some(LessonType::Updated),
            "deleted" => Some(LessonType::Deleted),
            _ => None,
        }
    }
}

impl std::fmt::Display for LessonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonType::Created => write!(f, "created"),
            LessonType::Updated => write!(f, "updated"),
            LessonType::Deleted => write!(f, "deleted"),
        }
    }
}

/// A lesson submitted for chunking.
///
/// This is the inbound request body. The `type` tag is carried as a raw
/// string so that malformed values reach the handler (and produce a 400)
/// instead of failing JSON deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonInput {
    /// ID of the course this lesson belongs to
    pub course_id: i64,

    /// ID of the lesson within the course
    pub lesson_id: i64,

    /// Human-readable lesson title
    pub lesson_title: String,

    /// Raw lesson body text
    pub lesson_content: String,

    /// Event tag: "created", "updated", or "deleted"
    #[serde(rename = "type")]
    pub kind: String,
}

impl LessonInput {
    /// Validate the type tag against the recognized lesson events.
    pub fn lesson_type(&self) -> Option<LessonType> {
        LessonType::parse(&self.kind)
    }
}

/// A bounded-size slice of lesson text, sized by token count for
/// downstream embedding.
///
/// Chunks carry their zero-based position among the lesson's chunks;
/// positions follow the order the text appears in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text
    pub text: String,

    /// Order of this chunk within its lesson (0-indexed)
    pub chunk_index: usize,
}

impl Chunk {
    pub fn new(text: String, chunk_index: usize) -> Self {
        Self { text, chunk_index }
    }

    /// Length of the chunk text in characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The payload forwarded to the external content API.
///
/// Aggregates the lesson fields with the ordered chunk list. It exists
/// only for the duration of one request; nothing is persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPayload {
    /// Trimmed lesson title
    pub title: String,

    /// Trimmed full lesson text
    pub text: String,

    /// ID of the course this lesson belongs to
    pub course_id: i64,

    /// ID of the lesson within the course
    pub lesson_id: i64,

    /// Event tag for the lesson
    #[serde(rename = "type")]
    pub kind: LessonType,

    /// Ordered chunk list
    pub chunks: Vec<Chunk>,
}

impl DeliveryPayload {
    /// Assemble the outbound payload from a validated lesson and its chunks.
    pub fn assemble(lesson: &LessonInput, kind: LessonType, text: String, chunks: Vec<Chunk>) -> Self {
        Self {
            title: lesson.lesson_title.trim().to_string(),
            text,
            course_id: lesson.course_id,
            lesson_id: lesson.lesson_id,
            kind,
            chunks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lesson_type_parse() {
        assert_eq!(LessonType::parse("created"), Some(LessonType::Created));
        assert_eq!(LessonType::parse("updated"), Some(LessonType::Updated));
        assert_eq!(LessonType::parse("deleted"), Some(LessonType::Deleted));
        assert_eq!(LessonType::parse("archived"), None);
        assert_eq!(LessonType::parse("Created"), None);
        assert_eq!(LessonType::parse(""), None);
    }

    #[test]
    fn test_lesson_input_accepts_unknown_type_tag() {
        // Unknown tags must survive deserialization so the handler can 400 them.
        let json = r#"{
            "course_id": 1,
            "lesson_id": 42,
            "lesson_title": "Intro",
            "lesson_content": "Some text",
            "type": "archived"
        }"#;
        let lesson: LessonInput = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.kind, "archived");
        assert_eq!(lesson.lesson_type(), None);
    }

    #[test]
    fn test_delivery_payload_wire_shape() {
        let lesson = LessonInput {
            course_id: 1,
            lesson_id: 42,
            lesson_title: "  Intro  ".to_string(),
            lesson_content: "Some text".to_string(),
            kind: "created".to_string(),
        };
        let chunks = vec![
            Chunk::new("Some".to_string(), 0),
            Chunk::new("text".to_string(), 1),
        ];
        let payload =
            DeliveryPayload::assemble(&lesson, LessonType::Created, "Some text".to_string(), chunks);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["title"], "Intro");
        assert_eq!(value["text"], "Some text");
        assert_eq!(value["course_id"], 1);
        assert_eq!(value["lesson_id"], 42);
        assert_eq!(value["type"], "created");
        assert_eq!(value["chunks"][0]["text"], "Some");
        assert_eq!(value["chunks"][0]["chunk_index"], 0);
        assert_eq!(value["chunks"][1]["chunk_index"], 1);
    }
}
