//! Background job processing.

mod processor;

pub use processor::LessonProcessor;
