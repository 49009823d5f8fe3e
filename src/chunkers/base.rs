//! Base traits for chunking and token counting.

use anyhow::Result;

use crate::types::Chunk;

/// The narrow seam between the orchestrator and the splitting strategy.
///
/// A chunker takes lesson text and splits it into an ordered list of
/// semantically meaningful chunks suitable for embedding. The orchestrator
/// depends only on this trait, not on any particular splitting library.
pub trait Chunker: Send + Sync {
    /// Get the name of this chunker.
    fn name(&self) -> &'static str;

    /// Chunk the given text.
    ///
    /// Returns the ordered chunk list; indices are contiguous from 0 and
    /// follow source-text order. Empty or whitespace-only input yields an
    /// empty list.
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>>;
}

/// Token counter trait for sizing chunks by token budget.
pub trait TokenCounter: Send + Sync {
    /// Count the number of tokens in the given text.
    fn count_tokens(&self, text: &str) -> usize;
}

/// Default token counter using tiktoken (cl100k_base encoding).
pub struct TiktokenCounter {
    bpe: tiktoken_rs::CoreBPE,
}

impl TiktokenCounter {
    /// Create a new token counter with the cl100k_base encoding, the
    /// pretrained subword vocabulary used by the embedding pipeline.
    pub fn new() -> Self {
        let bpe = tiktoken_rs::cl100k_base().expect("Failed to load cl100k_base encoding");
        Self { bpe }
    }
}

impl Default for TiktokenCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCounter for TiktokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

/// Process-wide shared counter; the BPE vocabulary is loaded once.
pub fn shared_counter() -> std::sync::Arc<TiktokenCounter> {
    lazy_static::lazy_static! {
        static ref COUNTER: std::sync::Arc<TiktokenCounter> =
            std::sync::Arc::new(TiktokenCounter::new());
    }
    COUNTER.clone()
}

/// Merge short segments to meet minimum length requirements.
///
/// Segments shorter than `min_chars` are accumulated into their successor;
/// a short trailing remainder is folded into the last merged segment so no
/// undersized chunk survives (except when the whole input is short).
pub fn merge_short_segments(segments: Vec<String>, min_chars: usize) -> Vec<String> {
    if segments.is_empty() {
        return segments;
    }

    let mut result = Vec::new();
    let mut current = String::new();

    for segment in segments {
        if current.is_empty() {
            current = segment;
        } else {
            current.push(' ');
            current.push_str(&segment);
        }

        if current.len() >= min_chars {
            result.push(current);
            current = String::new();
        }
    }

    // Fold any remaining short tail into the last chunk
    if !current.is_empty() {
        if let Some(last) = result.last_mut() {
            last.push(' ');
            last.push_str(&current);
        } else {
            result.push(current);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_keeps_long_segments() {
        let segments = vec!["a".repeat(20), "b".repeat(20)];
        let merged = merge_short_segments(segments.clone(), 10);
        assert_eq!(merged, segments);
    }

    #[test]
    fn test_merge_accumulates_short_segments() {
        let segments = vec!["ab".to_string(), "cd".to_string(), "ef".to_string()];
        let merged = merge_short_segments(segments, 5);
        // "ab cd" reaches the minimum; the short tail "ef" folds into it.
        assert_eq!(merged, vec!["ab cd ef".to_string()]);
    }

    #[test]
    fn test_merge_folds_short_tail() {
        let segments = vec!["a".repeat(10), "b".to_string()];
        let merged = merge_short_segments(segments, 5);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].ends_with(" b"));
    }

    #[test]
    fn test_merge_single_short_segment() {
        let merged = merge_short_segments(vec!["hi".to_string()], 100);
        assert_eq!(merged, vec!["hi".to_string()]);
    }
}
