//! Recursive text chunker with hierarchical splitting.

use std::sync::Arc;

use anyhow::Result;

use super::base::{merge_short_segments, shared_counter, Chunker, TokenCounter};
use crate::types::Chunk;
use crate::{DEFAULT_CHUNK_SIZE, DEFAULT_MIN_CHARS_PER_CHUNK};

/// Recursive chunker that splits text hierarchically.
///
/// This chunker tries multiple split strategies in order of preference:
/// 1. Double newlines (paragraphs)
/// 2. Single newlines
/// 3. Sentence endings (. ! ?)
/// 4. Semicolons and commas
/// 5. Spaces (words)
/// 6. Characters (last resort)
///
/// For each level, it only proceeds to more granular splitting if the
/// current pieces are still over the token budget. Pieces shorter than the
/// minimum character count are merged back together afterwards.
pub struct RecursiveChunker {
    /// Separators in order of preference (most to least preferred)
    separators: Vec<&'static str>,
    /// Maximum tokens per chunk
    chunk_size: usize,
    /// Minimum characters per chunk
    min_chars: usize,
    counter: Arc<dyn TokenCounter>,
}

impl RecursiveChunker {
    /// Create a recursive chunker with the given size bounds and the
    /// default tiktoken counter.
    pub fn new(chunk_size: usize, min_chars: usize) -> Self {
        Self::with_token_counter(chunk_size, min_chars, shared_counter())
    }

    /// Create a recursive chunker with a custom token counter.
    pub fn with_token_counter(
        chunk_size: usize,
        min_chars: usize,
        counter: Arc<dyn TokenCounter>,
    ) -> Self {
        Self {
            separators: vec![
                "\n\n", // Paragraphs
                "\n",   // Lines
                ". ",   // Sentences
                "! ",   // Exclamations
                "? ",   // Questions
                "; ",   // Semicolons
                ", ",   // Commas
                " ",    // Words
            ],
            chunk_size,
            min_chars,
            counter,
        }
    }

    /// Recursively chunk text using the separator hierarchy.
    fn recursive_chunk(&self, text: &str, separator_index: usize) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        // If text fits in a single chunk, return it
        if self.counter.count_tokens(text) <= self.chunk_size {
            return vec![text.to_string()];
        }

        // If we've exhausted all separators, split by characters
        if separator_index >= self.separators.len() {
            return self.split_by_chars(text);
        }

        let separator = self.separators[separator_index];
        let splits: Vec<&str> = text.split(separator).collect();

        // If we only got one split, try the next separator
        if splits.len() <= 1 {
            return self.recursive_chunk(text, separator_index + 1);
        }

        // Merge splits into chunks up to the token budget
        let mut chunks = Vec::new();
        let mut current_chunk = String::new();

        for split in splits {
            let test_chunk = if current_chunk.is_empty() {
                split.to_string()
            } else {
                format!("{}{}{}", current_chunk, separator, split)
            };

            if self.counter.count_tokens(&test_chunk) <= self.chunk_size {
                current_chunk = test_chunk;
            } else {
                // Current chunk is full
                if !current_chunk.is_empty() {
                    chunks.push(current_chunk);
                }

                // Check if this split itself is too large
                if self.counter.count_tokens(split) > self.chunk_size {
                    // Recursively split this piece with finer separators
                    let sub_chunks = self.recursive_chunk(split, separator_index + 1);
                    chunks.extend(sub_chunks);
                    current_chunk = String::new();
                } else {
                    current_chunk = split.to_string();
                }
            }
        }

        // Don't forget the last chunk
        if !current_chunk.is_empty() {
            chunks.push(current_chunk);
        }

        chunks
    }

    /// Split text by characters (last resort).
    fn split_by_chars(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for c in text.chars() {
            current.push(c);

            if self.counter.count_tokens(&current) >= self.chunk_size {
                chunks.push(current);
                current = String::new();
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}

impl Default for RecursiveChunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_MIN_CHARS_PER_CHUNK)
    }
}

impl Chunker for RecursiveChunker {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        let content = text.trim();
        if content.is_empty() {
            return Ok(vec![]);
        }

        let pieces = self.recursive_chunk(content, 0);
        let pieces = merge_short_segments(pieces, self.min_chars);

        Ok(pieces
            .into_iter()
            .enumerate()
            .map(|(chunk_index, text)| Chunk::new(text, chunk_index))
            .collect())
    }
}
