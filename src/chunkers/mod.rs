//! Chunking strategies and token counting.

mod base;
mod recursive_chunker;

pub use base::{merge_short_segments, shared_counter, Chunker, TiktokenCounter, TokenCounter};
pub use recursive_chunker::RecursiveChunker;
