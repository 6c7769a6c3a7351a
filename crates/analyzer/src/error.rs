//! Error types for the analyzer crate.
//!
//! Caller-side input problems surface as `AnalyzeError` and history file
//! problems as `StoreError`. Provider failures never do: they are absorbed by
//! the fallback in [`crate::SentimentAnalyzer::analyze`].

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyzeError {
    /// Input was empty or whitespace-only
    #[error("Text is required: please provide text to analyze")]
    EmptyText,

    /// Input exceeded the accepted payload size
    #[error("Text too long: {length} characters (limit {max})")]
    TextTooLong { length: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;

/// Failures reading or appending the review history file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Review store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Review could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
