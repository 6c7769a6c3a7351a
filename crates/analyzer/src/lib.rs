//! Analyzer crate for the Reel Sentiment service.
//!
//! This crate sits at the boundary between callers and the two ways of
//! judging sentiment: a hosted model through `ai-client`, and the local
//! `scorer`. It owns input validation, the fallback decision, the report
//! shape, and the history of analyzed reviews, optionally kept in a
//! JSON-lines file.

pub mod error;
pub mod orchestrator;
pub mod report;
pub mod store;

pub use error::{AnalyzeError, Result, StoreError, StoreResult};
pub use orchestrator::{validate_text, SentimentAnalyzer, MAX_TEXT_CHARS};
pub use report::{AnalysisReport, ScoreDetails, RULE_BASED_PROVIDER};
pub use store::{ReviewId, ReviewStats, ReviewStore, StoredReview};
