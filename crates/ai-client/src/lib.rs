//! Hosted-model sentiment client.
//!
//! This crate provides the seam between the analyzer and any hosted
//! language model that can judge sentiment. It handles:
//! - The `SentimentProvider` trait the analyzer depends on
//! - A Gemini implementation over HTTP
//! - Turning loosely formatted model output into a validated `ProviderAnalysis`
//! - Typed errors so the caller can decide to fall back

use async_trait::async_trait;
use scorer::Sentiment;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod gemini;
pub mod parse;

pub use error::{ProviderError, Result};
pub use gemini::{GeminiConfig, GeminiProvider};
pub use parse::parse_model_output;

/// Sentiment judgment returned by a hosted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAnalysis {
    pub sentiment: Sentiment,
    /// 0-100
    pub confidence: u8,
    /// 1-10
    pub intensity: u8,
    pub emotions: Vec<String>,
    pub explanation: String,
    pub context_understanding: String,
    pub key_phrases: Vec<String>,
}

/// Anything that can produce a sentiment judgment for a passage.
///
/// `Send + Sync` so one provider can be shared across request tasks
/// behind an `Arc`.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Short identifier recorded alongside results (e.g. "gemini")
    fn name(&self) -> &str;

    /// Judge the sentiment of `text`.
    ///
    /// # Returns
    /// * `Ok(ProviderAnalysis)` - A validated judgment
    /// * `Err(ProviderError)` - Missing credentials, transport failure, or unusable output
    async fn analyze(&self, text: &str) -> Result<ProviderAnalysis>;
}
