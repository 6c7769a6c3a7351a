//! Result types produced by the scorer.
//!
//! A `ScoreResult` is built fresh for every call to [`crate::score`] and is never
//! mutated afterwards, so it derives `Clone` and `PartialEq` but exposes no setters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall polarity of a passage.
///
/// Serialized as a lowercase label (`"positive"`, `"negative"`, `"neutral"`)
/// so it can sit directly in a JSON response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one passage against the lexicons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub sentiment: Sentiment,
    /// Share of the dominant polarity among matched words, 0-100.
    pub confidence: u8,
    pub positive_score: u32,
    pub negative_score: u32,
    /// Every token produced by preprocessing, matched or not.
    pub word_count: u32,
    pub explanation: String,
}

impl ScoreResult {
    /// Result for input that produced no tokens at all.
    pub fn empty() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0,
            positive_score: 0,
            negative_score: 0,
            word_count: 0,
            explanation: "No text provided for analysis".to_string(),
        }
    }
}
