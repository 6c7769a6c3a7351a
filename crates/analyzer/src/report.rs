//! The analysis record handed back to callers.
//!
//! One shape covers both paths: rule-based results leave the AI-only fields
//! (`intensity`, `contextUnderstanding`) empty and report `aiPowered: false`.

use ai_client::ProviderAnalysis;
use chrono::{DateTime, Utc};
use scorer::{ScoreResult, Sentiment};
use serde::{Deserialize, Serialize};

/// Provider name recorded for results produced by the local scorer.
pub const RULE_BASED_PROVIDER: &str = "rule-based";

/// Characters of input echoed back in a report.
pub const PREVIEW_CHARS: usize = 100;

/// Per-polarity counts behind a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub positive_score: u32,
    pub negative_score: u32,
    pub word_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Input preview, truncated to [`PREVIEW_CHARS`]
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: u8,
    pub explanation: String,
    pub details: ScoreDetails,
    pub timestamp: DateTime<Utc>,
    pub provider: String,
    pub ai_powered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<u8>,
    pub emotions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_understanding: Option<String>,
    pub key_phrases: Vec<String>,
}

impl AnalysisReport {
    /// Wrap a local scorer result.
    pub fn from_score(text: &str, result: ScoreResult) -> Self {
        Self {
            text: preview(text),
            sentiment: result.sentiment,
            confidence: result.confidence,
            explanation: result.explanation,
            details: ScoreDetails {
                positive_score: result.positive_score,
                negative_score: result.negative_score,
                word_count: result.word_count,
            },
            timestamp: Utc::now(),
            provider: RULE_BASED_PROVIDER.to_string(),
            ai_powered: false,
            intensity: None,
            emotions: Vec::new(),
            context_understanding: None,
            key_phrases: Vec::new(),
        }
    }

    /// Wrap a hosted-model judgment.
    ///
    /// The model gives no word counts, so its confidence is placed in the
    /// slot matching its polarity and the word count is a plain whitespace split.
    pub fn from_provider(text: &str, provider: &str, analysis: ProviderAnalysis) -> Self {
        let polarity_slot = |wanted: Sentiment| {
            if analysis.sentiment == wanted {
                analysis.confidence as u32
            } else {
                0
            }
        };

        Self {
            text: preview(text),
            sentiment: analysis.sentiment,
            confidence: analysis.confidence,
            details: ScoreDetails {
                positive_score: polarity_slot(Sentiment::Positive),
                negative_score: polarity_slot(Sentiment::Negative),
                word_count: text.split_whitespace().count() as u32,
            },
            explanation: analysis.explanation,
            timestamp: Utc::now(),
            provider: provider.to_string(),
            ai_powered: true,
            intensity: Some(analysis.intensity),
            emotions: analysis.emotions,
            context_understanding: Some(analysis.context_understanding),
            key_phrases: analysis.key_phrases,
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of `text`, with "..." appended when cut.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
