//! Parsing of free-form model output into a [`ProviderAnalysis`].
//!
//! Models are asked for a bare JSON object but routinely wrap it in prose or
//! code fences. We take the span from the first `{` to the last `}` and parse
//! that; anything that still fails, or names an unknown sentiment label, is a
//! `MalformedResponse`.

use crate::error::{ProviderError, Result};
use crate::ProviderAnalysis;
use scorer::Sentiment;
use serde::Deserialize;

const DEFAULT_CONFIDENCE: u8 = 50;
const DEFAULT_INTENSITY: u8 = 5;
const DEFAULT_EXPLANATION: &str = "AI-powered sentiment analysis completed";

/// Shape the model is asked to produce. Everything but `sentiment` is optional.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    sentiment: Option<String>,
    confidence: Option<f64>,
    intensity: Option<f64>,
    emotions: Option<Vec<String>>,
    explanation: Option<String>,
    context_understanding: Option<String>,
    key_phrases: Option<Vec<String>>,
}

/// Slice out the outermost `{ ... }` span of `raw`.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

fn parse_sentiment(label: &str) -> Option<Sentiment> {
    match label.trim().to_ascii_lowercase().as_str() {
        "positive" => Some(Sentiment::Positive),
        "negative" => Some(Sentiment::Negative),
        "neutral" => Some(Sentiment::Neutral),
        _ => None,
    }
}

fn clamp_to_u8(value: f64, min: u8, max: u8) -> u8 {
    value.round().clamp(min as f64, max as f64) as u8
}

/// Parse the text a model returned into a validated analysis.
pub fn parse_model_output(raw: &str) -> Result<ProviderAnalysis> {
    let json = extract_json_object(raw).ok_or_else(|| {
        ProviderError::MalformedResponse("no JSON object in model output".to_string())
    })?;

    let parsed: RawAnalysis = serde_json::from_str(json)
        .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let label = parsed.sentiment.ok_or_else(|| {
        ProviderError::MalformedResponse("missing sentiment field".to_string())
    })?;
    let sentiment = parse_sentiment(&label).ok_or_else(|| {
        ProviderError::MalformedResponse(format!("unknown sentiment label: {}", label))
    })?;

    Ok(ProviderAnalysis {
        sentiment,
        confidence: parsed
            .confidence
            .map(|c| clamp_to_u8(c, 0, 100))
            .unwrap_or(DEFAULT_CONFIDENCE),
        intensity: parsed
            .intensity
            .map(|i| clamp_to_u8(i, 1, 10))
            .unwrap_or(DEFAULT_INTENSITY),
        emotions: parsed.emotions.unwrap_or_default(),
        explanation: parsed
            .explanation
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string()),
        context_understanding: parsed.context_understanding.unwrap_or_default(),
        key_phrases: parsed.key_phrases.unwrap_or_default(),
    })
}
