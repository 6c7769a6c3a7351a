//! # Sentiment Analyzer
//!
//! Coordinates one analysis request:
//! 1. Validate the input text
//! 2. Ask the hosted provider, when one is configured
//! 3. On any provider failure, fall back to the local scorer
//! 4. Wrap the outcome in an `AnalysisReport`
//!
//! Provider errors stop here. Callers only ever see `AnalyzeError` for bad input.

use std::sync::Arc;
use std::time::Instant;

use ai_client::SentimentProvider;
use tracing::{debug, info, warn};

use crate::error::{AnalyzeError, Result};
use crate::report::AnalysisReport;

/// Longest input, in characters, accepted by [`SentimentAnalyzer::analyze`].
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Reject input the scorer should not be asked about.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(AnalyzeError::EmptyText);
    }

    let length = text.chars().count();
    if length > MAX_TEXT_CHARS {
        return Err(AnalyzeError::TextTooLong {
            length,
            max: MAX_TEXT_CHARS,
        });
    }

    Ok(())
}

/// Entry point for analysis with an optional hosted provider.
///
/// Cheap to clone; the provider is shared behind an `Arc`.
#[derive(Clone, Default)]
pub struct SentimentAnalyzer {
    provider: Option<Arc<dyn SentimentProvider>>,
}

impl SentimentAnalyzer {
    pub fn new(provider: Option<Arc<dyn SentimentProvider>>) -> Self {
        Self { provider }
    }

    /// Analyzer that never leaves the process.
    pub fn rule_based() -> Self {
        Self { provider: None }
    }

    pub fn with_provider(provider: impl SentimentProvider + 'static) -> Self {
        Self {
            provider: Some(Arc::new(provider)),
        }
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Analyze `text`, preferring the hosted provider.
    ///
    /// # Returns
    /// * `Ok(AnalysisReport)` - From the provider, or from the local scorer if the provider failed
    /// * `Err(AnalyzeError)` - Only when the input itself is rejected
    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        validate_text(text)?;
        let start = Instant::now();

        let report = match self.provider.as_deref() {
            Some(provider) => match provider.analyze(text).await {
                Ok(analysis) => AnalysisReport::from_provider(text, provider.name(), analysis),
                Err(e) => {
                    warn!(
                        "Provider {} failed, falling back to rule-based scoring: {}",
                        provider.name(),
                        e
                    );
                    AnalysisReport::from_score(text, scorer::score(text))
                }
            },
            None => {
                debug!("No provider configured, using rule-based scoring");
                AnalysisReport::from_score(text, scorer::score(text))
            }
        };

        info!(
            "Analyzed {} chars via {}: {} ({}%) in {:.2?}",
            text.chars().count(),
            report.provider,
            report.sentiment,
            report.confidence,
            start.elapsed()
        );
        Ok(report)
    }

    /// Analyze with the local scorer only, skipping any provider.
    pub fn analyze_rule_based(&self, text: &str) -> Result<AnalysisReport> {
        validate_text(text)?;
        Ok(AnalysisReport::from_score(text, scorer::score(text)))
    }
}
