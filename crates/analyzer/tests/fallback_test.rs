//! Integration tests for the provider fallback boundary.
//!
//! These drive `SentimentAnalyzer` with real and mock providers and check that
//! every kind of provider failure yields the local scorer's answer.

use std::sync::Arc;
use std::time::Duration;

use ai_client::{
    GeminiConfig, GeminiProvider, ProviderAnalysis, ProviderError, SentimentProvider,
};
use analyzer::{AnalyzeError, ReviewStore, SentimentAnalyzer, MAX_TEXT_CHARS, RULE_BASED_PROVIDER};
use async_trait::async_trait;
use scorer::{score, Sentiment};

const REVIEW: &str = "Not the worst film, but hardly memorable. Predictable and bland.";

/// Fails with a configurable error kind
enum FailingProvider {
    Status,
    Malformed,
    Credentials,
}

#[async_trait]
impl SentimentProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn analyze(&self, _text: &str) -> ai_client::Result<ProviderAnalysis> {
        Err(match self {
            FailingProvider::Status => ProviderError::Status {
                status: 503,
                body: "overloaded".to_string(),
            },
            FailingProvider::Malformed => {
                ProviderError::MalformedResponse("no JSON object".to_string())
            }
            FailingProvider::Credentials => {
                ProviderError::MissingCredentials("no key".to_string())
            }
        })
    }
}

async fn assert_rule_based(analyzer: &SentimentAnalyzer, text: &str) {
    let report = analyzer.analyze(text).await.unwrap();
    let expected = score(text);

    assert!(!report.ai_powered);
    assert_eq!(report.provider, RULE_BASED_PROVIDER);
    assert_eq!(report.sentiment, expected.sentiment);
    assert_eq!(report.confidence, expected.confidence);
    assert_eq!(report.details.positive_score, expected.positive_score);
    assert_eq!(report.details.negative_score, expected.negative_score);
    assert_eq!(report.details.word_count, expected.word_count);
    assert_eq!(report.explanation, expected.explanation);
}

#[tokio::test]
async fn test_every_provider_error_falls_back() {
    for provider in [
        FailingProvider::Status,
        FailingProvider::Malformed,
        FailingProvider::Credentials,
    ] {
        let analyzer = SentimentAnalyzer::with_provider(provider);
        assert_rule_based(&analyzer, REVIEW).await;
    }
}

#[tokio::test]
async fn test_gemini_without_key_falls_back() {
    let provider = GeminiProvider::new(GeminiConfig::new(None)).unwrap();
    let analyzer = SentimentAnalyzer::with_provider(provider);

    assert_rule_based(&analyzer, REVIEW).await;
}

#[tokio::test]
async fn test_gemini_unreachable_falls_back() {
    let config = GeminiConfig {
        endpoint: "http://127.0.0.1:9/v1beta".to_string(),
        ..GeminiConfig::new(Some("test-key".to_string())).with_timeout(Duration::from_secs(2))
    };
    let provider = GeminiProvider::new(config).unwrap();
    let analyzer = SentimentAnalyzer::new(Some(Arc::new(provider)));

    assert_rule_based(&analyzer, "An absolute masterpiece, never boring.").await;
}

#[tokio::test]
async fn test_input_limits() {
    let analyzer = SentimentAnalyzer::rule_based();

    assert_eq!(analyzer.analyze("").await.unwrap_err(), AnalyzeError::EmptyText);

    let too_long = "good ".repeat(MAX_TEXT_CHARS / 5 + 1);
    assert!(matches!(
        analyzer.analyze(&too_long).await.unwrap_err(),
        AnalyzeError::TextTooLong { .. }
    ));
}

#[tokio::test]
async fn test_concurrent_analyses_share_store() {
    let analyzer = SentimentAnalyzer::with_provider(FailingProvider::Malformed);
    let store = ReviewStore::new();
    let reviews = ["good", "bad", "not good", "good bad", "The movie was okay."];

    let mut handles = Vec::new();
    for text in reviews {
        let analyzer = analyzer.clone();
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let report = analyzer.analyze(text).await?;
            store.save(text, &report).await.unwrap();
            Ok::<_, AnalyzeError>(report.sentiment)
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stats = store.stats().await;
    assert_eq!(stats.total_reviews, 5);
    assert_eq!(stats.positive_count, 1);
    assert_eq!(stats.negative_count, 2);
    assert_eq!(stats.neutral_count, 2);

    let recent = store.recent(10).await;
    assert_eq!(recent.len(), 5);
    assert!(recent.iter().all(|r| r.provider == RULE_BASED_PROVIDER));
    assert!(recent.windows(2).all(|w| w[0].id > w[1].id));
    assert!(recent.iter().any(|r| r.sentiment == Sentiment::Negative));
}
