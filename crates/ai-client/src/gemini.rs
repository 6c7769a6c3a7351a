//! Gemini provider over the public `generateContent` REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{ProviderError, Result};
use crate::parse::parse_model_output;
use crate::{ProviderAnalysis, SentimentProvider};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SENTIMENT_PROMPT: &str = r#"You are an expert sentiment analysis AI. Analyze the following movie review.

Respond with a single JSON object and nothing else:
{
  "sentiment": "positive|negative|neutral",
  "confidence": <number between 0-100>,
  "intensity": <number between 1-10>,
  "emotions": ["emotion1", "emotion2"],
  "explanation": "why this sentiment was determined",
  "context_understanding": "notes on context, sarcasm, or complex language",
  "key_phrases": ["phrase1", "phrase2"]
}

Text to analyze: "#;

/// Connection settings for [`GeminiProvider`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` makes every call fail fast with `MissingCredentials`
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Client for Google's hosted Gemini models.
pub struct GeminiProvider {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Build the HTTP client. No network traffic happens here.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        info!("Configured Gemini provider with model {}", config.model);
        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send one prompt and return the model's raw text reply.
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini request failed with status {}", status);
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response.json().await?;
        extract_reply_text(&json)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a generateContent reply.
fn extract_reply_text(json: &Value) -> Result<String> {
    json.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ProviderError::MalformedResponse("reply has no candidate text".to_string())
        })
}

#[async_trait]
impl SentimentProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn analyze(&self, text: &str) -> Result<ProviderAnalysis> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(ProviderError::MissingCredentials(
                    "GEMINI_API_KEY is not set".to_string(),
                ))
            }
        };

        let prompt = format!("{}\"{}\"", SENTIMENT_PROMPT, text);
        debug!("Sending {} chars to {}", prompt.len(), self.config.model);

        let reply = self.generate(api_key, &prompt).await?;
        parse_model_output(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_url() {
        let config = GeminiConfig {
            endpoint: "http://localhost:8080/v1beta/".to_string(),
            ..GeminiConfig::new(Some("key".to_string()))
        };
        let provider = GeminiProvider::new(config).unwrap();

        assert_eq!(
            provider.generate_url(),
            "http://localhost:8080/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_is_configured() {
        let provider = GeminiProvider::new(GeminiConfig::new(None)).unwrap();
        assert!(!provider.is_configured());

        let provider = GeminiProvider::new(GeminiConfig::new(Some("  ".to_string()))).unwrap();
        assert!(!provider.is_configured());

        let provider = GeminiProvider::new(
            GeminiConfig::new(Some("abc".to_string())).with_model("gemini-1.5-pro"),
        )
        .unwrap();
        assert!(provider.is_configured());
        assert_eq!(provider.model(), "gemini-1.5-pro");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: "hello" }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_extract_reply_text() {
        let reply = json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"sentiment\": \"positive\"}"}], "role": "model"}
            }]
        });
        assert_eq!(extract_reply_text(&reply).unwrap(), "{\"sentiment\": \"positive\"}");

        let err = extract_reply_text(&json!({"candidates": []})).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let config = GeminiConfig {
            // Unroutable endpoint: a request attempt would surface as Request, not MissingCredentials
            endpoint: "http://127.0.0.1:9".to_string(),
            ..GeminiConfig::new(None)
        };
        let provider = GeminiProvider::new(config).unwrap();

        let err = provider.analyze("great movie").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredentials(_)));
    }
}
