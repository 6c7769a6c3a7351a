//! Error types for the ai-client crate.

use thiserror::Error;

/// Errors that can occur when asking a hosted model for a sentiment judgment.
///
/// Every variant is recoverable at the analyzer boundary: the caller swaps in
/// the rule-based score instead of surfacing the failure.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No API key was configured, so no request was attempted
    #[error("Provider credentials not configured: {0}")]
    MissingCredentials(String),

    /// Transport failure, timeout, or undecodable HTTP body
    #[error("Request to provider failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status code
    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider answered but the payload was not usable
    #[error("Malformed response from provider: {0}")]
    MalformedResponse(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProviderError>;
