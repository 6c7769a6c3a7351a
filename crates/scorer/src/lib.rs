//! # Scorer Crate
//!
//! Rule-based sentiment scoring for short movie reviews.
//!
//! ## Main Components
//!
//! - **lexicon**: Static positive, negative and negation word sets
//! - **tokenize**: Lowercasing and punctuation stripping
//! - **score**: The single-pass scorer with the negation rule
//! - **types**: `ScoreResult` and `Sentiment`
//!
//! ## Example Usage
//!
//! ```
//! use scorer::{score, Sentiment};
//!
//! let result = score("Not bad at all, the cast was brilliant.");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! // "not bad" flips to positive, "brilliant" adds another
//! assert_eq!(result.positive_score, 2);
//! assert_eq!(result.confidence, 100);
//! ```
//!
//! Everything here is synchronous and free of shared mutable state, so `score`
//! can be called from any number of threads or tasks at once.

// Public modules
pub mod lexicon;
pub mod score;
pub mod tokenize;
pub mod types;

// Re-export commonly used items for convenience
pub use lexicon::{classify, WordClass};
pub use score::{score, TIE_CONFIDENCE};
pub use tokenize::tokenize;
pub use types::{ScoreResult, Sentiment};
