//! The lexical scoring pass.
//!
//! ## Algorithm
//! One left-to-right walk over the token stream with a single negation flag:
//! 1. A negation word sets the flag and is not scored. It never clears the flag.
//! 2. A positive word scores positive, or negative if the flag is set (flag cleared).
//! 3. A negative word scores negative, or positive if the flag is set (flag cleared).
//! 4. Any other word clears the flag.
//!
//! So "not good" is negative, while in "not really good" the word "really"
//! cancels the negation before "good" is reached.

use crate::lexicon::{classify, WordClass};
use crate::tokenize::tokenize;
use crate::types::{ScoreResult, Sentiment};
use tracing::debug;

/// Confidence reported when positive and negative counts are equal and nonzero.
pub const TIE_CONFIDENCE: u8 = 50;

/// Score a passage of free text.
///
/// Never fails: empty input, punctuation-only input and text without any
/// lexicon words all produce a neutral result.
pub fn score(text: &str) -> ScoreResult {
    if text.trim().is_empty() {
        return ScoreResult::empty();
    }

    let tokens = tokenize(text);
    if tokens.is_empty() {
        return ScoreResult::empty();
    }

    let (positive_score, negative_score) = count_polarity(&tokens);
    let word_count = tokens.len() as u32;

    debug!(
        "Scored {} tokens: positive={}, negative={}",
        word_count, positive_score, negative_score
    );

    classify_counts(positive_score, negative_score, word_count)
}

/// Walk the tokens once and return `(positive, negative)` counts.
fn count_polarity(tokens: &[String]) -> (u32, u32) {
    let mut positive = 0;
    let mut negative = 0;
    let mut negated = false;

    for token in tokens {
        match classify(token) {
            WordClass::Negation => negated = true,
            WordClass::Positive if negated => {
                negative += 1;
                negated = false;
            }
            WordClass::Positive => positive += 1,
            WordClass::Negative if negated => {
                positive += 1;
                negated = false;
            }
            WordClass::Negative => negative += 1,
            WordClass::Other => negated = false,
        }
    }

    (positive, negative)
}

/// Turn raw counts into a labelled result.
fn classify_counts(positive_score: u32, negative_score: u32, word_count: u32) -> ScoreResult {
    let total = positive_score + negative_score;

    let (sentiment, confidence, explanation) = if total == 0 {
        (
            Sentiment::Neutral,
            0,
            "No sentiment indicators found in the text".to_string(),
        )
    } else if positive_score > negative_score {
        (
            Sentiment::Positive,
            percent_rounded(positive_score, total),
            format!(
                "Found {} positive words and {} negative words",
                positive_score, negative_score
            ),
        )
    } else if negative_score > positive_score {
        (
            Sentiment::Negative,
            percent_rounded(negative_score, total),
            format!(
                "Found {} negative words and {} positive words",
                negative_score, positive_score
            ),
        )
    } else {
        (
            Sentiment::Neutral,
            TIE_CONFIDENCE,
            format!(
                "Equal positive ({}) and negative ({}) words found",
                positive_score, negative_score
            ),
        )
    };

    ScoreResult {
        sentiment,
        confidence,
        positive_score,
        negative_score,
        word_count,
        explanation,
    }
}

/// `part / total * 100`, rounded half up, in exact integer arithmetic.
///
/// Requires `part <= total` and `total > 0`.
fn percent_rounded(part: u32, total: u32) -> u8 {
    let (part, total) = (part as u64, total as u64);
    ((200 * part + total) / (2 * total)) as u8
}
