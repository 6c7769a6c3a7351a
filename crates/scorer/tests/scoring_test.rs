//! Integration tests for the scorer.
//!
//! These exercise `score` through the public API only, covering the
//! documented behaviour of the negation rule and the classification branches.

use scorer::{score, tokenize, ScoreResult, Sentiment};

fn assert_empty(result: &ScoreResult) {
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.confidence, 0);
    assert_eq!(result.positive_score, 0);
    assert_eq!(result.negative_score, 0);
    assert_eq!(result.word_count, 0);
    assert_eq!(result.explanation, "No text provided for analysis");
}

#[test]
fn test_empty_inputs_are_neutral() {
    assert_empty(&score(""));
    assert_empty(&score("   "));
    assert_empty(&score("\n\t"));
}

#[test]
fn test_single_positive_word() {
    let result = score("good");
    assert_eq!(result.positive_score, 1);
    assert_eq!(result.negative_score, 0);
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.confidence, 100);
}

#[test]
fn test_single_negative_word() {
    let result = score("bad");
    assert_eq!(result.positive_score, 0);
    assert_eq!(result.negative_score, 1);
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.confidence, 100);
}

#[test]
fn test_negation_flips_next_word() {
    let result = score("not good");
    assert_eq!(result.positive_score, 0);
    assert_eq!(result.negative_score, 1);
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.confidence, 100);
    assert_eq!(result.word_count, 2);
}

#[test]
fn test_filler_word_clears_negation() {
    let result = score("not really good");
    assert_eq!(result.positive_score, 1);
    assert_eq!(result.negative_score, 0);
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.confidence, 100);
    assert_eq!(result.word_count, 3);
}

#[test]
fn test_consecutive_negations_keep_flag() {
    // "never" is itself a negation word, so the flag survives it
    let result = score("not never good");
    assert_eq!(result.positive_score, 0);
    assert_eq!(result.negative_score, 1);

    // Double negation does not cancel out either
    let result = score("no, not bad");
    assert_eq!(result.positive_score, 1);
    assert_eq!(result.negative_score, 0);
}

#[test]
fn test_tie_is_neutral_fifty() {
    let result = score("good bad");
    assert_eq!(result.positive_score, 1);
    assert_eq!(result.negative_score, 1);
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.confidence, 50);
    assert_eq!(result.explanation, "Equal positive (1) and negative (1) words found");
}

#[test]
fn test_no_indicators() {
    let result = score("The movie was okay.");
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.confidence, 0);
    assert_eq!(result.word_count, 4);
    assert_eq!(result.explanation, "No sentiment indicators found in the text");
}

#[test]
fn test_confidence_rounds_half_up() {
    // 5 positive vs 3 negative = 62.5%
    let result = score("good great fun superb witty clever bad awful dull");
    assert_eq!(result.positive_score, 5);
    assert_eq!(result.negative_score, 3);
    assert_eq!(result.confidence, 63);

    // 2 vs 1 = 66.67%
    let result = score("boring, dull, but funny");
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.confidence, 67);
}

#[test]
fn test_case_and_punctuation_insensitive() {
    assert_eq!(score("GOOD!!!"), score("good"));
    assert_eq!(score("Not... GOOD."), score("not good"));
}

#[test]
fn test_accented_letters_are_separators() {
    // "é" vanishes entirely, so nothing sits between the negation and "good"
    let result = score("not é good");
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.positive_score, 0);
    assert_eq!(result.negative_score, 1);
    assert_eq!(result.word_count, 2);

    let result = score("Amélie was not naïve, just good");
    assert_eq!(result.word_count, 8);
    assert_eq!(result.sentiment, Sentiment::Positive);

    // Non-blank input with no ASCII word characters has no tokens
    assert_empty(&score("é ü ñ"));
}

#[test]
fn test_score_is_idempotent() {
    let text = "Not the worst, but hardly a masterpiece. Predictable and cheesy.";
    assert_eq!(score(text), score(text));
}

#[test]
fn test_word_count_matches_token_count() {
    let texts = [
        "",
        "The movie was okay.",
        "A masterpiece -- truly top-notch, first-rate stuff!!",
        "I'd watch it again; 10/10 would recommend.",
    ];

    for text in texts {
        assert_eq!(
            score(text).word_count as usize,
            tokenize(text).len(),
            "word count mismatch for {:?}",
            text
        );
    }
}

#[test]
fn test_sample_reviews() {
    let result = score(
        "This movie was absolutely amazing! The acting was superb and the plot was captivating.",
    );
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.positive_score, 3);
    assert_eq!(result.confidence, 100);
    assert_eq!(result.word_count, 14);

    let result = score(
        "I hated this film. The script was terrible and the actors seemed bored the entire time.",
    );
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.negative_score, 1);
    assert_eq!(result.word_count, 16);

    let result = score("It was okay. Some parts were good but others were quite boring.");
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.confidence, 50);
    assert_eq!(result.word_count, 12);

    let result = score(
        "The visual effects were stunning, but the storyline was confusing and hard to follow.",
    );
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.negative_score, 1);
    assert_eq!(result.positive_score, 0);
    assert_eq!(result.word_count, 14);
}

#[test]
fn test_concurrent_calls_agree() {
    let text = "Not boring at all, a thrilling and clever film";
    let expected = score(text);

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || score(text)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
