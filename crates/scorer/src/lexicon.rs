//! Word lists driving classification.
//!
//! Each list is built into a `HashSet` on first use and shared read-only for the
//! rest of the process. Entries are already in normalized token form (lowercase,
//! no punctuation), so a token from [`crate::tokenize`] can be looked up directly.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "excellent", "amazing", "wonderful", "fantastic", "great", "good", "awesome", "brilliant",
        "outstanding", "superb", "marvelous", "incredible", "spectacular", "magnificent", "perfect",
        "beautiful", "lovely", "enjoyable", "entertaining", "compelling", "engaging", "captivating",
        "thrilling", "exciting", "inspiring", "uplifting", "heartwarming", "touching", "moving",
        "impressive", "remarkable", "extraordinary", "phenomenal", "stellar",
        "love", "adore", "like", "enjoy", "appreciate", "recommend", "praise", "applaud",
        "masterpiece", "gem", "treasure", "classic", "timeless", "unforgettable", "memorable",
        "hilarious", "funny", "witty", "clever", "smart", "genius", "talented", "skilled",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "terrible", "awful", "horrible", "bad", "poor", "worst", "hate", "dislike",
        "boring", "dull", "tedious", "slow", "confusing", "stupid", "ridiculous", "absurd",
        "disappointing", "frustrating", "annoying", "irritating", "unpleasant", "uncomfortable",
        "disgusting", "repulsive", "offensive", "disturbing", "shocking", "appalling",
        "pathetic", "lame", "weak", "mediocre", "subpar", "inferior", "flawed", "failed",
        "waste", "disaster", "mess", "garbage", "trash", "junk", "crap", "nonsense",
        "overrated", "underwhelming", "lackluster", "bland", "uninspired", "generic", "cliched",
        "predictable", "cheesy", "cringe", "awkward", "painful", "unbearable",
    ]
    .into_iter()
    .collect()
});

static NEGATION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "barely", "hardly",
        "scarcely",
    ]
    .into_iter()
    .collect()
});

/// Which list, if any, a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Positive,
    Negative,
    Negation,
    Other,
}

/// Classify a single normalized token.
///
/// Negation is checked first so a word can never be both a negator and a
/// sentiment word in the scoring pass.
pub fn classify(token: &str) -> WordClass {
    if NEGATION_WORDS.contains(token) {
        WordClass::Negation
    } else if POSITIVE_WORDS.contains(token) {
        WordClass::Positive
    } else if NEGATIVE_WORDS.contains(token) {
        WordClass::Negative
    } else {
        WordClass::Other
    }
}

pub fn positive_words() -> &'static HashSet<&'static str> {
    &POSITIVE_WORDS
}

pub fn negative_words() -> &'static HashSet<&'static str> {
    &NEGATIVE_WORDS
}

pub fn negation_words() -> &'static HashSet<&'static str> {
    &NEGATION_WORDS
}
