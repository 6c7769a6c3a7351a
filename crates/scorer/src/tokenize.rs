//! Text preprocessing.
//!
//! Turns raw review text into the token stream the scorer walks over:
//! lowercase, punctuation replaced by spaces, split on whitespace runs,
//! empty pieces dropped.

/// ASCII letters, digits and underscore survive preprocessing; everything
/// else except whitespace becomes a separator, accented letters included.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `text` into lowercase word tokens.
///
/// ```
/// use scorer::tokenize;
///
/// assert_eq!(tokenize("Not BAD, really!"), vec!["not", "bad", "really"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}
