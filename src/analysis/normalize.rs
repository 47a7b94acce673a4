//! Word normalization.
//!
//! Turns a raw whitespace-delimited word into the canonical form stored in the
//! index. Classification is ASCII-only: punctuation is what
//! [`char::is_ascii_punctuation`] accepts and a letter is what
//! [`char::is_ascii_alphabetic`] accepts.

/// Normalize a raw word into an indexable token.
///
/// Leading punctuation is stripped first, then trailing punctuation. Interior
/// punctuation and digits are kept. ASCII letters are lowercased. If nothing
/// alphabetic survives, the empty string is returned, which callers treat as
/// "discard this word".
///
/// # Examples
///
/// ```
/// use revdex::analysis::normalize;
///
/// assert_eq!(normalize("Hello!"), "hello");
/// assert_eq!(normalize("--world--"), "world");
/// assert_eq!(normalize("don't"), "don't");
/// assert_eq!(normalize("2024"), "");
/// assert_eq!(normalize("?!"), "");
/// ```
pub fn normalize(word: &str) -> String {
    let stripped = word
        .trim_start_matches(|c: char| c.is_ascii_punctuation())
        .trim_end_matches(|c: char| c.is_ascii_punctuation());

    if !stripped.chars().any(|c| c.is_ascii_alphabetic()) {
        return String::new();
    }

    stripped.to_ascii_lowercase()
}

/// Returns true if `token` is already in normalized form and non-empty.
pub fn is_token(token: &str) -> bool {
    !token.is_empty() && normalize(token) == token
}
