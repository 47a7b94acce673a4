//! Analyzers turn document text into the tokens that get indexed.

use std::fmt::Debug;

use crate::analysis::normalize::normalize;
use crate::analysis::stop_words::StopWords;

/// A boxed token stream produced by an analyzer.
pub type TokenStream<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Trait for text analyzers.
///
/// An analyzer never fails: words it cannot use are dropped from the stream.
pub trait Analyzer: Send + Sync + Debug {
    /// Analyze `text` into a stream of normalized tokens.
    ///
    /// The stream may contain the same token more than once.
    fn analyze<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The default analyzer.
///
/// Splits on whitespace, normalizes every word, and drops empty tokens and stop
/// words.
///
/// # Examples
///
/// ```
/// use revdex::analysis::{Analyzer, StandardAnalyzer, StopWords};
///
/// let analyzer = StandardAnalyzer::with_stop_words(StopWords::from_lines(["the"]));
/// let tokens: Vec<String> = analyzer.analyze("The Cat, the HAT!").collect();
/// assert_eq!(tokens, vec!["cat", "hat"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandardAnalyzer {
    stop_words: StopWords,
}

impl StandardAnalyzer {
    /// Create an analyzer without stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer that drops the given stop words.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        StandardAnalyzer { stop_words }
    }

    /// The stop words this analyzer drops.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(
            text.split_whitespace()
                .map(normalize)
                .filter(move |token| !token.is_empty() && !self.stop_words.contains(token)),
        )
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
