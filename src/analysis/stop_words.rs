//! Stop word sets.
//!
//! A [`StopWords`] set holds normalized tokens that carry no meaning for
//! retrieval. It is built once, before indexing, and never changes afterwards.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::analysis::normalize::normalize;
use crate::error::Result;

/// An immutable set of normalized stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    /// Create an empty set. Filtering with it is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from candidate words, one per line.
    ///
    /// Every line goes through [`normalize`]; lines that normalize to the empty
    /// token are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| normalize(line.as_ref()))
            .filter(|token| !token.is_empty())
            .collect();
        StopWords { words }
    }

    /// Read a stop word file, one word per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Read a stop word file, falling back to an empty set if it cannot be read.
    ///
    /// The failure is logged, indexing then proceeds without stop word filtering.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(stop_words) => {
                log::debug!(
                    "loaded {} stop words from {}",
                    stop_words.len(),
                    path.display()
                );
                stop_words
            }
            Err(e) => {
                log::warn!(
                    "failed to read stop words from {}: {e}; continuing without stop words",
                    path.display()
                );
                Self::new()
            }
        }
    }

    /// Returns true if `token` is a stop word.
    ///
    /// `token` is expected to be normalized already.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stop words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}
