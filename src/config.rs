//! Index configuration.
//!
//! Configuration is plain data and can be written as TOML:
//!
//! ```toml
//! corpus = "data/pages.txt"
//! stop_words = "data/stopwords.txt"
//! parallel = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::StopWords;
use crate::error::{Result, RevdexError};
use crate::lexical::document::Document;
use crate::lexical::index::InvertedIndex;
use crate::lexical::writer::{build_index, build_index_parallel};

/// Configuration for building an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Corpus file with alternating identifier and text lines.
    #[serde(default)]
    pub corpus: Option<PathBuf>,
    /// Optional stop word file, one word per line.
    #[serde(default)]
    pub stop_words: Option<PathBuf>,
    /// Analyze documents on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> IndexConfigBuilder {
        IndexConfigBuilder::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a configuration from a TOML file.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: IndexConfig = toml::from_str(&content).map_err(|e| {
            RevdexError::invalid_config(format!("{}: {e}", path.display()))
        })?;

        if let Some(base) = path.parent() {
            config.corpus = config.corpus.map(|p| base.join(p));
            config.stop_words = config.stop_words.map(|p| base.join(p));
        }

        Ok(config)
    }

    /// Load the configured stop words.
    ///
    /// Returns the empty set when none are configured or the file cannot be read.
    pub fn load_stop_words(&self) -> StopWords {
        match &self.stop_words {
            Some(path) => StopWords::load_or_empty(path),
            None => StopWords::new(),
        }
    }

    /// Build an index over `documents` with this configuration.
    pub fn build(&self, documents: &[Document]) -> (InvertedIndex, usize) {
        let stop_words = self.load_stop_words();
        if self.parallel {
            build_index_parallel(documents, &stop_words)
        } else {
            build_index(documents, &stop_words)
        }
    }
}

#[derive(Debug, Default)]
pub struct IndexConfigBuilder {
    config: IndexConfig,
}

impl IndexConfigBuilder {
    pub fn corpus(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.corpus = Some(path.into());
        self
    }

    pub fn stop_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.stop_words = Some(path.into());
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn build(self) -> IndexConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndexConfig::from_toml_str("").unwrap();
        assert_eq!(config, IndexConfig::default());
        assert!(config.load_stop_words().is_empty());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = IndexConfig::builder()
            .corpus("pages.txt")
            .stop_words("stop.txt")
            .parallel(true)
            .build();

        let text = toml::to_string(&config).unwrap();
        assert_eq!(IndexConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        let err = IndexConfig::from_toml_str("parallel = \"yes\"").unwrap_err();
        assert!(matches!(err, RevdexError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_path_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("revdex.toml");
        std::fs::write(&config_path, "corpus = \"pages.txt\"\nstop_words = \"stop.txt\"\n")
            .unwrap();

        let config = IndexConfig::from_path(&config_path).unwrap();
        assert_eq!(config.corpus, Some(dir.path().join("pages.txt")));
        assert_eq!(config.stop_words, Some(dir.path().join("stop.txt")));
        assert!(!config.parallel);
    }

    #[test]
    fn test_missing_stop_word_file_is_not_fatal() {
        let config = IndexConfig::builder()
            .stop_words("/nonexistent/revdex/stopwords.txt")
            .build();
        let documents = vec![Document::new("d1", "the cat")];

        let (index, count) = config.build(&documents);
        assert_eq!(count, 1);
        assert!(index.contains_term("the"));
    }
}
