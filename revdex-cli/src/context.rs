use anyhow::{Context, Result, bail};
use revdex::corpus::load_documents;
use revdex::{IndexConfig, InvertedIndex};

use crate::cli::Cli;

/// Resolve the index configuration from the optional config file and flags.
pub fn resolve_config(cli: &Cli) -> Result<IndexConfig> {
    let mut config = match &cli.config {
        Some(path) => IndexConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => IndexConfig::default(),
    };

    if let Some(corpus) = &cli.corpus {
        config.corpus = Some(corpus.clone());
    }
    if let Some(stop_words) = &cli.stop_words {
        config.stop_words = Some(stop_words.clone());
    }
    config.parallel |= cli.parallel;

    tracing::debug!(?config, "resolved index configuration");
    Ok(config)
}

/// Read the corpus and build the index described by `config`.
pub fn open_index(config: &IndexConfig) -> Result<InvertedIndex> {
    let Some(corpus) = &config.corpus else {
        bail!("No corpus given. Pass --corpus <FILE> or set `corpus` in the config file.");
    };

    let documents = load_documents(corpus)
        .with_context(|| format!("Failed to read corpus {}", corpus.display()))?;

    tracing::info!(documents = documents.len(), "building index");
    let (index, _) = config.build(&documents);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("revdex.toml");
        std::fs::write(&config_path, "corpus = \"a.txt\"\nstop_words = \"stop.txt\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "revdex",
            "--config",
            config_path.to_str().unwrap(),
            "--corpus",
            "b.txt",
            "--parallel",
            "stats",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.corpus, Some(PathBuf::from("b.txt")));
        assert_eq!(config.stop_words, Some(dir.path().join("stop.txt")));
        assert!(config.parallel);
    }

    #[test]
    fn test_open_index_requires_corpus() {
        let err = open_index(&IndexConfig::default()).unwrap_err();
        assert!(err.to_string().contains("No corpus"));
    }

    #[test]
    fn test_open_index() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("pages.txt");
        std::fs::write(&corpus, "d1\nHello World\nd2\nhello there\n").unwrap();

        let config = IndexConfig::builder().corpus(&corpus).build();
        let index = open_index(&config).unwrap();
        assert_eq!(index.document_count(), 2);
        assert_eq!(index.term_count(), 3);
    }
}
