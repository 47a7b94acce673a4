use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Revdex - reverse index search CLI
#[derive(Parser)]
#[command(name = "revdex", version, about)]
pub struct Cli {
    /// Corpus file with alternating identifier and text lines.
    #[arg(long, env = "REVDEX_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Stop word file, one word per line.
    #[arg(long)]
    pub stop_words: Option<PathBuf>,

    /// TOML configuration file. Command-line flags take precedence.
    #[arg(long, env = "REVDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Build the index on all available cores.
    #[arg(long)]
    pub parallel: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show index statistics.
    Stats,
    /// Execute a search query.
    Search(QueryArgs),
    /// Show how a query is parsed.
    Explain(QueryArgs),
    /// Start an interactive search session.
    Repl,
}

#[derive(Parser)]
pub struct QueryArgs {
    /// Query string: `word` unions, `+word` intersects, `-word` excludes.
    #[arg(allow_hyphen_values = true)]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_leading_sigil() {
        let cli = Cli::try_parse_from([
            "revdex",
            "--corpus",
            "pages.txt",
            "search",
            "-banana +apple",
        ])
        .unwrap();

        assert_eq!(cli.corpus, Some(PathBuf::from("pages.txt")));
        match cli.command {
            Command::Search(args) => assert_eq!(args.query, "-banana +apple"),
            _ => panic!("expected search command"),
        }
    }
}
