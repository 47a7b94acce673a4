mod cli;
mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::{repl, search, stats};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let config = context::resolve_config(&cli)?;

    match cli.command {
        Command::Stats => stats::run(&config, format),
        Command::Search(args) => search::run(args, &config, format),
        Command::Explain(args) => search::explain(args, format),
        Command::Repl => repl::run(&config, format),
    }
}
