use anyhow::Result;
use revdex::{IndexConfig, evaluate};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::context;
use crate::output::{self, OutputFormat};

const PROMPT: &str = "Enter query sentence (press enter to quit): ";

/// Run the interactive search session.
///
/// An empty line ends the session, as does Ctrl-C or Ctrl-D.
pub fn run(config: &IndexConfig, format: OutputFormat) -> Result<()> {
    println!("Stand by while building index...");
    let index = context::open_index(config)?;

    let stats = index.stats();
    println!(
        "Indexed {} pages containing {} unique terms\n",
        stats.indexed_documents, stats.unique_terms
    );

    let mut rl = DefaultEditor::new()?;

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        };

        let query = line.trim();
        if query.is_empty() {
            break;
        }
        let _ = rl.add_history_entry(query);

        let results = evaluate(&index, query);
        output::print_results(query, &results, format);
        println!();
    }

    println!("Thank you for searching!");
    Ok(())
}
