use anyhow::Result;
use revdex::{IndexConfig, QueryParser};

use crate::cli::QueryArgs;
use crate::context;
use crate::output::{self, OutputFormat};

/// Execute a search command.
pub fn run(args: QueryArgs, config: &IndexConfig, format: OutputFormat) -> Result<()> {
    let index = context::open_index(config)?;

    let query = QueryParser::new().parse(&args.query);
    tracing::debug!(query = %query.description(), "evaluating query");

    let results = query.evaluate(&index);
    output::print_results(&args.query, &results, format);
    Ok(())
}

/// Execute an explain command. The corpus is not read.
pub fn explain(args: QueryArgs, format: OutputFormat) -> Result<()> {
    let query = QueryParser::new().parse(&args.query);
    output::print_query(&query, format);
    Ok(())
}
