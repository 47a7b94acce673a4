use anyhow::Result;
use revdex::IndexConfig;

use crate::context;
use crate::output::{self, OutputFormat};

/// Execute the stats command.
pub fn run(config: &IndexConfig, format: OutputFormat) -> Result<()> {
    let index = context::open_index(config)?;
    output::print_stats(&index.stats(), format);
    Ok(())
}
