use clap::ValueEnum;
use revdex::{BooleanQuery, IndexStats, ResultSet};
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// JSON output.
    Json,
}

/// Print search results.
pub fn print_results(query: &str, results: &ResultSet, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "query": query,
                "count": results.len(),
                "results": results,
            });
            print_json(&output);
        }
        OutputFormat::Table => {
            println!("Found {} matching pages", results.len());
            if results.is_empty() {
                return;
            }

            let rows: Vec<ResultRow> = results
                .iter()
                .enumerate()
                .map(|(i, id)| ResultRow {
                    rank: i + 1,
                    id: id.clone(),
                })
                .collect();

            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
}

/// Print index statistics.
pub fn print_stats(stats: &IndexStats, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&json!(stats)),
        OutputFormat::Table => {
            println!(
                "Indexed {} pages containing {} unique terms",
                stats.indexed_documents, stats.unique_terms
            );

            let rows = vec![
                StatsRow {
                    metric: "Documents read",
                    value: stats.document_count,
                },
                StatsRow {
                    metric: "Documents indexed",
                    value: stats.indexed_documents,
                },
                StatsRow {
                    metric: "Unique terms",
                    value: stats.unique_terms,
                },
            ];
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
}

/// Print the parsed form of a query.
pub fn print_query(query: &BooleanQuery, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let clauses: Vec<serde_json::Value> = query
                .clauses()
                .iter()
                .map(|c| {
                    json!({
                        "operator": format!("{:?}", c.operator).to_lowercase(),
                        "term": c.term,
                    })
                })
                .collect();
            print_json(&json!({
                "description": query.description(),
                "clauses": clauses,
            }));
        }
        OutputFormat::Table => {
            println!("{}", query.description());
            if query.is_empty() {
                return;
            }

            let rows: Vec<ClauseRow> = query
                .clauses()
                .iter()
                .enumerate()
                .map(|(i, c)| ClauseRow {
                    position: i + 1,
                    operator: format!("{:?}", c.operator),
                    term: c.term.clone(),
                })
                .collect();
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Error: failed to render JSON: {e}"),
    }
}

// --- Helper types ---

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Document")]
    id: String,
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: usize,
}

#[derive(Tabled)]
struct ClauseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Operator")]
    operator: String,
    #[tabled(rename = "Term")]
    term: String,
}
