//! Boolean keyword queries.
//!
//! - `boolean`: [`BooleanQuery`], its clauses and the left-fold evaluation
//! - `parser`: [`QueryParser`] for the `word +word -word` syntax

pub mod boolean;
pub mod parser;

pub use boolean::{BooleanQuery, Clause, Operator, ResultSet};
pub use parser::QueryParser;

use crate::lexical::index::InvertedIndex;

/// Parse `query` and evaluate it against `index`.
///
/// An empty or blank query yields the empty set.
///
/// # Examples
///
/// ```
/// use revdex::analysis::StopWords;
/// use revdex::lexical::query::evaluate;
/// use revdex::lexical::{Document, build_index};
///
/// let documents = vec![
///     Document::new("d1", "Hello World"),
///     Document::new("d2", "hello there"),
/// ];
/// let (index, _) = build_index(&documents, &StopWords::new());
///
/// let hits: Vec<String> = evaluate(&index, "hello -there").into_iter().collect();
/// assert_eq!(hits, vec!["d1"]);
/// ```
pub fn evaluate(index: &InvertedIndex, query: &str) -> ResultSet {
    QueryParser::new().parse(query).evaluate(index)
}
