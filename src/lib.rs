//! # Revdex
//!
//! An in-memory reverse index over a small corpus, answering boolean keyword
//! queries.
//!
//! ## Features
//!
//! - Word normalization: edge punctuation stripped, ASCII lowercased
//! - Optional stop word filtering
//! - Sequential or rayon-parallel index construction
//! - `word +word -word` queries folded left to right over document sets
//!
//! ## Example
//!
//! ```
//! use revdex::{Document, StopWords, build_index, evaluate};
//!
//! let documents = vec![
//!     Document::new("d1", "Hello World"),
//!     Document::new("d2", "hello there"),
//! ];
//! let (index, count) = build_index(&documents, &StopWords::new());
//! assert_eq!(count, 2);
//!
//! let hits = evaluate(&index, "hello +world");
//! assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec!["d1"]);
//! ```
//!
//! The first clause of a query is always merged into the empty starting set
//! as a union, so its `+` or `-` sigil has no effect. See
//! [`BooleanQuery`](lexical::BooleanQuery).

pub mod analysis;
pub mod config;
pub mod corpus;
mod error;
pub mod lexical;

// Re-exports for the public API
pub use analysis::{Analyzer, StandardAnalyzer, StopWords, normalize};
pub use config::IndexConfig;
pub use error::{Result, RevdexError};
pub use lexical::{
    BooleanQuery, Clause, Document, IndexStats, InvertedIndex, InvertedIndexWriter, Operator,
    QueryParser, ResultSet, build_index, build_index_parallel, evaluate,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
