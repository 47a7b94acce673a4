//! Lexical search using an in-memory inverted index.
//!
//! # Module Structure
//!
//! - `document`: documents handed to the indexer
//! - `index`: the read-only [`InvertedIndex`] and its statistics
//! - `writer`: index construction
//! - `query`: boolean query parsing and evaluation

pub mod document;
pub mod index;
pub mod query;
pub mod writer;

// Re-exports
pub use document::Document;
pub use index::{DocIdSet, IndexStats, InvertedIndex};
pub use query::{BooleanQuery, Clause, Operator, QueryParser, ResultSet, evaluate};
pub use writer::{InvertedIndexWriter, WriterStats, build_index, build_index_parallel};
