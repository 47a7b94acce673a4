//! The in-memory inverted index.

use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A set of document identifiers, kept in sorted order.
pub type DocIdSet = BTreeSet<String>;

/// Statistics about a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents processed, including those that produced no tokens.
    pub document_count: usize,
    /// Number of distinct documents that appear in at least one posting set.
    pub indexed_documents: usize,
    /// Number of distinct tokens in the index.
    pub unique_terms: usize,
}

/// An inverted index mapping each token to the documents that contain it.
///
/// Every entry holds a non-empty set: tokens that never occurred are absent
/// rather than mapped to an empty set. The index is produced by
/// [`InvertedIndexWriter`](crate::lexical::writer::InvertedIndexWriter) and is
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: AHashMap<String, DocIdSet>,
    document_count: usize,
}

impl InvertedIndex {
    pub(crate) fn from_parts(postings: AHashMap<String, DocIdSet>, document_count: usize) -> Self {
        debug_assert!(postings.values().all(|ids| !ids.is_empty()));
        InvertedIndex {
            postings,
            document_count,
        }
    }

    /// Get the documents containing `term`.
    ///
    /// `term` must already be normalized; no analysis happens here.
    pub fn get(&self, term: &str) -> Option<&DocIdSet> {
        self.postings.get(term)
    }

    /// Returns true if `term` occurs in at least one document.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of documents that were processed while building the index.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct tokens.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Returns true if the index holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// All tokens, sorted.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Iterate over `(token, documents)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocIdSet)> {
        self.postings.iter().map(|(term, ids)| (term.as_str(), ids))
    }

    /// Compute statistics for this index.
    pub fn stats(&self) -> IndexStats {
        let indexed: BTreeSet<&str> = self
            .postings
            .values()
            .flat_map(|ids| ids.iter().map(String::as_str))
            .collect();

        IndexStats {
            document_count: self.document_count,
            indexed_documents: indexed.len(),
            unique_terms: self.postings.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> InvertedIndex {
        let mut postings = AHashMap::new();
        postings.insert(
            "hello".to_string(),
            DocIdSet::from(["d1".to_string(), "d2".to_string()]),
        );
        postings.insert("world".to_string(), DocIdSet::from(["d1".to_string()]));
        InvertedIndex::from_parts(postings, 3)
    }

    #[test]
    fn test_lookup() {
        let index = sample_index();

        assert!(index.contains_term("hello"));
        assert_eq!(index.get("world").map(|ids| ids.len()), Some(1));
        assert!(index.get("missing").is_none());
        assert!(!index.contains_term("Hello"));
    }

    #[test]
    fn test_terms_are_sorted() {
        let index = sample_index();
        assert_eq!(index.terms(), vec!["hello", "world"]);
        assert_eq!(index.iter().count(), 2);
    }

    #[test]
    fn test_stats() {
        let stats = sample_index().stats();

        assert_eq!(
            stats,
            IndexStats {
                document_count: 3,
                indexed_documents: 2,
                unique_terms: 2,
            }
        );
    }

    #[test]
    fn test_empty_index() {
        let index = InvertedIndex::default();

        assert!(index.is_empty());
        assert_eq!(index.term_count(), 0);
        assert_eq!(index.stats(), IndexStats::default());
    }
}
