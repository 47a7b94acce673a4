//! Inverted index construction.
//!
//! [`InvertedIndexWriter`] accumulates documents one at a time and produces an
//! immutable [`InvertedIndex`]. [`build_index`] and [`build_index_parallel`]
//! are the one-shot entry points over a whole corpus.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::analysis::stop_words::StopWords;
use crate::lexical::document::Document;
use crate::lexical::index::{DocIdSet, InvertedIndex};

type Postings = AHashMap<String, DocIdSet>;

/// Statistics about the writing process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Number of documents added.
    pub docs_added: usize,
    /// Number of documents that produced no indexable token.
    pub empty_docs: usize,
    /// Total (document, token) pairs inserted, after per-document dedup.
    pub total_postings: usize,
}

/// Builds an [`InvertedIndex`] from documents.
pub struct InvertedIndexWriter {
    /// Analyzer applied to every document's text.
    analyzer: Arc<dyn Analyzer>,

    /// Postings being built.
    postings: Postings,

    /// Writer statistics.
    stats: WriterStats,
}

impl std::fmt::Debug for InvertedIndexWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvertedIndexWriter")
            .field("analyzer", &self.analyzer.name())
            .field("terms", &self.postings.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for InvertedIndexWriter {
    fn default() -> Self {
        Self::new(Arc::new(StandardAnalyzer::new()))
    }
}

impl InvertedIndexWriter {
    /// Create a writer using the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        InvertedIndexWriter {
            analyzer,
            postings: Postings::new(),
            stats: WriterStats::default(),
        }
    }

    /// Create a writer with a [`StandardAnalyzer`] that drops `stop_words`.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self::new(Arc::new(StandardAnalyzer::with_stop_words(stop_words)))
    }

    /// Add a document.
    ///
    /// A document whose text yields no token still counts as added.
    pub fn add_document(&mut self, document: &Document) {
        let inserted = index_document(&mut self.postings, self.analyzer.as_ref(), document);

        self.stats.docs_added += 1;
        self.stats.total_postings += inserted;
        if inserted == 0 {
            self.stats.empty_docs += 1;
        }

        log::trace!("indexed document {} ({inserted} distinct terms)", document.id);
    }

    /// Add every document of an iterator, in order.
    pub fn add_documents<I, D>(&mut self, documents: I)
    where
        I: IntoIterator<Item = D>,
        D: AsRef<Document>,
    {
        for document in documents {
            self.add_document(document.as_ref());
        }
    }

    /// Get the current statistics.
    pub fn stats(&self) -> &WriterStats {
        &self.stats
    }

    /// Finish writing and return the index.
    pub fn finish(self) -> InvertedIndex {
        log::info!(
            "built index: {} documents ({} without terms), {} unique terms, {} postings",
            self.stats.docs_added,
            self.stats.empty_docs,
            self.postings.len(),
            self.stats.total_postings
        );
        InvertedIndex::from_parts(self.postings, self.stats.docs_added)
    }
}

/// Build an index over `documents`, dropping `stop_words`.
///
/// Returns the index together with the number of documents processed.
///
/// # Examples
///
/// ```
/// use revdex::analysis::StopWords;
/// use revdex::lexical::{Document, build_index};
///
/// let documents = vec![
///     Document::new("d1", "Hello World"),
///     Document::new("d2", "hello there"),
/// ];
/// let (index, count) = build_index(&documents, &StopWords::new());
///
/// assert_eq!(count, 2);
/// assert_eq!(index.term_count(), 3);
/// assert_eq!(index.get("hello").unwrap().len(), 2);
/// ```
pub fn build_index<I, D>(documents: I, stop_words: &StopWords) -> (InvertedIndex, usize)
where
    I: IntoIterator<Item = D>,
    D: AsRef<Document>,
{
    let mut writer = InvertedIndexWriter::with_stop_words(stop_words.clone());
    writer.add_documents(documents);
    let index = writer.finish();
    let count = index.document_count();
    (index, count)
}

/// Build the same index as [`build_index`], analyzing documents on the rayon pool.
///
/// Each worker fills its own partial postings map; the partial maps are merged
/// once all documents are analyzed.
pub fn build_index_parallel(
    documents: &[Document],
    stop_words: &StopWords,
) -> (InvertedIndex, usize) {
    let analyzer = StandardAnalyzer::with_stop_words(stop_words.clone());

    let postings = documents
        .par_iter()
        .fold(Postings::new, |mut partial, document| {
            index_document(&mut partial, &analyzer, document);
            partial
        })
        .reduce(Postings::new, merge_postings);

    log::info!(
        "built index in parallel: {} documents, {} unique terms",
        documents.len(),
        postings.len()
    );

    let count = documents.len();
    (InvertedIndex::from_parts(postings, count), count)
}

/// Insert `document` into `postings`, returning the number of distinct terms added.
fn index_document(postings: &mut Postings, analyzer: &dyn Analyzer, document: &Document) -> usize {
    let terms: AHashSet<String> = analyzer.analyze(&document.text).collect();
    let inserted = terms.len();

    for term in terms {
        postings
            .entry(term)
            .or_default()
            .insert(document.id.clone());
    }

    inserted
}

fn merge_postings(left: Postings, right: Postings) -> Postings {
    let (mut into, from) = if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    };

    for (term, ids) in from {
        into.entry(term).or_default().extend(ids);
    }

    into
}
