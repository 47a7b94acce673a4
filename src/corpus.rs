//! Corpus files.
//!
//! A corpus file alternates identifier and text lines:
//!
//! ```text
//! www.example.com/page1
//! text of page one
//! www.example.com/page2
//! text of page two
//! ```
//!
//! Lines are taken verbatim. A trailing identifier with no text line after it
//! becomes a document with empty text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, RevdexError};
use crate::lexical::document::Document;

/// Read documents from alternating identifier/text lines.
pub fn read_documents<R: BufRead>(reader: R) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    let mut lines = reader.lines();

    while let Some(id) = lines.next() {
        let id = id?;
        let text = lines.next().transpose()?.unwrap_or_default();
        documents.push(Document { id, text });
    }

    Ok(documents)
}

/// Load documents from a corpus file.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(RevdexError::invalid_argument(format!(
            "corpus path {} is a directory",
            path.display()
        )));
    }

    let documents = read_documents(BufReader::new(File::open(path)?))?;
    log::debug!("read {} documents from {}", documents.len(), path.display());
    Ok(documents)
}
