// PDF text extraction - Pure Rust via lopdf
use std::path::Path;

use lopdf::Document;

use crate::types::{Result, SiftError};

/// Number of pages in the document at `path`.
pub fn page_count(path: &Path) -> Result<usize> {
    let document = Document::load(path)?;
    Ok(document.get_pages().len())
}

/// Plain text of all pages, concatenated in page order.
pub fn document_text(path: &Path) -> Result<String> {
    let document = Document::load(path)?;
    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    Ok(document.extract_text(&pages)?)
}

/// A PDF loaded once, with per-page text on demand.
///
/// Page mode opens each document exactly once and closes it (drops this)
/// before moving on to the next.
pub struct LoadedPdf {
    document: Document,
    pages: Vec<u32>,
}

impl LoadedPdf {
    pub fn load(path: &Path) -> Result<Self> {
        let document = Document::load(path)?;
        let pages = document.get_pages().keys().copied().collect();
        Ok(Self { document, pages })
    }

    /// 1-based page numbers in page order.
    pub fn page_numbers(&self) -> &[u32] {
        &self.pages
    }

    pub fn page_text(&self, page: u32) -> Result<String> {
        if !self.pages.contains(&page) {
            return Err(SiftError::PageNotFound(page));
        }
        Ok(self.document.extract_text(&[page])?)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}
