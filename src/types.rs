// Core error and reporting types for pdfsift
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("source directory not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("search term must not be empty")]
    EmptySearchTerm,

    #[error("invalid date bound {0:?}: expected YYYY-MM-DD")]
    BadDateBound(String),

    #[error("page {0} not found in document")]
    PageNotFound(u32),

    #[error("cannot assemble output: {0}")]
    Assemble(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiftError>;

/// Counters accumulated over one scan run.
///
/// In whole-file mode every counter is per document; in page mode `scanned`,
/// `docs_matched` and `errors` stay per document while the extraction and
/// skip counters are per page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Candidate documents visited.
    pub scanned: usize,
    /// Files copied (whole-file mode) or pages appended (page mode).
    pub extracted: usize,
    /// Skipped because the search term was absent.
    pub skipped_no_match: usize,
    /// Skipped because the located date fell outside the range.
    pub skipped_out_of_range: usize,
    /// Skipped because a range was active but no date could be located.
    pub skipped_no_date: usize,
    /// Matched files left alone because the destination already had them.
    pub skipped_existing: usize,
    /// Documents that could not be opened or read.
    pub errors: usize,
    /// Page mode: documents that contributed at least one page.
    pub docs_matched: usize,
    /// Destination directory, or the aggregate file when one was written.
    pub output: Option<PathBuf>,
}
