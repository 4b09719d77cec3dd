// Scan request configuration and pre-scan validation
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::date_locate::DateRange;
use crate::matcher::MissingDatePolicy;
use crate::types::{Result, SiftError};

/// Extraction granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Copy matching source files whole, under their original names.
    #[default]
    WholeFile,
    /// Collect matching pages into one aggregate output PDF.
    Pages,
}

/// Immutable description of one scan run.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub search_term: String,
    pub date_range: Option<DateRange>,
    pub mode: ScanMode,
    /// Whole-file mode: replace files already present in the destination.
    pub overwrite: bool,
    pub missing_date: MissingDatePolicy,
}

impl ScanRequest {
    pub fn new(
        source: impl Into<PathBuf>,
        dest: impl Into<PathBuf>,
        search_term: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            search_term: search_term.into(),
            date_range: None,
            mode: ScanMode::WholeFile,
            overwrite: true,
            missing_date: MissingDatePolicy::Exclude,
        }
    }

    /// Check preconditions and create the destination directory.
    ///
    /// Runs before any document is opened; a failure here rejects the whole
    /// run without touching a single PDF.
    pub fn validate(&self) -> Result<()> {
        if self.search_term.trim().is_empty() {
            return Err(SiftError::EmptySearchTerm);
        }
        if !self.source.is_dir() {
            return Err(SiftError::SourceMissing(self.source.clone()));
        }
        fs::create_dir_all(&self.dest)?;
        Ok(())
    }
}

/// Parse an ISO `YYYY-MM-DD` date bound.
pub fn parse_bound(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| SiftError::BadDateBound(value.to_string()))
}
