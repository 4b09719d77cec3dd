// Extraction driver - sequential scan over one folder of PDFs
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::{ScanMode, ScanRequest};
use crate::matcher::{self, Verdict};
use crate::pdf::{self, LoadedPdf, PageCollector};
use crate::types::{Result, RunSummary};

/// Receives progress while a scan runs. All callbacks happen on the calling
/// thread, one document at a time.
pub trait ScanObserver {
    /// Called before each document is processed; `index` is 1-based.
    fn on_document(&mut self, index: usize, total: usize, name: &str) {
        let _ = (index, total, name);
    }

    /// Called once after the last document.
    fn on_finished(&mut self, summary: &RunSummary) {
        let _ = summary;
    }
}

/// Observer that ignores everything.
pub struct NullObserver;

impl ScanObserver for NullObserver {}

/// Run one scan to completion and return its summary.
///
/// Pre-scan validation failures abort before any document is opened; after
/// that, per-document failures are counted and the run always finishes.
pub fn run_scan(request: &ScanRequest, observer: &mut dyn ScanObserver) -> Result<RunSummary> {
    request.validate()?;

    let candidates = list_candidates(&request.source)?;
    let mut summary = RunSummary::default();

    match request.mode {
        ScanMode::WholeFile => scan_whole_files(request, &candidates, observer, &mut summary)?,
        ScanMode::Pages => scan_pages(request, &candidates, observer, &mut summary)?,
    }

    observer.on_finished(&summary);
    Ok(summary)
}

/// Files in `dir` with a `pdf` extension (case-insensitive), filename-sorted.
fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);
        if is_pdf {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn scan_whole_files(
    request: &ScanRequest,
    candidates: &[PathBuf],
    observer: &mut dyn ScanObserver,
    summary: &mut RunSummary,
) -> Result<()> {
    for (index, path) in candidates.iter().enumerate() {
        let name = file_name_of(path);
        observer.on_document(index + 1, candidates.len(), &name);
        summary.scanned += 1;

        let text = match pdf::document_text(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("could not read {}: {}", path.display(), err);
                summary.errors += 1;
                continue;
            }
        };

        let verdict = matcher::evaluate(
            &text,
            &request.search_term,
            request.date_range.as_ref(),
            request.missing_date,
        );
        debug!("{}: {:?}", name, verdict);

        match verdict {
            Verdict::Kept => {
                let dest_path = request.dest.join(&name);
                if dest_path.exists() && !request.overwrite {
                    summary.skipped_existing += 1;
                } else if let Err(err) = fs::copy(path, &dest_path) {
                    warn!("could not copy {} to {}: {}", path.display(), dest_path.display(), err);
                    summary.errors += 1;
                } else {
                    summary.extracted += 1;
                }
            }
            Verdict::NoTextMatch => summary.skipped_no_match += 1,
            Verdict::OutOfRange => summary.skipped_out_of_range += 1,
            Verdict::NoDateFound => summary.skipped_no_date += 1,
        }
    }

    summary.output = Some(request.dest.clone());
    Ok(())
}

fn scan_pages(
    request: &ScanRequest,
    candidates: &[PathBuf],
    observer: &mut dyn ScanObserver,
    summary: &mut RunSummary,
) -> Result<()> {
    let mut collector = PageCollector::new();

    for (index, path) in candidates.iter().enumerate() {
        let name = file_name_of(path);
        observer.on_document(index + 1, candidates.len(), &name);
        summary.scanned += 1;

        let loaded = match LoadedPdf::load(path) {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!("could not read {}: {}", path.display(), err);
                summary.errors += 1;
                continue;
            }
        };

        let mut kept: Vec<u32> = Vec::new();
        let mut failed = false;
        for &page in loaded.page_numbers() {
            let text = match loaded.page_text(page) {
                Ok(text) => text,
                Err(err) => {
                    warn!("could not read page {} of {}: {}", page, path.display(), err);
                    failed = true;
                    break;
                }
            };

            let verdict = matcher::evaluate(
                &text,
                &request.search_term,
                request.date_range.as_ref(),
                request.missing_date,
            );
            debug!("{} page {}: {:?}", name, page, verdict);

            match verdict {
                Verdict::Kept => kept.push(page),
                Verdict::NoTextMatch => summary.skipped_no_match += 1,
                Verdict::OutOfRange => summary.skipped_out_of_range += 1,
                Verdict::NoDateFound => summary.skipped_no_date += 1,
            }
        }

        // One bad page poisons its whole document, nothing else.
        if failed {
            summary.errors += 1;
            continue;
        }

        if !kept.is_empty() {
            summary.extracted += kept.len();
            summary.docs_matched += 1;
            collector.add_pages(loaded.document(), &kept);
        }
    }

    if !collector.is_empty() {
        let output = request.dest.join(output_file_name(&request.search_term));
        debug!("writing {} collected pages to {}", collector.page_count(), output.display());
        collector.save(&output)?;
        summary.output = Some(output);
    }

    Ok(())
}

/// Derive the aggregate output name from the search term:
/// lower-cased, spaces to underscores, suffixed `_extracted`.
pub fn output_file_name(search_term: &str) -> String {
    format!("{}_extracted.pdf", search_term.to_lowercase().replace(' ', "_"))
}
