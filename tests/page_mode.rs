// Page mode: matching pages from many PDFs land in one aggregate output
mod common;

use tempfile::TempDir;

use pdfsift::{
    config::{parse_bound, ScanMode, ScanRequest},
    output_file_name, pdf, run_scan, DateRange, NullObserver,
};

fn page_request(source: &TempDir, dest: &TempDir, search: &str) -> ScanRequest {
    let mut request = ScanRequest::new(source.path(), dest.path(), search);
    request.mode = ScanMode::Pages;
    request
}

#[test]
fn extracts_matching_pages_in_order() {
    let source = TempDir::new().unwrap();
    common::write_pdf(
        &source.path().join("doc.pdf"),
        &[
            "Acme alpha statement",
            "Unrelated beta content",
            "Acme gamma statement",
        ],
    );
    let dest = TempDir::new().unwrap();

    let request = page_request(&source, &dest, "acme");
    let summary = run_scan(&request, &mut NullObserver).unwrap();

    assert_eq!(summary.scanned, 1);
    assert_eq!(summary.extracted, 2);
    assert_eq!(summary.docs_matched, 1);
    assert_eq!(summary.skipped_no_match, 1);

    let output = dest.path().join("acme_extracted.pdf");
    assert_eq!(summary.output.as_deref(), Some(output.as_path()));
    assert_eq!(pdf::page_count(&output).unwrap(), 2);
    // Page 1 before page 3, in source order.
    assert!(common::page_text(&output, 1).contains("alpha"));
    assert!(common::page_text(&output, 2).contains("gamma"));
}

#[test]
fn aggregates_pages_across_documents() {
    let source = TempDir::new().unwrap();
    common::write_pdf(
        &source.path().join("jan.pdf"),
        &["Acme invoice dated 15/01/2024", "terms and conditions"],
    );
    common::write_pdf(
        &source.path().join("feb.pdf"),
        &["Acme invoice dated 15/02/2024"],
    );
    common::write_pdf(
        &source.path().join("old.pdf"),
        &["Acme invoice dated 15/02/2019"],
    );
    let dest = TempDir::new().unwrap();

    let mut request = page_request(&source, &dest, "acme");
    request.date_range = Some(DateRange::new(
        Some(parse_bound("2024-01-01").unwrap()),
        Some(parse_bound("2024-12-31").unwrap()),
    ));
    let summary = run_scan(&request, &mut NullObserver).unwrap();

    assert_eq!(summary.scanned, 3);
    assert_eq!(summary.extracted, 2);
    assert_eq!(summary.docs_matched, 2);
    assert_eq!(summary.skipped_no_match, 1);
    assert_eq!(summary.skipped_out_of_range, 1);

    let output = dest.path().join("acme_extracted.pdf");
    assert_eq!(pdf::page_count(&output).unwrap(), 2);
    // Documents are visited in filename order: feb.pdf before jan.pdf.
    assert!(common::page_text(&output, 1).contains("15/02/2024"));
    assert!(common::page_text(&output, 2).contains("15/01/2024"));
}

#[test]
fn zero_matches_writes_no_output() {
    let source = TempDir::new().unwrap();
    common::write_pdf(&source.path().join("doc.pdf"), &["nothing relevant here"]);
    let dest = TempDir::new().unwrap();

    let request = page_request(&source, &dest, "acme");
    let summary = run_scan(&request, &mut NullObserver).unwrap();

    assert_eq!(summary.extracted, 0);
    assert_eq!(summary.docs_matched, 0);
    assert!(summary.output.is_none());
    assert!(!dest.path().join("acme_extracted.pdf").exists());
    assert_eq!(std::fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn output_name_comes_from_the_search_term() {
    let source = TempDir::new().unwrap();
    common::write_pdf(&source.path().join("doc.pdf"), &["Acme Corp invoice"]);
    let dest = TempDir::new().unwrap();

    let request = page_request(&source, &dest, "Acme Corp");
    let summary = run_scan(&request, &mut NullObserver).unwrap();

    assert_eq!(output_file_name("Acme Corp"), "acme_corp_extracted.pdf");
    assert!(dest.path().join("acme_corp_extracted.pdf").is_file());
    assert_eq!(summary.extracted, 1);
}

#[test]
fn existing_aggregate_output_is_overwritten() {
    let source = TempDir::new().unwrap();
    common::write_pdf(
        &source.path().join("doc.pdf"),
        &["Acme one", "Acme two", "Acme three"],
    );
    let dest = TempDir::new().unwrap();
    std::fs::write(dest.path().join("acme_extracted.pdf"), b"stale").unwrap();

    let request = page_request(&source, &dest, "acme");
    let summary = run_scan(&request, &mut NullObserver).unwrap();

    assert_eq!(summary.extracted, 3);
    assert_eq!(pdf::page_count(&dest.path().join("acme_extracted.pdf")).unwrap(), 3);
}

#[test]
fn unreadable_document_is_counted_and_skipped() {
    let source = TempDir::new().unwrap();
    common::write_pdf(&source.path().join("good.pdf"), &["Acme statement"]);
    std::fs::write(source.path().join("bad.pdf"), b"not a pdf").unwrap();
    let dest = TempDir::new().unwrap();

    let request = page_request(&source, &dest, "acme");
    let summary = run_scan(&request, &mut NullObserver).unwrap();

    assert_eq!(summary.scanned, 2);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.extracted, 1);
    assert_eq!(pdf::page_count(&dest.path().join("acme_extracted.pdf")).unwrap(), 1);
}
