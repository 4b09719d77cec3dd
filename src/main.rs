// pdfsift CLI - scan a folder of PDF invoices and extract the matches
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use pdfsift::{
    config::{parse_bound, ScanMode, ScanRequest},
    run_scan, DateRange, MissingDatePolicy, RunSummary, ScanObserver,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search a folder of PDF invoices and extract the matches")]
struct Args {
    /// Folder containing the PDFs to scan
    source: PathBuf,

    /// Folder that receives the extracted output
    dest: PathBuf,

    /// Customer name or account id to search for (case-insensitive)
    #[arg(short, long)]
    search: String,

    /// Inclusive lower date bound
    #[arg(long, value_name = "YYYY-MM-DD")]
    from: Option<String>,

    /// Inclusive upper date bound
    #[arg(long, value_name = "YYYY-MM-DD")]
    until: Option<String>,

    /// Collect matching pages into one combined PDF instead of copying whole files
    #[arg(long)]
    pages: bool,

    /// Leave files already present in the destination untouched
    #[arg(long)]
    no_overwrite: bool,

    /// Keep documents with no recognizable date when a date range is active
    #[arg(long)]
    keep_undated: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Suppress per-document progress lines
    #[arg(short, long)]
    quiet: bool,
}

struct ConsoleObserver {
    quiet: bool,
}

impl ScanObserver for ConsoleObserver {
    fn on_document(&mut self, index: usize, total: usize, name: &str) {
        if !self.quiet {
            println!("[{}/{}] {}", index, total, display_name(name));
        }
    }
}

/// Truncate long filenames for progress lines.
fn display_name(name: &str) -> String {
    const MAX: usize = 30;
    if name.chars().count() > MAX {
        let head: String = name.chars().take(MAX).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let from = args.from.as_deref().map(parse_bound).transpose()?;
    let until = args.until.as_deref().map(parse_bound).transpose()?;
    let date_range = if from.is_some() || until.is_some() {
        Some(DateRange::new(from, until))
    } else {
        None
    };

    let request = ScanRequest {
        source: args.source.clone(),
        dest: args.dest.clone(),
        search_term: args.search.clone(),
        date_range,
        mode: if args.pages { ScanMode::Pages } else { ScanMode::WholeFile },
        overwrite: !args.no_overwrite,
        missing_date: if args.keep_undated {
            MissingDatePolicy::Include
        } else {
            MissingDatePolicy::Exclude
        },
    };

    let mut observer = ConsoleObserver { quiet: args.quiet || args.json };
    let summary = run_scan(&request, &mut observer)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&summary, &args);
    }

    Ok(())
}

fn print_report(summary: &RunSummary, args: &Args) {
    if summary.scanned == 0 {
        println!("No PDF files found in {}", args.source.display());
        return;
    }

    println!();
    println!("Extraction complete");
    println!("  Scanned:         {} PDFs", summary.scanned);
    if args.pages {
        println!(
            "  Pages extracted: {} (from {} documents)",
            summary.extracted, summary.docs_matched
        );
    } else {
        println!("  Extracted:       {}", summary.extracted);
    }
    println!("  No text match:   {}", summary.skipped_no_match);
    if summary.skipped_out_of_range > 0 || summary.skipped_no_date > 0 {
        println!("  Out of range:    {}", summary.skipped_out_of_range);
        println!("  No date found:   {}", summary.skipped_no_date);
    }
    if summary.skipped_existing > 0 {
        println!("  Already present: {}", summary.skipped_existing);
    }
    println!("  Errors:          {}", summary.errors);

    match &summary.output {
        Some(output) => println!("\n  Output: {}", output.display()),
        None => println!("\n  No matching pages, no output written"),
    }
}
