// pdfsift - search-driven extraction from folders of PDF invoices
pub mod config;
pub mod date_locate;
pub mod matcher;
pub mod pdf;
pub mod scanner;
pub mod types;

pub use config::{ScanMode, ScanRequest};
pub use date_locate::{locate_date, DateRange};
pub use matcher::{MissingDatePolicy, Verdict};
pub use scanner::{output_file_name, run_scan, NullObserver, ScanObserver};
pub use types::{Result, RunSummary, SiftError};
