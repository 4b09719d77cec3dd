// PDF services - text extraction and page assembly, all through lopdf
pub mod assemble;
pub mod text;

pub use assemble::PageCollector;
pub use text::{document_text, page_count, LoadedPdf};
