// Match filter - combines substring search with optional date-range membership
use crate::date_locate::{locate_date, DateRange};

/// Outcome of filtering one document (or one page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Kept,
    NoTextMatch,
    NoDateFound,
    OutOfRange,
}

/// What to do when a date range is active but no date can be located.
///
/// `Exclude` rejects such documents, so an invoice whose date format is not
/// recognized never passes the filter. `Include` keeps them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingDatePolicy {
    #[default]
    Exclude,
    Include,
}

/// Decide whether `text` qualifies for extraction.
///
/// The search term must appear as a case-insensitive substring; when a range
/// is given, a located date must additionally fall inside it (inclusive).
pub fn evaluate(
    text: &str,
    search_term: &str,
    range: Option<&DateRange>,
    missing_date: MissingDatePolicy,
) -> Verdict {
    if !text.to_lowercase().contains(&search_term.to_lowercase()) {
        return Verdict::NoTextMatch;
    }

    let Some(range) = range else {
        return Verdict::Kept;
    };

    match locate_date(text) {
        Some(date) if range.contains(date) => Verdict::Kept,
        Some(_) => Verdict::OutOfRange,
        None => match missing_date {
            MissingDatePolicy::Exclude => Verdict::NoDateFound,
            MissingDatePolicy::Include => Verdict::Kept,
        },
    }
}
