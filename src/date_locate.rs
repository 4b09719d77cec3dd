// Date location - finds one calendar date in unstructured document text
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Inclusive calendar date range; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { from, until }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |lo| date >= lo) && self.until.map_or(true, |hi| date <= hi)
    }
}

/// One recognized date shape: a regex plus a parser for its captures.
struct DatePattern {
    name: &'static str,
    regex: Regex,
    parse: fn(&Captures) -> Option<NaiveDate>,
}

/// Patterns in priority order. The first pattern that produces a match wins,
/// even when a lower-priority pattern would have matched earlier in the text.
static DATE_PATTERNS: Lazy<Vec<DatePattern>> = Lazy::new(|| {
    vec![
        DatePattern {
            name: "day-month-year",
            regex: Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b").unwrap(),
            parse: parse_dmy,
        },
        DatePattern {
            name: "year-month-day",
            regex: Regex::new(r"\b(\d{4})[/-](\d{1,2})[/-](\d{1,2})\b").unwrap(),
            parse: parse_ymd,
        },
        DatePattern {
            name: "day-monthname-year",
            regex: Regex::new(r"\b(\d{1,2})\s+([A-Za-z]{3,})\.?,?\s+(\d{4})\b").unwrap(),
            parse: parse_day_month_name_year,
        },
    ]
});

const MONTH_PREFIXES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Find one calendar date in `text`, or `None`.
///
/// Only the first regex match of each pattern is considered; a candidate that
/// fails to form a real calendar date (day 32, month 13, unknown month name)
/// discards that whole pattern and the next one is tried.
pub fn locate_date(text: &str) -> Option<NaiveDate> {
    DATE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(text)?;
        let date = (pattern.parse)(&caps);
        log::debug!("pattern {} -> {:?}", pattern.name, date);
        date
    })
}

fn parse_dmy(caps: &Captures) -> Option<NaiveDate> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_ymd(caps: &Captures) -> Option<NaiveDate> {
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_day_month_name_year(caps: &Captures) -> Option<NaiveDate> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month = month_from_name(caps.get(2)?.as_str())?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Month names match on their first three letters, case-insensitively.
fn month_from_name(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    MONTH_PREFIXES
        .iter()
        .position(|candidate| *candidate == prefix)
        .map(|index| index as u32 + 1)
}
