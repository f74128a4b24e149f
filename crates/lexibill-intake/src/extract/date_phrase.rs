//! Date phrase resolution with enumerated fallback rules.
//!
//! Rules are tried in a fixed order so resolution is reproducible:
//! 1. `today` (or an empty phrase)
//! 2. `yesterday`
//! 3. explicit four-digit-year formats (`2024-05-29`, `May 29, 2024`, `29 May 2024`, ...)
//! 4. year-less `Month Day` / `Day Month`, which take the current year
//!
//! A format is only tried when the phrase has its shape, so a calendar error
//! (`February 30`) always comes from a phrase that looked like a date.

use std::sync::LazyLock;

use chrono::format::ParseErrorKind;
use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::NoMatch;
use crate::commands::WHITESPACE_RE;

/// A phrase shape and the formats tried once the shape matches.
///
/// Shapes pin years to four digits; chrono's `%Y` alone would read "24" as
/// the year 24.
struct DateRule {
    shape: Regex,
    formats: &'static [&'static str],
    /// Append the current year before parsing.
    yearless: bool,
}

impl DateRule {
    fn new(shape: &str, formats: &'static [&'static str], yearless: bool) -> Self {
        Self {
            shape: Regex::new(shape).expect("Invalid date shape regex"),
            formats,
            yearless,
        }
    }
}

/// Explicit-year rules first, then year-less ones. `%B` also accepts
/// abbreviated month names when parsing.
static DATE_RULES: LazyLock<Vec<DateRule>> = LazyLock::new(|| {
    vec![
        DateRule::new(r"^\d{4}-\d{1,2}-\d{1,2}$", &["%Y-%m-%d"], false),
        DateRule::new(r"^\d{4}/\d{1,2}/\d{1,2}$", &["%Y/%m/%d"], false),
        DateRule::new(r"^\d{1,2}/\d{1,2}/\d{4}$", &["%m/%d/%Y"], false),
        DateRule::new(r"(?i)^[a-z]+ \d{1,2},? \d{4}$", &["%B %d, %Y", "%B %d %Y"], false),
        DateRule::new(r"(?i)^\d{1,2} [a-z]+,? \d{4}$", &["%d %B %Y", "%d %B, %Y"], false),
        DateRule::new(r"(?i)^[a-z]+ \d{1,2}$", &["%B %d %Y"], true),
        DateRule::new(r"(?i)^\d{1,2} [a-z]+$", &["%d %B %Y"], true),
    ]
});

/// Resolves a free-text date phrase against a reference day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatePhraseResolver;

impl DatePhraseResolver {
    pub fn resolve(&self, phrase: &str, today: NaiveDate) -> Result<NaiveDate, NoMatch> {
        let cleaned = normalize_phrase(phrase);

        match cleaned.to_lowercase().as_str() {
            "" | "today" => return Ok(today),
            "yesterday" => {
                return today
                    .pred_opt()
                    .ok_or_else(|| NoMatch::InvalidDate(phrase.trim().to_string()));
            }
            _ => {}
        }

        let mut out_of_range = false;

        for rule in DATE_RULES.iter().filter(|r| r.shape.is_match(&cleaned)) {
            // Only a phrase with no year of its own gets the current year.
            let input = if rule.yearless {
                format!("{} {}", cleaned, today.year())
            } else {
                cleaned.clone()
            };
            for fmt in rule.formats {
                match NaiveDate::parse_from_str(&input, fmt) {
                    Ok(date) => return Ok(date),
                    Err(e) if is_calendar_error(e.kind()) => out_of_range = true,
                    Err(_) => {}
                }
            }
        }

        let original = phrase.trim().to_string();
        if out_of_range {
            Err(NoMatch::InvalidDate(original))
        } else {
            Err(NoMatch::UnrecognizedDate(original))
        }
    }
}

/// The phrase had the right shape but names a day that does not exist.
fn is_calendar_error(kind: ParseErrorKind) -> bool {
    matches!(kind, ParseErrorKind::OutOfRange | ParseErrorKind::Impossible)
}

/// Trim, collapse whitespace, drop ordinal suffixes and trailing punctuation.
fn normalize_phrase(phrase: &str) -> String {
    let trimmed = phrase
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ','))
        .trim();
    let collapsed = WHITESPACE_RE.replace_all(trimmed, " ");
    ORDINAL_RE.replace_all(&collapsed, "$1").into_owned()
}
