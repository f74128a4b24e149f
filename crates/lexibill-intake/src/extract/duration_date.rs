use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::{DatePhraseResolver, ExtractContext, FieldExtractor, NoMatch};

/// Hours quantity followed by an hour unit, optionally trailed by `on <date>`.
/// The number must open the text or follow whitespace so `x2h` is ignored.
static HOURS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)(\d+(?:\.\d+)?|\.\d+)\s*(?:hours?|hrs?|h)\b(?:\s+on\s+(.+))?")
        .expect("Invalid hours regex")
});

/// Hours worked and the day the work happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationDate {
    pub hours: f64,
    pub date: NaiveDate,
}

/// Pulls `2.5 hours on May 29, 2024` style phrases apart. A missing date
/// clause means today.
#[derive(Debug, Clone, Default)]
pub struct DurationDateExtractor {
    resolver: DatePhraseResolver,
}

impl DurationDateExtractor {
    pub fn new(resolver: DatePhraseResolver) -> Self {
        Self { resolver }
    }
}

impl FieldExtractor for DurationDateExtractor {
    type Field = DurationDate;

    fn try_extract(&self, text: &str, ctx: &ExtractContext) -> Result<DurationDate, NoMatch> {
        let caps = HOURS_RE.captures(text.trim()).ok_or(NoMatch::MissingHours)?;

        let hours: f64 = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or(NoMatch::MissingHours)?;
        if !hours.is_finite() || hours <= 0.0 {
            return Err(NoMatch::NonPositiveDuration);
        }

        let date = match caps.get(2) {
            Some(phrase) => self.resolver.resolve(phrase.as_str(), ctx.today)?,
            None => ctx.today,
        };

        Ok(DurationDate { hours, date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ExtractContext {
        ExtractContext {
            today: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn extract(text: &str) -> Result<DurationDate, NoMatch> {
        DurationDateExtractor::default().try_extract(text, &ctx())
    }

    #[test]
    fn test_hours_with_explicit_date() {
        let dd = extract("2.5 hours on May 29, 2024").unwrap();
        assert_eq!(dd.hours, 2.5);
        assert_eq!(dd.date, ymd(2024, 5, 29));
    }

    #[test]
    fn test_hours_without_date_defaults_to_today() {
        let dd = extract("3 hours").unwrap();
        assert_eq!(dd.hours, 3.0);
        assert_eq!(dd.date, ctx().today);
    }

    #[test]
    fn test_unit_spellings() {
        for text in ["1.5h", "1.5 h", "1.5 hr", "1.5 hrs", "1.5 hour", "1.5 Hours", "1.5HRS"] {
            let dd = extract(text).unwrap_or_else(|e| panic!("{text}: {e}"));
            assert_eq!(dd.hours, 1.5, "{text}");
        }
    }

    #[test]
    fn test_leading_decimal_point() {
        assert_eq!(extract(".5 hours").unwrap().hours, 0.5);
    }

    #[test]
    fn test_hours_inside_sentence() {
        let dd = extract("I spent 4 hours on yesterday").unwrap();
        assert_eq!(dd.hours, 4.0);
        assert_eq!(dd.date, ymd(2025, 3, 9));
    }

    #[test]
    fn test_year_less_date_takes_current_year() {
        let dd = extract("2.5 hours on May 25").unwrap();
        assert_eq!(dd.date, ymd(2025, 5, 25));
    }

    #[test]
    fn test_missing_hours() {
        assert_eq!(extract("sometime last week"), Err(NoMatch::MissingHours));
        assert_eq!(extract("hours on Monday"), Err(NoMatch::MissingHours));
        assert_eq!(extract(""), Err(NoMatch::MissingHours));
    }

    #[test]
    fn test_number_glued_to_word_is_ignored() {
        assert_eq!(extract("ref x2h"), Err(NoMatch::MissingHours));
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(extract("0 hours"), Err(NoMatch::NonPositiveDuration));
        assert_eq!(extract("0.0 hrs on today"), Err(NoMatch::NonPositiveDuration));
    }

    #[test]
    fn test_bad_date_clause() {
        assert!(matches!(
            extract("2 hours on February 30, 2024"),
            Err(NoMatch::InvalidDate(_))
        ));
        assert!(matches!(
            extract("2 hours on the twelfth of never"),
            Err(NoMatch::UnrecognizedDate(_))
        ));
    }
}
