//! Field extraction from raw utterances.
//!
//! Each extractor turns one chat utterance into a typed field or reports
//! [`NoMatch`]. Extractors are pure and pattern-based; the dialogue machine
//! holds them as replaceable strategies in an [`Extractors`] bundle.

pub mod date_phrase;
pub mod description;
pub mod duration_date;

use chrono::NaiveDate;

pub use date_phrase::DatePhraseResolver;
pub use description::DescriptionExtractor;
pub use duration_date::{DurationDate, DurationDateExtractor};

/// Why an utterance did not yield a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoMatch {
    #[error("no hours quantity found")]
    MissingHours,
    #[error("duration must be greater than zero")]
    NonPositiveDuration,
    #[error("date phrase not recognized: {0}")]
    UnrecognizedDate(String),
    #[error("not a valid calendar date: {0}")]
    InvalidDate(String),
    #[error("input is empty")]
    Empty,
}

/// Per-turn facts an extractor may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractContext {
    pub today: NaiveDate,
}

/// A strategy that pulls one typed field out of free text.
pub trait FieldExtractor: Send + Sync {
    type Field;

    fn try_extract(&self, text: &str, ctx: &ExtractContext) -> Result<Self::Field, NoMatch>;
}

/// The extractor strategies used by the dialogue machine.
pub struct Extractors {
    pub duration_date: Box<dyn FieldExtractor<Field = DurationDate>>,
    pub description: Box<dyn FieldExtractor<Field = String>>,
}

impl Default for Extractors {
    fn default() -> Self {
        Self {
            duration_date: Box::new(DurationDateExtractor::default()),
            description: Box::new(DescriptionExtractor),
        }
    }
}

impl Extractors {
    /// Replace the duration/date strategy.
    pub fn with_duration_date(
        mut self,
        extractor: impl FieldExtractor<Field = DurationDate> + 'static,
    ) -> Self {
        self.duration_date = Box::new(extractor);
        self
    }

    /// Replace the description strategy.
    pub fn with_description(
        mut self,
        extractor: impl FieldExtractor<Field = String> + 'static,
    ) -> Self {
        self.description = Box::new(extractor);
        self
    }
}
