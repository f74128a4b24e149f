//! Draft entries and the per-matter session that accumulates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::extract::DurationDate;

/// A partially filled time entry.
///
/// Fields fill in the order matter, duration/date, description. The builder
/// is complete once the last three are all set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryBuilder {
    pub matter_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
    pub description: Option<String>,
}

impl EntryBuilder {
    /// An empty draft bound to `matter_id`.
    pub fn for_matter(matter_id: impl Into<String>) -> Self {
        Self {
            matter_id: Some(matter_id.into()),
            ..Self::default()
        }
    }

    pub fn with_duration_date(mut self, dd: DurationDate) -> Self {
        self.date = Some(dd.date);
        self.duration_hours = Some(dd.hours);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.duration_hours.is_some() && self.description.is_some()
    }
}

/// Completed drafts for one matter, in the order they were logged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    matter_id: String,
    entries: Vec<EntryBuilder>,
}

impl Session {
    pub fn new(matter_id: impl Into<String>) -> Self {
        Self {
            matter_id: matter_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn matter_id(&self) -> &str {
        &self.matter_id
    }

    pub fn entries(&self) -> &[EntryBuilder] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a finished draft. Incomplete drafts and drafts for another
    /// matter are refused.
    pub fn push(&mut self, builder: EntryBuilder) -> Result<(), IntakeError> {
        if !builder.is_complete() {
            return Err(IntakeError::IncompleteEntry);
        }
        match builder.matter_id.as_deref() {
            Some(m) if m == self.matter_id => {}
            other => {
                return Err(IntakeError::MatterMismatch {
                    expected: self.matter_id.clone(),
                    found: other.unwrap_or_default().to_string(),
                });
            }
        }
        self.entries.push(builder);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(matter: &str) -> EntryBuilder {
        EntryBuilder::for_matter(matter)
            .with_duration_date(DurationDate {
                hours: 2.5,
                date: NaiveDate::from_ymd_opt(2024, 5, 29).unwrap(),
            })
            .with_description("Drafted NDA")
    }

    #[test]
    fn test_builder_completeness() {
        let b = EntryBuilder::for_matter("Acme Corp");
        assert_eq!(b.matter_id.as_deref(), Some("Acme Corp"));
        assert!(!b.is_complete());

        let b = b.with_duration_date(DurationDate {
            hours: 1.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 29).unwrap(),
        });
        assert!(!b.is_complete());

        let b = b.with_description("Call");
        assert!(b.is_complete());
    }

    #[test]
    fn test_session_push_complete() {
        let mut s = Session::new("Acme Corp");
        assert!(s.is_empty());
        s.push(complete("Acme Corp")).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.entries()[0].description.as_deref(), Some("Drafted NDA"));
    }

    #[test]
    fn test_session_rejects_incomplete() {
        let mut s = Session::new("Acme Corp");
        let err = s.push(EntryBuilder::for_matter("Acme Corp")).unwrap_err();
        assert!(matches!(err, IntakeError::IncompleteEntry));
        assert!(s.is_empty());
    }

    #[test]
    fn test_session_rejects_foreign_matter() {
        let mut s = Session::new("Acme Corp");
        let err = s.push(complete("Beta Inc")).unwrap_err();
        match err {
            IntakeError::MatterMismatch { expected, found } => {
                assert_eq!(expected, "Acme Corp");
                assert_eq!(found, "Beta Inc");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(s.is_empty());
    }

    #[test]
    fn test_session_rejects_builder_without_matter() {
        let mut s = Session::new("Acme Corp");
        let mut b = complete("Acme Corp");
        b.matter_id = None;
        assert!(matches!(
            s.push(b),
            Err(IntakeError::MatterMismatch { .. })
        ));
    }
}
