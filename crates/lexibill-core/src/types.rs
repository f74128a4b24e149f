use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Transcript
// =============================================================================

/// Who authored a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
    /// Engine-generated notices, e.g. store failures.
    System,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
            Sender::System => write!(f, "system"),
        }
    }
}

/// One immutable line of the conversation transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Text carries markdown emphasis/lists.
    pub is_rich_text: bool,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>, is_rich_text: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
            is_rich_text,
        }
    }
}

// =============================================================================
// Time entries
// =============================================================================

/// Billing category of a time entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Drafting,
    Research,
    Consultation,
    Correspondence,
    Litigation,
    #[default]
    Other,
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskType::Drafting => write!(f, "drafting"),
            TaskType::Research => write!(f, "research"),
            TaskType::Consultation => write!(f, "consultation"),
            TaskType::Correspondence => write!(f, "correspondence"),
            TaskType::Litigation => write!(f, "litigation"),
            TaskType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for TaskType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drafting" => Ok(TaskType::Drafting),
            "research" => Ok(TaskType::Research),
            "consultation" => Ok(TaskType::Consultation),
            "correspondence" => Ok(TaskType::Correspondence),
            "litigation" => Ok(TaskType::Litigation),
            "other" => Ok(TaskType::Other),
            _ => Err(format!("Unknown task type: {}", s)),
        }
    }
}

/// A complete time entry handed to the entry store at session completion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalizedTimeEntry {
    pub id: Uuid,
    pub matter_id: String,
    pub date: NaiveDate,
    pub duration_hours: f64,
    pub description: String,
    pub task_type: TaskType,
}

/// An entry as returned by the store, with the time it was recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedEntry {
    #[serde(flatten)]
    pub entry: FinalizedTimeEntry,
    pub recorded_at: DateTime<Utc>,
}

// =============================================================================
// Reports
// =============================================================================

/// Billing report preview for one matter, handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportPreview {
    pub matter_name: String,
    /// Entries ordered by work date, oldest first.
    pub entries: Vec<PersistedEntry>,
    pub total_hours: f64,
}

impl ReportPreview {
    pub fn new(matter_name: impl Into<String>, mut entries: Vec<PersistedEntry>) -> Self {
        // Stable sort keeps insertion order for entries on the same day.
        entries.sort_by_key(|e| e.entry.date);
        let total_hours = entries.iter().map(|e| e.entry.duration_hours).sum();
        Self {
            matter_name: matter_name.into(),
            entries,
            total_hours,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format an hour quantity for display: `1 hour`, `2.5 hours`.
pub fn format_hours(hours: f64) -> String {
    if hours == 1.0 {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    }
}
