//! Collaborator interfaces the intake engine consumes.
//!
//! Persistence, report presentation, and transcript display live outside the
//! intake core; hosts plug them in through these traits.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ChatMessage, FinalizedTimeEntry, PersistedEntry, ReportPreview};

/// Durable storage for finalized time entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All entries whose matter matches `matter_name`, ignoring case, in
    /// insertion order.
    async fn lookup_entries_for_matter(&self, matter_name: &str) -> Result<Vec<PersistedEntry>>;

    /// Every stored entry, in insertion order.
    async fn list_entries(&self) -> Result<Vec<PersistedEntry>>;

    /// Persist entries in the given order. Either all are stored or an error
    /// is returned and none are.
    async fn append_finalized_entries(&self, entries: Vec<FinalizedTimeEntry>) -> Result<()>;
}

/// Presentation layer that renders billing report previews.
#[async_trait]
pub trait ReportPresenter: Send + Sync {
    async fn request_report_preview(&self, preview: ReportPreview) -> Result<()>;
}

/// Receives every transcript message as it is appended.
pub trait MessageSink: Send + Sync {
    fn emit(&self, message: &ChatMessage);
}
