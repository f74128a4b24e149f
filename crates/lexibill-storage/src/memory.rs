//! Process-local entry store. Contents are lost when the process exits.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use lexibill_core::error::{LexiBillError, Result};
use lexibill_core::ports::EntryStore;
use lexibill_core::types::{FinalizedTimeEntry, PersistedEntry};

#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: Mutex<Vec<PersistedEntry>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot<F>(&self, keep: F) -> Result<Vec<PersistedEntry>>
    where
        F: Fn(&PersistedEntry) -> bool,
    {
        let entries = self
            .entries
            .lock()
            .map_err(|e| LexiBillError::Storage(format!("entry store lock poisoned: {}", e)))?;
        Ok(entries.iter().filter(|e| keep(e)).cloned().collect())
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn lookup_entries_for_matter(&self, matter_name: &str) -> Result<Vec<PersistedEntry>> {
        let wanted = matter_name.trim().to_lowercase();
        self.snapshot(|p| p.entry.matter_id.to_lowercase() == wanted)
    }

    async fn list_entries(&self) -> Result<Vec<PersistedEntry>> {
        self.snapshot(|_| true)
    }

    async fn append_finalized_entries(&self, entries: Vec<FinalizedTimeEntry>) -> Result<()> {
        let recorded_at = Utc::now();
        let mut stored = self
            .entries
            .lock()
            .map_err(|e| LexiBillError::Storage(format!("entry store lock poisoned: {}", e)))?;
        stored.extend(
            entries
                .into_iter()
                .map(|entry| PersistedEntry { entry, recorded_at }),
        );
        Ok(())
    }
}
