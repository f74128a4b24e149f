//! SQLite-backed entry store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use tracing::debug;
use uuid::Uuid;

use lexibill_core::error::{LexiBillError, Result};
use lexibill_core::ports::EntryStore;
use lexibill_core::types::{FinalizedTimeEntry, PersistedEntry, TaskType};

use crate::db::Database;

const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_COLUMNS: &str =
    "SELECT id, matter_id, date, duration_hours, description, task_type, recorded_at
     FROM time_entries";

/// Entry store persisting to the `time_entries` table.
pub struct SqliteEntryStore {
    db: Arc<Database>,
}

impl SqliteEntryStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Number of stored entries.
    pub fn count(&self) -> Result<u64> {
        self.db.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))
                .map_err(|e| LexiBillError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }

    fn query_entries(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<PersistedEntry>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(sql)
                .map_err(|e| LexiBillError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map(params, |row| Ok(row_to_entry(row)))
                .map_err(|e| LexiBillError::Storage(e.to_string()))?;

            let mut entries = Vec::new();
            for row in rows {
                let entry = row.map_err(|e| LexiBillError::Storage(e.to_string()))??;
                entries.push(entry);
            }
            Ok(entries)
        })
    }
}

#[async_trait]
impl EntryStore for SqliteEntryStore {
    async fn lookup_entries_for_matter(&self, matter_name: &str) -> Result<Vec<PersistedEntry>> {
        let sql = format!("{SELECT_COLUMNS} WHERE matter_id = ?1 ORDER BY seq");
        self.query_entries(&sql, &[&matter_name.trim()])
    }

    async fn list_entries(&self) -> Result<Vec<PersistedEntry>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY seq");
        self.query_entries(&sql, &[])
    }

    async fn append_finalized_entries(&self, entries: Vec<FinalizedTimeEntry>) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let recorded_at = Utc::now().timestamp_millis();

        self.db.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| LexiBillError::Storage(format!("Failed to begin transaction: {}", e)))?;
            {
                let mut stmt = tx
                    .prepare(
                        "INSERT INTO time_entries (id, matter_id, date, duration_hours, description, task_type, recorded_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    )
                    .map_err(|e| LexiBillError::Storage(e.to_string()))?;

                for entry in &entries {
                    stmt.execute(rusqlite::params![
                        entry.id.to_string(),
                        entry.matter_id,
                        entry.date.format(DATE_FORMAT).to_string(),
                        entry.duration_hours,
                        entry.description,
                        entry.task_type.to_string(),
                        recorded_at,
                    ])
                    .map_err(|e| LexiBillError::Storage(format!("Failed to save time entry: {}", e)))?;
                }
            }
            tx.commit()
                .map_err(|e| LexiBillError::Storage(format!("Failed to commit time entries: {}", e)))?;
            Ok(())
        })?;

        debug!(count = entries.len(), "Stored time entries");
        Ok(())
    }
}

// ============================================================================
// Row conversion
// ============================================================================

fn row_to_entry(row: &rusqlite::Row<'_>) -> Result<PersistedEntry> {
    let id_str: String = row.get(0).map_err(|e| LexiBillError::Storage(e.to_string()))?;
    let matter_id: String = row.get(1).map_err(|e| LexiBillError::Storage(e.to_string()))?;
    let date_str: String = row.get(2).map_err(|e| LexiBillError::Storage(e.to_string()))?;
    let duration_hours: f64 = row.get(3).map_err(|e| LexiBillError::Storage(e.to_string()))?;
    let description: String = row.get(4).map_err(|e| LexiBillError::Storage(e.to_string()))?;
    let task_type_str: String = row.get(5).map_err(|e| LexiBillError::Storage(e.to_string()))?;
    let recorded_at_ms: i64 = row.get(6).map_err(|e| LexiBillError::Storage(e.to_string()))?;

    Ok(PersistedEntry {
        entry: FinalizedTimeEntry {
            id: Uuid::parse_str(&id_str)
                .map_err(|e| LexiBillError::Storage(format!("Invalid UUID: {}", e)))?,
            matter_id,
            date: NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
                .map_err(|e| LexiBillError::Storage(format!("Invalid date '{}': {}", date_str, e)))?,
            duration_hours,
            description,
            task_type: task_type_str
                .parse::<TaskType>()
                .map_err(LexiBillError::Storage)?,
        },
        recorded_at: Utc
            .timestamp_millis_opt(recorded_at_ms)
            .single()
            .ok_or_else(|| {
                LexiBillError::Storage(format!("Invalid recorded_at timestamp: {}", recorded_at_ms))
            })?,
    })
}
