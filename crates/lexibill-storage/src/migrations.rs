//! Database schema migrations.

use rusqlite::Connection;
use tracing::info;

use lexibill_core::error::LexiBillError;

/// Run all pending database migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), LexiBillError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| LexiBillError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| LexiBillError::Storage(format!("Failed to query migration version: {}", e)))?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: time_entries");
    }

    Ok(())
}

/// Version 1: time entries.
///
/// `seq` keeps insertion order; `matter_id` compares without case.
fn apply_v1(conn: &Connection) -> Result<(), LexiBillError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS time_entries (
            seq             INTEGER PRIMARY KEY AUTOINCREMENT,
            id              TEXT NOT NULL UNIQUE,
            matter_id       TEXT NOT NULL COLLATE NOCASE,
            date            TEXT NOT NULL,
            duration_hours  REAL NOT NULL CHECK (duration_hours > 0),
            description     TEXT NOT NULL,
            task_type       TEXT NOT NULL DEFAULT 'other'
                            CHECK (task_type IN ('drafting', 'research', 'consultation',
                                                 'correspondence', 'litigation', 'other')),
            recorded_at     INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_entries_matter
            ON time_entries (matter_id, seq);

        INSERT INTO schema_migrations (version, name) VALUES (1, 'time_entries');
        ",
    )
    .map_err(|e| LexiBillError::Storage(format!("Failed to apply migration v1: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_record_version() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let versions: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(versions, 1);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let result = conn.execute(
            "INSERT INTO time_entries (id, matter_id, date, duration_hours, description, recorded_at)
             VALUES ('a', 'Acme', '2024-05-29', 0, 'x', 0)",
            [],
        );
        assert!(result.is_err());
    }
}
