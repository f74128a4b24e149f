//! LexiBill storage crate: entry store adapters.
//!
//! Provides a WAL-mode SQLite store with migrations for durable use and a
//! process-local in-memory store for tests and throwaway sessions.

pub mod db;
pub mod memory;
pub mod migrations;
pub mod repository;

pub use db::Database;
pub use memory::MemoryEntryStore;
pub use repository::SqliteEntryStore;
