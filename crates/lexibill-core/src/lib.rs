//! Shared domain types, ports, errors, and configuration for LexiBill.

pub mod config;
pub mod error;
pub mod ports;
pub mod types;

pub use config::LexiBillConfig;
pub use error::{LexiBillError, Result};
pub use ports::{EntryStore, MessageSink, ReportPresenter};
pub use types::*;
