//! Conversational time-entry intake for LexiBill.
//!
//! Collects billable time entries (matter, duration, date, description)
//! through free-text chat turns, accumulates them per matter, and hands the
//! finished session to the entry store.

pub mod commands;
pub mod engine;
pub mod error;
pub mod extract;
pub mod machine;
pub mod materializer;
pub mod messages;
pub mod session;
pub mod state;

pub use engine::{IntakeEngine, TurnOutcome};
pub use error::IntakeError;
pub use extract::{
    DatePhraseResolver, DescriptionExtractor, DurationDate, DurationDateExtractor,
    ExtractContext, Extractors, FieldExtractor, NoMatch,
};
pub use machine::{DialogueMachine, Effect, Transition};
pub use materializer::materialize;
pub use session::{EntryBuilder, Session};
pub use state::{ChatFlowState, FlowStage};
