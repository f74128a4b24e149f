//! Conversion of a finished session into storable entries.

use lexibill_core::types::{FinalizedTimeEntry, TaskType};
use uuid::Uuid;

use crate::session::Session;

/// Turn every complete draft in `session` into a [`FinalizedTimeEntry`], in
/// the order they were logged. Each entry gets a fresh id and the generic
/// task type; no classification is attempted.
pub fn materialize(session: &Session) -> Vec<FinalizedTimeEntry> {
    session
        .entries()
        .iter()
        .filter_map(|b| {
            Some(FinalizedTimeEntry {
                id: Uuid::new_v4(),
                matter_id: b.matter_id.clone()?,
                date: b.date?,
                duration_hours: b.duration_hours?,
                description: b.description.clone()?,
                task_type: TaskType::Other,
            })
        })
        .collect()
}
