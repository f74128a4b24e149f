//! Conversation flow states.
//!
//! Each [`ChatFlowState`] variant carries exactly what its stage needs, so a
//! stage that expects a draft cannot be entered without one. [`FlowStage`] is
//! the data-free name of a state, used for logging and reporting:
//! - Idle -> AwaitingMatterName (greeting)
//! - AwaitingMatterName -> AwaitingDurationDate (matter accepted)
//! - AwaitingDurationDate -> AwaitingDescription (hours and date parsed)
//! - AwaitingDescription -> AwaitingEntryConfirmation (draft complete)
//! - AwaitingEntryConfirmation -> AwaitingDurationDate (log another entry)
//! - AwaitingDurationDate / AwaitingEntryConfirmation -> AwaitingInvoiceDecision (done)
//! - AwaitingInvoiceDecision -> AwaitingMatterName (yes / no)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::{EntryBuilder, Session};

/// Where the conversation is, plus the draft data that stage owns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ChatFlowState {
    #[default]
    Idle,
    AwaitingMatterName,
    AwaitingDurationDate {
        session: Session,
        builder: EntryBuilder,
    },
    AwaitingDescription {
        session: Session,
        builder: EntryBuilder,
    },
    AwaitingEntryConfirmation {
        session: Session,
        builder: EntryBuilder,
    },
    /// Never entered by the current flow; turns arriving here fall back to
    /// asking for a matter.
    AwaitingEditDescription {
        session: Session,
        builder: EntryBuilder,
    },
    /// The matter whose entries were just saved.
    AwaitingInvoiceDecision { matter: String },
}

impl ChatFlowState {
    pub fn stage(&self) -> FlowStage {
        match self {
            ChatFlowState::Idle => FlowStage::Idle,
            ChatFlowState::AwaitingMatterName => FlowStage::AwaitingMatterName,
            ChatFlowState::AwaitingDurationDate { .. } => FlowStage::AwaitingDurationDate,
            ChatFlowState::AwaitingDescription { .. } => FlowStage::AwaitingDescription,
            ChatFlowState::AwaitingEntryConfirmation { .. } => FlowStage::AwaitingEntryConfirmation,
            ChatFlowState::AwaitingEditDescription { .. } => FlowStage::AwaitingEditDescription,
            ChatFlowState::AwaitingInvoiceDecision { .. } => FlowStage::AwaitingInvoiceDecision,
        }
    }

    /// The open session, if this stage has one.
    pub fn session(&self) -> Option<&Session> {
        match self {
            ChatFlowState::AwaitingDurationDate { session, .. }
            | ChatFlowState::AwaitingDescription { session, .. }
            | ChatFlowState::AwaitingEntryConfirmation { session, .. }
            | ChatFlowState::AwaitingEditDescription { session, .. } => Some(session),
            _ => None,
        }
    }

    /// The current draft, if this stage has one.
    pub fn builder(&self) -> Option<&EntryBuilder> {
        match self {
            ChatFlowState::AwaitingDurationDate { builder, .. }
            | ChatFlowState::AwaitingDescription { builder, .. }
            | ChatFlowState::AwaitingEntryConfirmation { builder, .. }
            | ChatFlowState::AwaitingEditDescription { builder, .. } => Some(builder),
            _ => None,
        }
    }
}

/// Name of a flow state without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowStage {
    Idle,
    AwaitingMatterName,
    AwaitingDurationDate,
    AwaitingDescription,
    AwaitingEntryConfirmation,
    AwaitingEditDescription,
    #[serde(rename = "AWAITING_INVOICE_DECISION_AFTER_DONE")]
    AwaitingInvoiceDecision,
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowStage::Idle => write!(f, "IDLE"),
            FlowStage::AwaitingMatterName => write!(f, "AWAITING_MATTER_NAME"),
            FlowStage::AwaitingDurationDate => write!(f, "AWAITING_DURATION_DATE"),
            FlowStage::AwaitingDescription => write!(f, "AWAITING_DESCRIPTION"),
            FlowStage::AwaitingEntryConfirmation => write!(f, "AWAITING_ENTRY_CONFIRMATION"),
            FlowStage::AwaitingEditDescription => write!(f, "AWAITING_EDIT_DESCRIPTION"),
            FlowStage::AwaitingInvoiceDecision => {
                write!(f, "AWAITING_INVOICE_DECISION_AFTER_DONE")
            }
        }
    }
}

impl FlowStage {
    /// Returns whether the flow may move from `self` to `target`.
    ///
    /// Staying put and falling back to [`FlowStage::AwaitingMatterName`] are
    /// always allowed.
    pub fn can_transition_to(&self, target: &FlowStage) -> bool {
        if self == target || *target == FlowStage::AwaitingMatterName {
            return true;
        }
        matches!(
            (self, target),
            (FlowStage::AwaitingMatterName, FlowStage::AwaitingDurationDate)
                | (FlowStage::AwaitingDurationDate, FlowStage::AwaitingDescription)
                | (FlowStage::AwaitingDescription, FlowStage::AwaitingEntryConfirmation)
                | (FlowStage::AwaitingEntryConfirmation, FlowStage::AwaitingDurationDate)
                // Done
                | (FlowStage::AwaitingDurationDate, FlowStage::AwaitingInvoiceDecision)
                | (FlowStage::AwaitingEntryConfirmation, FlowStage::AwaitingInvoiceDecision)
        )
    }
}
