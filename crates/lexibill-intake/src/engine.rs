//! Turn engine: runs one conversation against the store and presenter.
//!
//! The engine owns the flow state and the transcript. Each turn is
//! validated, recorded, handed to the [`DialogueMachine`], and the resulting
//! effects are executed in order. If an effect fails, the remaining effects
//! are skipped, a system message explains the failure, and the previous state
//! is kept so the user can retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use lexibill_core::config::IntakeConfig;
use lexibill_core::ports::{EntryStore, MessageSink, ReportPresenter};
use lexibill_core::types::{ChatMessage, ReportPreview, Sender};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::IntakeError;
use crate::extract::Extractors;
use crate::machine::{DialogueMachine, Effect, Transition};
use crate::messages;
use crate::state::{ChatFlowState, FlowStage};

/// Default maximum user message length in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Messages appended during one turn and the stage the flow ended in.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub messages: Vec<ChatMessage>,
    pub stage: FlowStage,
}

/// An effect that could not be carried out.
struct FailedEffect {
    action: String,
    error: IntakeError,
}

/// Clears the processing flag when the turn ends, however it ends.
struct ProcessingGuard<'a>(&'a AtomicBool);

impl<'a> ProcessingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One intake conversation.
pub struct IntakeEngine {
    machine: DialogueMachine,
    store: Arc<dyn EntryStore>,
    presenter: Arc<dyn ReportPresenter>,
    sink: Option<Arc<dyn MessageSink>>,
    state: Mutex<ChatFlowState>,
    transcript: Mutex<Vec<ChatMessage>>,
    processing: AtomicBool,
    fixed_today: Option<NaiveDate>,
    max_message_length: usize,
}

impl IntakeEngine {
    pub fn new(store: Arc<dyn EntryStore>, presenter: Arc<dyn ReportPresenter>) -> Self {
        Self {
            machine: DialogueMachine::default(),
            store,
            presenter,
            sink: None,
            state: Mutex::new(ChatFlowState::Idle),
            transcript: Mutex::new(Vec::new()),
            processing: AtomicBool::new(false),
            fixed_today: None,
            max_message_length: MAX_MESSAGE_LENGTH,
        }
    }

    /// Build an engine using the `[intake]` config section.
    pub fn from_config(
        config: &IntakeConfig,
        store: Arc<dyn EntryStore>,
        presenter: Arc<dyn ReportPresenter>,
    ) -> Self {
        Self::new(store, presenter)
            .with_machine(DialogueMachine::new(Extractors::default()).with_bot_name(&config.bot_name))
            .with_max_message_length(config.max_message_length)
    }

    pub fn with_machine(mut self, machine: DialogueMachine) -> Self {
        self.machine = machine;
        self
    }

    /// Mirror every transcript message to `sink` as it is appended.
    pub fn with_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Resolve relative dates against `today` instead of the local clock.
    pub fn with_fixed_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub fn with_max_message_length(mut self, max: usize) -> Self {
        self.max_message_length = max;
        self
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub async fn stage(&self) -> FlowStage {
        self.state.lock().await.stage()
    }

    pub async fn state(&self) -> ChatFlowState {
        self.state.lock().await.clone()
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.clone()
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    // -----------------------------------------------------------------
    // Turns
    // -----------------------------------------------------------------

    /// Greet the user. Moves an idle conversation to the matter prompt; any
    /// other state is left alone.
    pub async fn start(&self) -> Result<TurnOutcome, IntakeError> {
        let _guard = ProcessingGuard::acquire(&self.processing).ok_or(IntakeError::Busy)?;
        let mut state = self.state.lock().await;
        let mut out = Vec::new();

        let mut greeting = self.machine.greeting();
        if *state != ChatFlowState::Idle {
            greeting.next = state.clone();
        }
        self.commit(&mut state, greeting, &mut out).await;

        Ok(TurnOutcome {
            messages: out,
            stage: state.stage(),
        })
    }

    /// Process one user utterance.
    ///
    /// Empty and over-long messages are rejected without being recorded, as
    /// is a turn that arrives while another is still running.
    pub async fn handle_turn(&self, text: &str) -> Result<TurnOutcome, IntakeError> {
        if text.trim().is_empty() {
            return Err(IntakeError::EmptyMessage);
        }
        if text.chars().count() > self.max_message_length {
            return Err(IntakeError::MessageTooLong(self.max_message_length));
        }

        let _guard = ProcessingGuard::acquire(&self.processing).ok_or(IntakeError::Busy)?;
        let mut state = self.state.lock().await;
        let mut out = Vec::new();

        self.record(&mut out, ChatMessage::new(Sender::User, text, false))
            .await;

        let transition = self.machine.transition(&state, text, self.today());
        self.commit(&mut state, transition, &mut out).await;

        Ok(TurnOutcome {
            messages: out,
            stage: state.stage(),
        })
    }

    /// Drop any open session and draft and ask for a matter again.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        info!(from = %state.stage(), "Intake flow reset");
        *state = ChatFlowState::AwaitingMatterName;
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run the effects and adopt the next state only if all of them succeed.
    async fn commit(
        &self,
        state: &mut ChatFlowState,
        transition: Transition,
        out: &mut Vec<ChatMessage>,
    ) {
        match self.run_effects(transition.effects, out).await {
            Ok(()) => {
                if let ChatFlowState::AwaitingDurationDate { session, .. } = &transition.next {
                    if state.stage() == FlowStage::AwaitingMatterName {
                        info!(matter = session.matter_id(), "Session started");
                    }
                }
                *state = transition.next;
            }
            Err(failed) => {
                warn!(
                    action = %failed.action,
                    error = %failed.error,
                    stage = %state.stage(),
                    "Effect failed, keeping previous state"
                );
                let text = messages::store_failure(&failed.action, &failed.error.to_string());
                self.record(out, ChatMessage::new(Sender::System, text, false))
                    .await;
            }
        }
    }

    async fn run_effects(
        &self,
        effects: Vec<Effect>,
        out: &mut Vec<ChatMessage>,
    ) -> Result<(), FailedEffect> {
        for effect in effects {
            match effect {
                Effect::Emit { sender, text, rich } => {
                    self.record(out, ChatMessage::new(sender, text, rich)).await;
                }
                Effect::PreviewInvoice { matter } => {
                    self.preview_invoice(&matter, out).await?;
                }
                Effect::ShowEntries { pending } => {
                    let stored = self
                        .store
                        .list_entries()
                        .await
                        .map_err(|e| failed("list time entries", e.into()))?;
                    let text = messages::render_entries(&stored, &pending);
                    self.record(out, ChatMessage::new(Sender::Bot, text, true))
                        .await;
                }
                Effect::Persist { matter, entries } => {
                    let count = entries.len();
                    self.store
                        .append_finalized_entries(entries)
                        .await
                        .map_err(|e| failed(&format!("save entries for {matter}"), e.into()))?;
                    info!(matter = %matter, count, "Materialized session entries");
                }
            }
        }
        Ok(())
    }

    async fn preview_invoice(
        &self,
        matter: &str,
        out: &mut Vec<ChatMessage>,
    ) -> Result<(), FailedEffect> {
        let entries = self
            .store
            .lookup_entries_for_matter(matter)
            .await
            .map_err(|e| failed(&format!("look up entries for {matter}"), e.into()))?;

        if entries.is_empty() {
            let text = messages::no_entries_for_matter(matter);
            self.record(out, ChatMessage::new(Sender::Bot, text, false))
                .await;
            return Ok(());
        }

        let preview = ReportPreview::new(matter, entries);
        let text = messages::preparing_preview(&preview);
        self.record(out, ChatMessage::new(Sender::Bot, text, true))
            .await;
        info!(
            matter = %matter,
            entries = preview.entries.len(),
            total_hours = preview.total_hours,
            "Requesting report preview"
        );
        self.presenter
            .request_report_preview(preview)
            .await
            .map_err(|e| failed(&format!("preview the report for {matter}"), e.into()))
    }

    async fn record(&self, out: &mut Vec<ChatMessage>, message: ChatMessage) {
        if let Some(sink) = &self.sink {
            sink.emit(&message);
        }
        self.transcript.lock().await.push(message.clone());
        out.push(message);
    }
}

fn failed(action: &str, error: IntakeError) -> FailedEffect {
    FailedEffect {
        action: action.to_string(),
        error,
    }
}
