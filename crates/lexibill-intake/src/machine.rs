//! The dialogue state machine.
//!
//! [`DialogueMachine::transition`] is pure: given the current state, one
//! utterance, and the reference day, it returns the next state and the
//! [`Effect`]s the engine must carry out. Nothing here touches the store or
//! the transcript.

use chrono::NaiveDate;
use lexibill_core::types::{FinalizedTimeEntry, Sender};
use tracing::debug;

use crate::commands::{self, GlobalCommand, Reply};
use crate::extract::{ExtractContext, Extractors};
use crate::materializer::materialize;
use crate::messages;
use crate::session::{EntryBuilder, Session};
use crate::state::ChatFlowState;

/// A side effect requested by a transition, executed in order by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a message to the transcript.
    Emit {
        sender: Sender,
        text: String,
        rich: bool,
    },
    /// Look up the matter's entries and preview them, or report none found.
    PreviewInvoice { matter: String },
    /// List stored entries plus the given unsaved drafts.
    ShowEntries { pending: Vec<EntryBuilder> },
    /// Store finalized entries for the matter.
    Persist {
        matter: String,
        entries: Vec<FinalizedTimeEntry>,
    },
}

impl Effect {
    fn say(text: impl Into<String>) -> Self {
        Effect::Emit {
            sender: Sender::Bot,
            text: text.into(),
            rich: false,
        }
    }

    fn say_rich(text: impl Into<String>) -> Self {
        Effect::Emit {
            sender: Sender::Bot,
            text: text.into(),
            rich: true,
        }
    }
}

/// Result of one turn: where the flow goes and what must happen on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: ChatFlowState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: ChatFlowState, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }
}

/// Stage-by-stage handling of user turns.
pub struct DialogueMachine {
    extractors: Extractors,
    bot_name: String,
}

impl Default for DialogueMachine {
    fn default() -> Self {
        Self::new(Extractors::default())
    }
}

impl DialogueMachine {
    pub fn new(extractors: Extractors) -> Self {
        Self {
            extractors,
            bot_name: messages::DEFAULT_BOT_NAME.to_string(),
        }
    }

    pub fn with_bot_name(mut self, bot_name: impl Into<String>) -> Self {
        self.bot_name = bot_name.into();
        self
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// The opening turn: welcome the user and ask for a matter.
    pub fn greeting(&self) -> Transition {
        Transition::to(
            ChatFlowState::AwaitingMatterName,
            vec![Effect::say_rich(messages::welcome(&self.bot_name))],
        )
    }

    /// Compute the next state and effects for one utterance.
    pub fn transition(&self, state: &ChatFlowState, input: &str, today: NaiveDate) -> Transition {
        let transition = match commands::parse_global(input) {
            Some(cmd) => self.global(state, cmd),
            None => self.dispatch(state, input, &ExtractContext { today }),
        };
        debug!(
            from = %state.stage(),
            to = %transition.next.stage(),
            effects = transition.effects.len(),
            "Flow transition"
        );
        transition
    }

    // -----------------------------------------------------------------
    // Global commands
    // -----------------------------------------------------------------

    fn global(&self, state: &ChatFlowState, cmd: GlobalCommand) -> Transition {
        let effect = match cmd {
            GlobalCommand::Help => Effect::say_rich(messages::help(&self.bot_name)),
            GlobalCommand::GenerateInvoice(matter) => Effect::PreviewInvoice { matter },
            GlobalCommand::ShowEntries => Effect::ShowEntries {
                pending: pending_drafts(state),
            },
        };
        Transition::to(state.clone(), vec![effect])
    }

    // -----------------------------------------------------------------
    // Per-stage handlers
    // -----------------------------------------------------------------

    fn dispatch(&self, state: &ChatFlowState, input: &str, ctx: &ExtractContext) -> Transition {
        match state {
            ChatFlowState::AwaitingMatterName => self.on_matter_name(input),
            ChatFlowState::AwaitingDurationDate { session, builder } => {
                if let Some(t) = guard_context(session, builder) {
                    return t;
                }
                self.on_duration_date(state, session, builder, input, ctx)
            }
            ChatFlowState::AwaitingDescription { session, builder } => {
                if let Some(t) = guard_context(session, builder) {
                    return t;
                }
                self.on_description(state, session, builder, input, ctx)
            }
            ChatFlowState::AwaitingEntryConfirmation { session, builder } => {
                if let Some(t) = guard_context(session, builder) {
                    return t;
                }
                self.on_confirmation(state, session, builder, input)
            }
            ChatFlowState::AwaitingInvoiceDecision { matter } => {
                self.on_invoice_decision(state, matter, input)
            }
            ChatFlowState::Idle | ChatFlowState::AwaitingEditDescription { .. } => {
                Transition::to(
                    ChatFlowState::AwaitingMatterName,
                    vec![Effect::say_rich(messages::fallback_matter_prompt())],
                )
            }
        }
    }

    fn on_matter_name(&self, input: &str) -> Transition {
        let matter = input.trim();
        if matter.is_empty() {
            return Transition::to(
                ChatFlowState::AwaitingMatterName,
                vec![Effect::say_rich(messages::ask_matter_name())],
            );
        }
        Transition::to(
            ChatFlowState::AwaitingDurationDate {
                session: Session::new(matter),
                builder: EntryBuilder::for_matter(matter),
            },
            vec![Effect::say_rich(messages::ask_duration_date(matter))],
        )
    }

    fn on_duration_date(
        &self,
        state: &ChatFlowState,
        session: &Session,
        builder: &EntryBuilder,
        input: &str,
        ctx: &ExtractContext,
    ) -> Transition {
        if commands::parse_reply(input) == Some(Reply::Done) {
            return finish(session, None);
        }
        match self.extractors.duration_date.try_extract(input, ctx) {
            Ok(dd) => Transition::to(
                ChatFlowState::AwaitingDescription {
                    session: session.clone(),
                    builder: builder.clone().with_duration_date(dd),
                },
                vec![Effect::say_rich(messages::ask_description())],
            ),
            Err(reason) => {
                debug!(%reason, "Duration/date not recognized");
                Transition::to(
                    state.clone(),
                    vec![Effect::say(messages::retry_duration_date(&reason))],
                )
            }
        }
    }

    fn on_description(
        &self,
        state: &ChatFlowState,
        session: &Session,
        builder: &EntryBuilder,
        input: &str,
        ctx: &ExtractContext,
    ) -> Transition {
        // Any text is a description here, including "done".
        let description = match self.extractors.description.try_extract(input, ctx) {
            Ok(d) => d,
            Err(_) => {
                return Transition::to(
                    state.clone(),
                    vec![Effect::say_rich(messages::ask_description())],
                )
            }
        };

        let builder = builder.clone().with_description(description);
        if !builder.is_complete() {
            return Transition::to(state.clone(), vec![Effect::say(messages::redo_description())]);
        }
        let summary = messages::confirmation_summary(&builder);
        Transition::to(
            ChatFlowState::AwaitingEntryConfirmation {
                session: session.clone(),
                builder,
            },
            vec![Effect::say_rich(summary)],
        )
    }

    fn on_confirmation(
        &self,
        state: &ChatFlowState,
        session: &Session,
        builder: &EntryBuilder,
        input: &str,
    ) -> Transition {
        match commands::parse_reply(input) {
            Some(Reply::LogAnother) => {
                let mut session = session.clone();
                if session.push(builder.clone()).is_err() {
                    return Transition::to(
                        ChatFlowState::AwaitingDescription {
                            session,
                            builder: builder.clone(),
                        },
                        vec![Effect::say(messages::redo_description())],
                    );
                }
                let matter = session.matter_id().to_string();
                Transition::to(
                    ChatFlowState::AwaitingDurationDate {
                        builder: EntryBuilder::for_matter(&matter),
                        session,
                    },
                    vec![Effect::say_rich(messages::ask_next_duration_date(&matter))],
                )
            }
            Some(Reply::EditEntry) => {
                Transition::to(state.clone(), vec![Effect::say_rich(messages::edit_not_available())])
            }
            Some(Reply::Done) => finish(session, Some(builder)),
            _ => Transition::to(
                state.clone(),
                vec![Effect::say_rich(messages::confirmation_options())],
            ),
        }
    }

    fn on_invoice_decision(&self, state: &ChatFlowState, matter: &str, input: &str) -> Transition {
        match commands::parse_reply(input) {
            Some(Reply::Yes) => Transition::to(
                ChatFlowState::AwaitingMatterName,
                vec![
                    Effect::PreviewInvoice {
                        matter: matter.to_string(),
                    },
                    Effect::say_rich(messages::next_matter_after_invoice()),
                ],
            ),
            Some(Reply::No) => Transition::to(
                ChatFlowState::AwaitingMatterName,
                vec![Effect::say_rich(messages::invoice_declined())],
            ),
            _ => Transition::to(
                state.clone(),
                vec![Effect::say_rich(messages::invoice_yes_no(matter))],
            ),
        }
    }
}

/// Reset to the matter prompt when a draft has lost its matter.
fn guard_context(session: &Session, builder: &EntryBuilder) -> Option<Transition> {
    if builder.matter_id.as_deref() == Some(session.matter_id()) {
        return None;
    }
    tracing::warn!(
        session_matter = session.matter_id(),
        builder_matter = ?builder.matter_id,
        "Draft matter does not match session, resetting flow"
    );
    Some(Transition::to(
        ChatFlowState::AwaitingMatterName,
        vec![Effect::say_rich(messages::lost_matter_context())],
    ))
}

/// Close the session: keep `current` if it is complete, materialize, and
/// either ask about an invoice or report that nothing was saved.
fn finish(session: &Session, current: Option<&EntryBuilder>) -> Transition {
    let mut session = session.clone();
    if let Some(b) = current.filter(|b| b.is_complete()) {
        // The context guard has already matched the matter.
        let _ = session.push(b.clone());
    }

    let matter = session.matter_id().to_string();
    let entries = materialize(&session);
    if entries.is_empty() {
        return Transition::to(
            ChatFlowState::AwaitingMatterName,
            vec![Effect::say_rich(messages::no_entries_saved(&matter))],
        );
    }

    let count = entries.len();
    Transition::to(
        ChatFlowState::AwaitingInvoiceDecision {
            matter: matter.clone(),
        },
        vec![
            Effect::Persist {
                matter: matter.clone(),
                entries,
            },
            Effect::say_rich(messages::entries_saved(count, &matter)),
        ],
    )
}

/// Unsaved drafts: the session's entries plus the current draft if complete.
fn pending_drafts(state: &ChatFlowState) -> Vec<EntryBuilder> {
    let mut pending: Vec<EntryBuilder> = state
        .session()
        .map(|s| s.entries().to_vec())
        .unwrap_or_default();
    if let Some(b) = state.builder().filter(|b| b.is_complete()) {
        pending.push(b.clone());
    }
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{DurationDate, FieldExtractor, NoMatch};
    use crate::state::FlowStage;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn machine() -> DialogueMachine {
        DialogueMachine::default()
    }

    /// Feed inputs in order starting from `state`, returning every transition.
    fn run(m: &DialogueMachine, mut state: ChatFlowState, inputs: &[&str]) -> (ChatFlowState, Vec<Transition>) {
        let mut all = Vec::new();
        for input in inputs {
            let t = m.transition(&state, input, today());
            state = t.next.clone();
            all.push(t);
        }
        (state, all)
    }

    fn emitted(t: &Transition) -> Vec<&str> {
        t.effects
            .iter()
            .filter_map(|e| match e {
                Effect::Emit { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn confirming(matter: &str) -> ChatFlowState {
        let (state, _) = run(
            &machine(),
            ChatFlowState::AwaitingMatterName,
            &[matter, "2.5 hours on May 29, 2024", "Drafted NDA"],
        );
        state
    }

    // ---- Greeting / fallback ----

    #[test]
    fn test_greeting_moves_to_matter_name() {
        let t = machine().greeting();
        assert_eq!(t.next, ChatFlowState::AwaitingMatterName);
        assert!(emitted(&t)[0].contains("LexiBill AI"));
    }

    #[test]
    fn test_custom_bot_name_in_greeting() {
        let t = machine().with_bot_name("Billy").greeting();
        assert!(emitted(&t)[0].contains("I'm Billy"));
    }

    #[test]
    fn test_idle_falls_back_to_matter_name() {
        let t = machine().transition(&ChatFlowState::Idle, "hello", today());
        assert_eq!(t.next, ChatFlowState::AwaitingMatterName);
        assert!(emitted(&t)[0].contains("Matter Name"));
    }

    #[test]
    fn test_edit_description_state_falls_back() {
        let state = ChatFlowState::AwaitingEditDescription {
            session: Session::new("Acme"),
            builder: EntryBuilder::for_matter("Acme"),
        };
        let t = machine().transition(&state, "new description", today());
        assert_eq!(t.next, ChatFlowState::AwaitingMatterName);
    }

    // ---- Matter name ----

    #[test]
    fn test_matter_name_is_trimmed() {
        let t = machine().transition(&ChatFlowState::AwaitingMatterName, "  Acme Corp  ", today());
        match &t.next {
            ChatFlowState::AwaitingDurationDate { session, builder } => {
                assert_eq!(session.matter_id(), "Acme Corp");
                assert!(session.is_empty());
                assert_eq!(builder, &EntryBuilder::for_matter("Acme Corp"));
            }
            other => panic!("unexpected state: {:?}", other.stage()),
        }
    }

    #[test]
    fn test_blank_matter_name_reprompts() {
        let t = machine().transition(&ChatFlowState::AwaitingMatterName, "   ", today());
        assert_eq!(t.next, ChatFlowState::AwaitingMatterName);
    }

    // ---- Duration / date ----

    #[test]
    fn test_duration_date_sets_builder() {
        let (state, _) = run(
            &machine(),
            ChatFlowState::AwaitingMatterName,
            &["Acme Corp", "2.5 hours on May 29, 2024"],
        );
        assert_eq!(state.stage(), FlowStage::AwaitingDescription);
        let b = state.builder().unwrap();
        assert_eq!(b.duration_hours, Some(2.5));
        assert_eq!(b.date, Some(ymd(2024, 5, 29)));
        assert_eq!(b.description, None);
    }

    #[test]
    fn test_bad_duration_keeps_state_unchanged() {
        let (before, _) = run(&machine(), ChatFlowState::AwaitingMatterName, &["Beta Inc"]);
        let t = machine().transition(&before, "abc", today());
        assert_eq!(t.next, before);
        assert_eq!(t.effects.len(), 1);
        assert!(emitted(&t)[0].contains("2.5 hours on May 25"));
    }

    #[test]
    fn test_invalid_date_keeps_state_unchanged() {
        let (before, _) = run(&machine(), ChatFlowState::AwaitingMatterName, &["Beta Inc"]);
        let t = machine().transition(&before, "2 hours on February 30, 2024", today());
        assert_eq!(t.next, before);
        assert!(emitted(&t)[0].contains("not a valid calendar date"));
    }

    #[test]
    fn test_guard_resets_when_builder_lost_matter() {
        let state = ChatFlowState::AwaitingDurationDate {
            session: Session::new("Acme"),
            builder: EntryBuilder::default(),
        };
        let t = machine().transition(&state, "2 hours", today());
        assert_eq!(t.next, ChatFlowState::AwaitingMatterName);
        assert!(t.effects.iter().all(|e| matches!(e, Effect::Emit { .. })));
    }

    #[test]
    fn test_guard_resets_on_matter_mismatch() {
        let state = ChatFlowState::AwaitingDescription {
            session: Session::new("Acme"),
            builder: EntryBuilder::for_matter("Beta"),
        };
        let t = machine().transition(&state, "Research", today());
        assert_eq!(t.next, ChatFlowState::AwaitingMatterName);
    }

    // ---- Description / confirmation ----

    #[test]
    fn test_description_completes_builder() {
        let state = confirming("Acme Corp");
        assert_eq!(state.stage(), FlowStage::AwaitingEntryConfirmation);
        assert!(state.builder().unwrap().is_complete());
        assert_eq!(
            state.builder().unwrap().description.as_deref(),
            Some("Drafted NDA")
        );
    }

    #[test]
    fn test_description_on_incomplete_builder_asks_to_redo() {
        let state = ChatFlowState::AwaitingDescription {
            session: Session::new("Acme"),
            builder: EntryBuilder::for_matter("Acme"),
        };
        let t = machine().transition(&state, "Drafted NDA", today());
        assert_eq!(t.next, state);
        assert!(emitted(&t)[0].contains("describe the work"));
    }

    #[test]
    fn test_log_another_pushes_and_starts_fresh_builder() {
        let t = machine().transition(&confirming("Acme Corp"), "Log another entry", today());
        match &t.next {
            ChatFlowState::AwaitingDurationDate { session, builder } => {
                assert_eq!(session.len(), 1);
                assert_eq!(builder, &EntryBuilder::for_matter("Acme Corp"));
            }
            other => panic!("unexpected state: {:?}", other.stage()),
        }
    }

    #[test]
    fn test_edit_is_a_stub() {
        let state = confirming("Acme Corp");
        let t = machine().transition(&state, "edit this entry", today());
        assert_eq!(t.next, state);
        assert!(emitted(&t)[0].contains("isn't available yet"));
    }

    #[test]
    fn test_unknown_confirmation_reply_reprompts() {
        let state = confirming("Acme Corp");
        let t = machine().transition(&state, "what now", today());
        assert_eq!(t.next, state);
        assert!(emitted(&t)[0].contains("Log another entry"));
    }

    // ---- Done ----

    #[test]
    fn test_done_persists_then_asks_about_invoice() {
        let t = machine().transition(&confirming("Acme Corp"), "Done", today());
        assert_eq!(
            t.next,
            ChatFlowState::AwaitingInvoiceDecision {
                matter: "Acme Corp".to_string()
            }
        );
        match &t.effects[0] {
            Effect::Persist { matter, entries } => {
                assert_eq!(matter, "Acme Corp");
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].description, "Drafted NDA");
            }
            other => panic!("expected persist first, got {other:?}"),
        }
        assert!(emitted(&t)[0].contains("generate an invoice"));
    }

    #[test]
    fn test_done_during_duration_with_empty_session_saves_nothing() {
        let (state, all) = run(
            &machine(),
            ChatFlowState::AwaitingMatterName,
            &["Acme Corp", "done"],
        );
        assert_eq!(state, ChatFlowState::AwaitingMatterName);
        let last = all.last().unwrap();
        assert!(last.effects.iter().all(|e| !matches!(e, Effect::Persist { .. })));
        assert!(emitted(last)[0].contains("no entries were saved"));
    }

    #[test]
    fn test_done_after_log_another_saves_previous_entries() {
        let (state, all) = run(
            &machine(),
            ChatFlowState::AwaitingMatterName,
            &["Acme Corp", "1 hour", "Call", "log another entry", "done"],
        );
        assert_eq!(state.stage(), FlowStage::AwaitingInvoiceDecision);
        match &all.last().unwrap().effects[0] {
            Effect::Persist { entries, .. } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].description, "Call");
            }
            other => panic!("expected persist, got {other:?}"),
        }
    }

    #[test]
    fn test_done_is_a_valid_description() {
        let (state, all) = run(
            &machine(),
            ChatFlowState::AwaitingMatterName,
            &["Acme Corp", "2 hours", "Done."],
        );
        assert_eq!(state.stage(), FlowStage::AwaitingEntryConfirmation);
        assert_eq!(state.builder().unwrap().description.as_deref(), Some("Done."));
        assert!(all
            .last()
            .unwrap()
            .effects
            .iter()
            .all(|e| !matches!(e, Effect::Persist { .. })));
    }

    // ---- Invoice decision ----

    #[test]
    fn test_invoice_yes_requests_preview() {
        let state = ChatFlowState::AwaitingInvoiceDecision {
            matter: "Acme Corp".to_string(),
        };
        let t = machine().transition(&state, "Yes", today());
        assert_eq!(t.next, ChatFlowState::AwaitingMatterName);
        assert_eq!(
            t.effects[0],
            Effect::PreviewInvoice {
                matter: "Acme Corp".to_string()
            }
        );
    }

    #[test]
    fn test_invoice_no_resets() {
        let state = ChatFlowState::AwaitingInvoiceDecision {
            matter: "Acme Corp".to_string(),
        };
        let t = machine().transition(&state, "no", today());
        assert_eq!(t.next, ChatFlowState::AwaitingMatterName);
        assert!(t.effects.iter().all(|e| matches!(e, Effect::Emit { .. })));
    }

    #[test]
    fn test_invoice_other_reprompts() {
        let state = ChatFlowState::AwaitingInvoiceDecision {
            matter: "Acme Corp".to_string(),
        };
        let t = machine().transition(&state, "perhaps", today());
        assert_eq!(t.next, state);
        assert!(emitted(&t)[0].contains("**yes** or **no**"));
    }

    // ---- Global commands ----

    #[test]
    fn test_help_never_changes_state() {
        let state = confirming("Acme Corp");
        let t = machine().transition(&state, "help", today());
        assert_eq!(t.next, state);
        assert!(emitted(&t)[0].contains("Here's how I can assist"));
    }

    #[test]
    fn test_show_entries_includes_session_and_complete_builder() {
        let (state, _) = run(
            &machine(),
            ChatFlowState::AwaitingMatterName,
            &["Acme Corp", "1 hour", "Call", "log another entry", "2 hours", "Memo"],
        );
        let t = machine().transition(&state, "show entries", today());
        assert_eq!(t.next, state);
        match &t.effects[0] {
            Effect::ShowEntries { pending } => {
                let descs: Vec<_> = pending.iter().filter_map(|b| b.description.as_deref()).collect();
                assert_eq!(descs, vec!["Call", "Memo"]);
            }
            other => panic!("expected show entries, got {other:?}"),
        }
    }

    #[test]
    fn test_show_entries_skips_incomplete_builder() {
        let (state, _) = run(&machine(), ChatFlowState::AwaitingMatterName, &["Acme Corp", "1 hour"]);
        let t = machine().transition(&state, "show entries", today());
        assert_eq!(t.effects, vec![Effect::ShowEntries { pending: vec![] }]);
    }

    #[test]
    fn test_generate_invoice_is_global() {
        let state = confirming("Acme Corp");
        let t = machine().transition(&state, "generate invoice for Gamma", today());
        assert_eq!(t.next, state);
        assert_eq!(
            t.effects,
            vec![Effect::PreviewInvoice {
                matter: "Gamma".to_string()
            }]
        );
    }

    // ---- Strategies ----

    struct AlwaysEightHours;

    impl FieldExtractor for AlwaysEightHours {
        type Field = DurationDate;

        fn try_extract(&self, text: &str, ctx: &ExtractContext) -> Result<DurationDate, NoMatch> {
            if text.contains("full day") {
                Ok(DurationDate {
                    hours: 8.0,
                    date: ctx.today,
                })
            } else {
                Err(NoMatch::MissingHours)
            }
        }
    }

    #[test]
    fn test_replacement_extractor_is_used() {
        let m = DialogueMachine::new(Extractors::default().with_duration_date(AlwaysEightHours));
        let (state, _) = run(&m, ChatFlowState::AwaitingMatterName, &["Acme", "a full day"]);
        let b = state.builder().unwrap();
        assert_eq!(b.duration_hours, Some(8.0));
        assert_eq!(b.date, Some(today()));
    }

    #[test]
    fn test_every_transition_is_allowed() {
        let inputs = [
            "Acme Corp",
            "abc",
            "2.5 hours on May 29, 2024",
            "Drafted NDA",
            "maybe",
            "log another entry",
            "1 hour",
            "Reviewed redlines",
            "done",
            "perhaps",
            "yes",
        ];
        let m = machine();
        let mut state = ChatFlowState::AwaitingMatterName;
        for input in inputs {
            let t = m.transition(&state, input, today());
            assert!(
                state.stage().can_transition_to(&t.next.stage()),
                "{} -> {} on {input:?}",
                state.stage(),
                t.next.stage()
            );
            state = t.next;
        }
        assert_eq!(state, ChatFlowState::AwaitingMatterName);
    }
}
