//! Recognition of command words typed into the chat.
//!
//! Global commands are honoured in every stage and never move the flow.
//! Replies are the fixed answers the confirmation and invoice prompts accept.

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Patterns
// =============================================================================

static INVOICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^generate\s+invoice\s+for\s+(.+)$").expect("Invalid invoice regex")
});

pub(crate) static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Commands available regardless of the current stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalCommand {
    Help,
    /// Preview billing for the named matter.
    GenerateInvoice(String),
    ShowEntries,
}

/// Stage-specific answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    LogAnother,
    EditEntry,
    Done,
    Yes,
    No,
}

/// Trim, drop trailing `.`/`!`, collapse inner whitespace.
pub fn normalize(text: &str) -> String {
    let trimmed = text
        .trim()
        .trim_end_matches(['.', '!'])
        .trim_end();
    WHITESPACE_RE.replace_all(trimmed, " ").into_owned()
}

pub fn parse_global(text: &str) -> Option<GlobalCommand> {
    let norm = normalize(text);

    if let Some(caps) = INVOICE_RE.captures(&norm) {
        let matter = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if !matter.is_empty() {
            return Some(GlobalCommand::GenerateInvoice(matter.to_string()));
        }
    }

    match norm.to_lowercase().as_str() {
        "help" => Some(GlobalCommand::Help),
        "show entries" => Some(GlobalCommand::ShowEntries),
        _ => None,
    }
}

pub fn parse_reply(text: &str) -> Option<Reply> {
    match normalize(text).to_lowercase().as_str() {
        "log another entry" => Some(Reply::LogAnother),
        "edit this entry" => Some(Reply::EditEntry),
        "done" => Some(Reply::Done),
        "yes" => Some(Reply::Yes),
        "no" => Some(Reply::No),
        _ => None,
    }
}
