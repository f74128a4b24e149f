//! Bot copy for the intake conversation.

use lexibill_core::types::{format_hours, PersistedEntry, ReportPreview};

use crate::extract::NoMatch;
use crate::session::EntryBuilder;

pub const DEFAULT_BOT_NAME: &str = "LexiBill AI";

const TAGLINE: &str = "Clarity in Every Bill. Confidence in Every Client.";

const DURATION_EXAMPLE: &str = "\"2.5 hours on May 25\"";

// =============================================================================
// Greeting and help
// =============================================================================

pub fn welcome(bot_name: &str) -> String {
    format!(
        "Hello. I'm {bot_name}, your AI Legal Admin & Billing Assistant.\n\
         {TAGLINE}\n\
         \n\
         To get started, please enter the **Matter Name**.\n\
         \n\
         You can also type:\n\
         * Done - to finish logging entries for the current matter\n\
         * Show entries - to review all logged time\n\
         * Generate invoice for [Matter Name] - to create a billing report\n\
         * Help - to see this message again"
    )
}

pub fn help(bot_name: &str) -> String {
    format!(
        "I'm {bot_name}. Here's how I can assist:\n\
         \n\
         **Logging Time Entries:**\n\
         1. Enter the **Matter Name**.\n\
         2. I'll ask for **hours and date** (e.g., {DURATION_EXAMPLE}).\n\
         3. Then, provide a **description** of the work. Your exact wording is used.\n\
         4. After each entry, you can choose to:\n\
         \x20   * Log another entry (for the same matter)\n\
         \x20   * Edit this entry\n\
         \x20   * Type \"Done\"\n\
         \n\
         **Commands:**\n\
         * **Done**: Finishes logging for the current matter. I'll then ask if you want to generate an invoice.\n\
         * **Show entries**: Displays all time entries logged so far, grouped by matter.\n\
         * **Generate invoice for [Matter Name]**: Shows a preview of the billing report for the specified matter.\n\
         * **Help**: Shows this guide again.\n\
         \n\
         My goal is: {TAGLINE}"
    )
}

// =============================================================================
// Entry prompts
// =============================================================================

pub fn ask_matter_name() -> String {
    "Please enter the **Matter Name** for the time you'd like to log.".to_string()
}

pub fn fallback_matter_prompt() -> String {
    "Let's start fresh. Please enter the **Matter Name**.".to_string()
}

pub fn lost_matter_context() -> String {
    "I lost track of which matter this entry belongs to. Please enter the **Matter Name** again."
        .to_string()
}

pub fn ask_duration_date(matter: &str) -> String {
    format!(
        "Matter: **{matter}**. How many hours did you spend, and on what date? \
         (e.g., {DURATION_EXAMPLE})"
    )
}

pub fn ask_next_duration_date(matter: &str) -> String {
    format!(
        "Logging another entry for **{matter}**. How many hours, and on what date? \
         (e.g., {DURATION_EXAMPLE})"
    )
}

pub fn retry_duration_date(reason: &NoMatch) -> String {
    let detail = match reason {
        NoMatch::InvalidDate(phrase) => format!("\"{phrase}\" is not a valid calendar date."),
        NoMatch::UnrecognizedDate(phrase) => format!("I couldn't understand the date \"{phrase}\"."),
        NoMatch::NonPositiveDuration => "The number of hours must be greater than zero.".to_string(),
        NoMatch::MissingHours | NoMatch::Empty => {
            "I couldn't find the number of hours.".to_string()
        }
    };
    format!("{detail} Please enter the hours and date, e.g., {DURATION_EXAMPLE}.")
}

pub fn ask_description() -> String {
    "Please provide a **description** of the work performed.".to_string()
}

pub fn redo_description() -> String {
    "That entry is missing some details. Please describe the work performed again.".to_string()
}

pub fn confirmation_summary(builder: &EntryBuilder) -> String {
    let matter = builder.matter_id.as_deref().unwrap_or_default();
    let date = builder
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let hours = builder.duration_hours.map(format_hours).unwrap_or_default();
    let description = builder.description.as_deref().unwrap_or_default();
    format!(
        "Here's the entry:\n\
         * **Matter:** {matter}\n\
         * **Date:** {date}\n\
         * **Duration:** {hours}\n\
         * **Description:** {description}\n\
         \n\
         {}",
        confirmation_options()
    )
}

pub fn confirmation_options() -> String {
    "Would you like to **Log another entry**, **Edit this entry**, or type **Done**?".to_string()
}

pub fn edit_not_available() -> String {
    "Editing entries isn't available yet. You can **Log another entry** or type **Done**."
        .to_string()
}

// =============================================================================
// Completion and invoices
// =============================================================================

pub fn entries_saved(count: usize, matter: &str) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    format!(
        "Saved {count} time {noun} for **{matter}**. \
         Would you like to generate an invoice for **{matter}**? (yes/no)"
    )
}

pub fn no_entries_saved(matter: &str) -> String {
    format!(
        "No completed entries for **{matter}**, so no entries were saved. \
         Please enter the **Matter Name** to log time."
    )
}

pub fn invoice_yes_no(matter: &str) -> String {
    format!("Please answer **yes** or **no**: generate an invoice for **{matter}**?")
}

pub fn invoice_declined() -> String {
    "No problem. Please enter the next **Matter Name** when you're ready.".to_string()
}

pub fn next_matter_after_invoice() -> String {
    "When you're ready, enter the next **Matter Name**.".to_string()
}

pub fn preparing_preview(preview: &ReportPreview) -> String {
    let noun = if preview.entries.len() == 1 { "entry" } else { "entries" };
    format!(
        "Preparing billing report preview for **{}**: {} {noun}, {} total.",
        preview.matter_name,
        preview.entries.len(),
        format_hours(preview.total_hours)
    )
}

pub fn no_entries_for_matter(matter: &str) -> String {
    format!("No time entries found for matter \"{matter}\".")
}

pub fn store_failure(action: &str, err: &str) -> String {
    format!("Could not {action}: {err}. Nothing was changed; please try again.")
}

// =============================================================================
// Entry listing
// =============================================================================

struct Line {
    matter: String,
    text: String,
}

/// Render stored entries and unsaved drafts, grouped by matter (ignoring
/// case) in the order each matter first appears.
pub fn render_entries(stored: &[PersistedEntry], pending: &[EntryBuilder]) -> String {
    let mut lines: Vec<Line> = stored
        .iter()
        .map(|p| Line {
            matter: p.entry.matter_id.clone(),
            text: entry_line(p.entry.date, p.entry.duration_hours, &p.entry.description),
        })
        .collect();

    lines.extend(pending.iter().filter_map(|b| {
        Some(Line {
            matter: b.matter_id.clone()?,
            text: format!(
                "{} (not yet saved)",
                entry_line(b.date?, b.duration_hours?, b.description.as_deref()?)
            ),
        })
    }));

    if lines.is_empty() {
        return "No time entries logged yet.".to_string();
    }

    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for line in lines {
        let key = line.matter.to_lowercase();
        match groups.iter_mut().find(|(m, _)| m.to_lowercase() == key) {
            Some((_, items)) => items.push(line.text),
            None => groups.push((line.matter, vec![line.text])),
        }
    }

    let mut out = String::from("**Time entries:**");
    for (matter, items) in groups {
        out.push_str(&format!("\n\n**{matter}**"));
        for item in items {
            out.push_str(&format!("\n* {item}"));
        }
    }
    out
}

fn entry_line(date: chrono::NaiveDate, hours: f64, description: &str) -> String {
    format!("{}: {}, {}", date.format("%Y-%m-%d"), format_hours(hours), description)
}
