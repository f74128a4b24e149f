//! Terminal adapters: transcript output and report previews on stdout.

use std::io::Write;

use async_trait::async_trait;

use lexibill_core::error::Result;
use lexibill_core::ports::{MessageSink, ReportPresenter};
use lexibill_core::types::{format_hours, ChatMessage, ReportPreview, Sender};

/// Prints bot and system messages. User lines are already on screen.
pub struct StdoutSink {
    bot_name: String,
}

impl StdoutSink {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
        }
    }

    fn render(&self, message: &ChatMessage) -> Option<String> {
        match message.sender {
            Sender::User => None,
            Sender::Bot => Some(format!("{}: {}\n", self.bot_name, message.text)),
            Sender::System => Some(format!("[system] {}\n", message.text)),
        }
    }
}

impl MessageSink for StdoutSink {
    fn emit(&self, message: &ChatMessage) {
        if let Some(text) = self.render(message) {
            let mut out = std::io::stdout().lock();
            // A closed stdout leaves nothing to report to.
            let _ = writeln!(out, "{}", text).and_then(|_| out.flush());
        }
    }
}

/// Prints a plain-text billing report.
#[derive(Default)]
pub struct TerminalPresenter;

#[async_trait]
impl ReportPresenter for TerminalPresenter {
    async fn request_report_preview(&self, preview: ReportPreview) -> Result<()> {
        print_report(&preview)?;
        Ok(())
    }
}

fn print_report(preview: &ReportPreview) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "{}", render_report(preview))?;
    out.flush()
}

/// Billing report for one matter, entries oldest first.
pub fn render_report(preview: &ReportPreview) -> String {
    let mut report = format!("\n=== Billing report: {} ===\n", preview.matter_name);
    if preview.is_empty() {
        report.push_str("No time entries found for this matter.\n");
        return report;
    }
    report.push_str(&format!("{:<12}{:>8}  {}\n", "Date", "Hours", "Description"));
    for p in &preview.entries {
        report.push_str(&format!(
            "{:<12}{:>8}  {}\n",
            p.entry.date.format("%Y-%m-%d"),
            format!("{:.2}", p.entry.duration_hours),
            p.entry.description
        ));
    }
    report.push_str(&format!("Total: {}\n\n", format_hours(preview.total_hours)));
    report
}
