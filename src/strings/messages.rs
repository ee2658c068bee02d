//! # Messages
//!
//! Contains constant strings and format functions for user-facing replies.

use crate::domain::types::DocumentKind;

pub const NO_DATA: &str = "No file or invalid data.";
pub const NO_ENTRIES: &str = "No entries found.";

pub fn list_header(total: usize) -> String {
    format!("Found {total} entries:")
}

pub fn list_overflow(remaining: usize) -> String {
    format!(
        "...and {remaining} more. Use \"!note show <index>\" or \"!solution show <index>\" to view details."
    )
}

pub fn load_failed(file: &str, reason: &str) -> String {
    format!("❗ Cannot load {file}: {reason}")
}

pub fn show_usage(kind: DocumentKind) -> String {
    let word = kind.command_word();
    format!("Usage: `!{word} show <index>` — use index from `!{word} list`.")
}

pub fn not_found(kind: DocumentKind) -> String {
    format!("❗ {} not found.", kind.label())
}

pub fn unknown_command(command: &str) -> String {
    format!("❓ Unknown command \"{command}\". Use `!help` to see available commands.")
}
