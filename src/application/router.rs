//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `!note show 2`) and dispatches it with the necessary context.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{DocumentKind, IncomingMessage};
use crate::interface::commands;
use crate::strings::logs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List(DocumentKind),
    /// `index` is `None` when the argument is missing or not numeric.
    Show {
        kind: DocumentKind,
        index: Option<i64>,
    },
    /// Any other `!`-prefixed text, trimmed.
    Unknown(String),
}

impl Command {
    /// Parses a chat message. Returns `None` for text that is not a command
    /// at all (no leading `!`), which the bot ignores.
    pub fn parse(message: &str) -> Option<Self> {
        let trimmed = message.trim();
        let lower = trimmed.to_lowercase();

        match lower.as_str() {
            "!help" => return Some(Command::Help),
            "!note list" => return Some(Command::List(DocumentKind::Note)),
            "!solution list" => return Some(Command::List(DocumentKind::Solution)),
            _ => {}
        }

        for kind in [DocumentKind::Note, DocumentKind::Solution] {
            if lower.starts_with(&format!("!{} show", kind.command_word())) {
                let index = trimmed.split_whitespace().nth(2).and_then(parse_leading_int);
                return Some(Command::Show { kind, index });
            }
        }

        trimmed
            .starts_with('!')
            .then(|| Command::Unknown(trimmed.to_string()))
    }
}

/// Reads the integer at the start of `token`: an optional sign followed by
/// ASCII digits, ignoring whatever comes after (`"3abc"` is 3).
fn parse_leading_int(token: &str) -> Option<i64> {
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    // Too many digits to fit is still a number, just one that never matches a section.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

pub struct CommandRouter {
    config: Arc<AppConfig>,
}

impl CommandRouter {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub async fn route<C>(&self, chat: &C, message: &IncomingMessage) -> Result<()>
    where
        C: ChatProvider,
    {
        let Some(command) = Command::parse(&message.body) else {
            return Ok(());
        };

        tracing::info!(
            "Router dispatching {:?} sender='{}' room='{}'",
            command,
            message.sender,
            chat.room_id()
        );

        let reply_to = message.event_id.as_str();
        let documents = &self.config.documents;

        match command {
            Command::Help => commands::help::handle_help(chat, reply_to).await,
            Command::List(kind) => {
                commands::documents::handle_list(documents, chat, reply_to, kind).await
            }
            Command::Show { kind, index } => {
                commands::documents::handle_show(documents, chat, reply_to, kind, index).await
            }
            Command::Unknown(text) => commands::help::handle_unknown(chat, reply_to, &text).await,
        }
    }

    /// Per-message error boundary. Routes `message` on its own task so that
    /// neither an error nor a panic reaches the caller's event loop.
    pub async fn handle<C>(self: Arc<Self>, chat: C, message: IncomingMessage)
    where
        C: ChatProvider + 'static,
    {
        let task = tokio::spawn(async move { self.route(&chat, &message).await });
        match task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("{}", logs::handler_error(&format!("{e:#}"))),
            Err(e) => tracing::error!("{}", logs::handler_error(&e.to_string())),
        }
    }
}
