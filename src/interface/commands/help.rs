//! # Help Command
//!
//! Handles `!help` and any `!`-prefixed text the router does not recognize.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_help(chat: &impl ChatProvider, reply_to: &str) -> Result<()> {
    chat.reply(reply_to, crate::strings::help::MAIN)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_unknown(chat: &impl ChatProvider, reply_to: &str, command: &str) -> Result<()> {
    chat.reply(reply_to, &crate::strings::messages::unknown_command(command))
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
