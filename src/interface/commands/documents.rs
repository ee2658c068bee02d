//! # Document Commands
//!
//! Handles `!note list`, `!note show <index>`, `!solution list` and `!solution show <index>`.
//! Each invocation reads the document fresh from disk.

use anyhow::Result;

use crate::application::formatter::{format_detail, format_list};
use crate::application::loader::load_document;
use crate::domain::config::DocumentsConfig;
use crate::domain::paths;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{Document, DocumentKind};
use crate::strings::messages;

pub async fn handle_list(
    config: &DocumentsConfig,
    chat: &impl ChatProvider,
    reply_to: &str,
    kind: DocumentKind,
) -> Result<()> {
    let doc = load_document(&paths::document_path(&config.data_dir, kind)).await;

    let text = match &doc {
        Document::Failed(reason) => messages::load_failed(kind.file_name(), reason),
        Document::Sections(_) => {
            let result = format_list(Some(&doc), config.list_limit);
            tracing::debug!(
                "Listing {} of {} entries from {}",
                result.items.len(),
                result.total,
                kind.file_name()
            );
            result.text
        }
    };

    send(chat, reply_to, &text).await
}

pub async fn handle_show(
    config: &DocumentsConfig,
    chat: &impl ChatProvider,
    reply_to: &str,
    kind: DocumentKind,
    index: Option<i64>,
) -> Result<()> {
    // 1. Validate Args (before touching the file)
    let Some(index) = index else {
        return send(chat, reply_to, &messages::show_usage(kind)).await;
    };

    // 2. Load
    let doc = load_document(&paths::document_path(&config.data_dir, kind)).await;
    if let Document::Failed(reason) = &doc {
        return send(chat, reply_to, &messages::load_failed(kind.file_name(), reason)).await;
    }

    // 3. Lookup
    let text = match doc.find(index) {
        Some(section) => format_detail(kind, section),
        None => messages::not_found(kind),
    };
    send(chat, reply_to, &text).await
}

async fn send(chat: &impl ChatProvider, reply_to: &str, text: &str) -> Result<()> {
    chat.reply(reply_to, text)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
