//! # Document Loader
//!
//! Reads a Markdown file and hands it to the section parser.
//! Read failures become a `Document::Failed` value instead of an error, so
//! command handlers always get something they can render.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::application::sections::parse_sections;
use crate::domain::types::Document;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing, unreadable or not valid UTF-8.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Human-readable reason, without the path.
    pub fn reason(&self) -> String {
        match self {
            LoadError::Io { source, .. } => source.to_string(),
        }
    }
}

pub async fn read_raw(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

pub async fn load_document(path: &Path) -> Document {
    match read_raw(path).await {
        Ok(raw) => {
            let sections = parse_sections(&raw);
            tracing::debug!("Parsed {} sections from {}", sections.len(), path.display());
            Document::Sections(sections)
        }
        Err(e) => {
            tracing::warn!("{e}");
            Document::Failed(e.reason())
        }
    }
}
