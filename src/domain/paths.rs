//! # Paths
//!
//! Centralized definitions for where the bot reads its documents and writes its logs.

use std::path::{Path, PathBuf};

use crate::domain::types::DocumentKind;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";
pub const NOTE_FILE: &str = "note.md";
pub const SOLUTION_FILE: &str = "solution.md";
pub const SESSION_LOG: &str = "session.log";

/// Returns the path of the document backing `kind` inside `data_dir`
/// (e.g. "data/note.md")
pub fn document_path(data_dir: impl AsRef<Path>, kind: DocumentKind) -> PathBuf {
    data_dir.as_ref().join(kind.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path() {
        assert_eq!(
            document_path("data", DocumentKind::Note),
            PathBuf::from("data/note.md")
        );
        assert_eq!(
            document_path("/srv/memo", DocumentKind::Solution),
            PathBuf::from("/srv/memo/solution.md")
        );
    }
}
