//! # Domain Types
//!
//! Data structures shared by the parser, the renderers and the command handlers.

use crate::domain::paths;

/// One heading-delimited block of a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// 1-based position in document order.
    pub index: usize,
    pub title: String,
    pub body: String,
}

/// The result of loading one Markdown file: either its sections or the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Sections(Vec<Section>),
    Failed(String),
}

impl Document {
    pub fn sections(&self) -> Option<&[Section]> {
        match self {
            Document::Sections(sections) => Some(sections),
            Document::Failed(_) => None,
        }
    }

    /// Looks up a section by its 1-based index. Zero, negative and
    /// out-of-range indices yield `None`, as does a failed document.
    pub fn find(&self, index: i64) -> Option<&Section> {
        let position = usize::try_from(index).ok()?.checked_sub(1)?;
        self.sections()?.get(position)
    }
}

/// A bounded view over a document's sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResult {
    pub total: usize,
    pub items: Vec<Section>,
    pub text: String,
}

/// Which of the two documents a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Note,
    Solution,
}

impl DocumentKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentKind::Note => paths::NOTE_FILE,
            DocumentKind::Solution => paths::SOLUTION_FILE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Note => "Note",
            DocumentKind::Solution => "Solution",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DocumentKind::Note => "📘",
            DocumentKind::Solution => "🛠",
        }
    }

    /// The word used in chat commands (`!note ...`, `!solution ...`).
    pub fn command_word(&self) -> &'static str {
        match self {
            DocumentKind::Note => "note",
            DocumentKind::Solution => "solution",
        }
    }
}

/// An inbound text message, stripped of transport details.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub event_id: String,
    pub sender: String,
    pub body: String,
}
