//! # Formatter
//!
//! Renders parsed documents into chat text: a bounded, numbered list and a single-section detail view.

use crate::domain::types::{Document, DocumentKind, ListResult, Section};
use crate::strings::messages;

pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Formats the first `limit` sections of `doc` as a numbered list.
pub fn format_list(doc: Option<&Document>, limit: usize) -> ListResult {
    let Some(sections) = doc.and_then(Document::sections) else {
        return ListResult {
            total: 0,
            items: Vec::new(),
            text: messages::NO_DATA.to_string(),
        };
    };

    if sections.is_empty() {
        return ListResult {
            total: 0,
            items: Vec::new(),
            text: messages::NO_ENTRIES.to_string(),
        };
    }

    let total = sections.len();
    let shown: Vec<Section> = sections.iter().take(limit).cloned().collect();

    let mut lines = vec![messages::list_header(total)];
    lines.extend(
        shown
            .iter()
            .enumerate()
            .map(|(pos, s)| format!("{}. [{}] {}", pos + 1, s.index, s.title)),
    );
    if total > limit {
        lines.push(messages::list_overflow(total - limit));
    }

    ListResult {
        total,
        items: shown,
        text: lines.join("\n"),
    }
}

pub fn format_detail(kind: DocumentKind, section: &Section) -> String {
    format!(
        "{} {} [{}] {}\n\n{}",
        kind.icon(),
        kind.label(),
        section.index,
        section.title,
        section.body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sections::parse_sections;

    fn numbered(count: usize) -> Document {
        let raw = (1..=count)
            .map(|i| format!("# Entry {i}\ntext\n"))
            .collect::<String>();
        Document::Sections(parse_sections(&raw))
    }

    #[test]
    fn test_failed_or_missing_document() {
        let failed = Document::Failed("permission denied".to_string());
        for doc in [None, Some(&failed)] {
            let result = format_list(doc, DEFAULT_LIST_LIMIT);
            assert_eq!(result.text, "No file or invalid data.");
            assert!(result.items.is_empty());
        }
    }

    #[test]
    fn test_empty_document() {
        let result = format_list(Some(&Document::Sections(Vec::new())), DEFAULT_LIST_LIMIT);
        assert_eq!(result.text, "No entries found.");
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_small_list() {
        let doc = Document::Sections(parse_sections("# A\nfoo\n# B\nbar\n"));
        let result = format_list(Some(&doc), DEFAULT_LIST_LIMIT);
        assert_eq!(result.text, "Found 2 entries:\n1. [1] A\n2. [2] B");
        assert_eq!(result.total, 2);
        assert_eq!(result.items.len(), 2);
    }

    #[test]
    fn test_exactly_at_limit_has_no_overflow() {
        let result = format_list(Some(&numbered(10)), 10);
        assert_eq!(result.items.len(), 10);
        assert!(result.text.ends_with("10. [10] Entry 10"));
        assert!(!result.text.contains("more."));
    }

    #[test]
    fn test_overflow_notice() {
        let result = format_list(Some(&numbered(13)), 10);
        assert_eq!(result.total, 13);
        assert_eq!(result.items.len(), 10);
        assert!(result.text.starts_with("Found 13 entries:\n1. [1] Entry 1\n"));
        assert!(result.text.ends_with(
            "\n...and 3 more. Use \"!note show <index>\" or \"!solution show <index>\" to view details."
        ));
        assert!(!result.text.contains("[11]"));
    }

    #[test]
    fn test_custom_limit() {
        let result = format_list(Some(&numbered(3)), 2);
        assert_eq!(
            result.text,
            "Found 3 entries:\n1. [1] Entry 1\n2. [2] Entry 2\n...and 1 more. Use \"!note show <index>\" or \"!solution show <index>\" to view details."
        );
    }

    #[test]
    fn test_detail() {
        let section = Section {
            index: 4,
            title: "Restart nginx".to_string(),
            body: "`sudo systemctl restart nginx`".to_string(),
        };
        assert_eq!(
            format_detail(DocumentKind::Note, &section),
            "📘 Note [4] Restart nginx\n\n`sudo systemctl restart nginx`"
        );
        assert_eq!(
            format_detail(DocumentKind::Solution, &section),
            "🛠 Solution [4] Restart nginx\n\n`sudo systemctl restart nginx`"
        );
    }
}
