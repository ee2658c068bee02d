//! # Section Parser
//!
//! Splits a Markdown document into titled sections on level-1 headings.
//! Only a line starting with `"# "` opens a section; deeper headings, `"#Title"`
//! and a `"# "` in the middle of a line are plain content.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::types::Section;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# ").expect("heading pattern is valid"));

pub fn parse_sections(raw: &str) -> Vec<Section> {
    // A byte-order mark would hide a heading on the first line.
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    HEADING
        .split(raw)
        // Everything before the first heading
        .skip(1)
        .filter(|block| !block.trim().is_empty())
        .enumerate()
        .map(|(position, block)| build_section(position + 1, block))
        .collect()
}

fn build_section(index: usize, block: &str) -> Section {
    let mut lines = block.lines();
    let title = match lines.next().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!("Item {index}"),
    };
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    Section { index, title, body }
}
