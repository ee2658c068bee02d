//! # Help Text
//!
//! Displayed to the user via the `!help` command.

pub const MAIN: &str = concat!(
    "**Memo Bot — Commands:**\n",
    "`!note list` — list notes (from note.md)\n",
    "`!note show <index>` — show note detail\n",
    "`!solution list` — list solutions (from solution.md)\n",
    "`!solution show <index>` — show solution detail\n",
    "`!help` — show this help"
);
