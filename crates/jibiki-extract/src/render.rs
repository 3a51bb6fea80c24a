//! Final gloss rendering: entry header, indented line tree, stem-substituted
//! examples. Output is plain text with `<br/>` line breaks, ready for a
//! flashcard field.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::entry::DictionaryEntry;
use crate::line::DefinitionLine;

/// Sub-definitions rendered per nesting level, at every level.
pub const SUB_DEF_CNT: usize = 3;

/// Placeholder dash inside a usage example, with optional surrounding
/// whitespace and okurigana separator.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*－\s*・?").unwrap());
/// Both full-width comma variants collapse to the canonical one.
static COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[、，]").unwrap());

impl DictionaryEntry {
    /// Flashcard-ready gloss for this entry.
    ///
    /// Pure function of the entry: rendering twice yields identical output.
    pub fn display(&self) -> String {
        let mut body = String::new();
        for line in self.lines.iter().take(SUB_DEF_CNT) {
            body.push_str(&line.display(&self.stem));
        }
        let text = format!("{}[{}]{}", self.kanji, self.yomikata, body.trim());
        text.replace(' ', "")
    }
}

impl DefinitionLine {
    /// One rendered line, indented by depth, with the entry's stem
    /// substituted into its usage examples.
    pub fn display(&self, stem: &str) -> String {
        let mut text = format!(
            "{}{}{}：　{}",
            "　".repeat(self.depth),
            self.marker,
            self.topic,
            self.main_text
        );
        for example in &self.examples {
            // NoExpand: the stem is literal text, not a replacement template.
            text.push_str(&PLACEHOLDER.replace_all(example, NoExpand(stem)));
        }
        text.push_str(&self.antonym);
        text.push_str("<br/>");
        for child in self.children.iter().take(SUB_DEF_CNT) {
            text.push_str(&child.display(stem));
        }
        COMMA.replace_all(&text, "、").into_owned()
    }
}
