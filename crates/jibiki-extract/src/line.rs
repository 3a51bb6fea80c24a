use kuchiki::NodeRef;

use crate::layout::{EntryLayout, INDENT_DIV, INDENT_SPAN, MARGIN_DIV, SMALL_SPAN};
use crate::node::{find_descendant, trimmed_text};
use crate::patterns;

/// One definition line: a sense or sub-sense with the tagged fragments
/// pulled out of its raw text, plus its nested sub-senses.
#[derive(Debug, Clone)]
pub struct DefinitionLine {
    /// Nesting level, 1 for top-level lines. Only used for indentation.
    pub depth: usize,
    /// Layout-specific prefix text (an ordinal or part-of-speech tag);
    /// empty for layouts without markers.
    pub marker: String,
    pub main_text: String,
    pub topic: String,
    pub antonym: String,
    pub examples: Vec<String>,
    pub children: Vec<DefinitionLine>,
}

impl DefinitionLine {
    /// Recursively decompose `node` into a line and its sub-lines.
    ///
    /// Nested structural nodes are built and detached before the node's own
    /// text is read. Reading the text first would swallow the children's
    /// text into the parent's. The node is part of the entry's working copy,
    /// so the detaching is contained.
    pub(crate) fn build(node: &NodeRef, layout: EntryLayout, depth: usize) -> Self {
        let mut children = Vec::new();
        let (marker, raw_text) = match layout {
            EntryLayout::IndentedDiv => {
                while let Some(child) = find_descendant(node, INDENT_DIV) {
                    children.push(Self::build(&child, layout, depth + 1));
                    child.detach();
                }
                let raw = match find_descendant(node, INDENT_SPAN) {
                    Some(span) => {
                        span.detach();
                        trimmed_text(&span)
                    }
                    None => {
                        tracing::warn!("indented definition line without its text span");
                        String::new()
                    }
                };
                (trimmed_text(node), raw)
            }
            EntryLayout::MarginDiv => {
                while let Some(nested) = nested_margin_div(node) {
                    let container = nested.parent().unwrap_or_else(|| nested.clone());
                    children.push(Self::build(&container, layout, depth + 1));
                    container.detach();
                }
                let raw = match find_descendant(node, MARGIN_DIV) {
                    Some(div) => {
                        div.detach();
                        trimmed_text(&div)
                    }
                    None => {
                        tracing::warn!("margin definition line without its text block");
                        String::new()
                    }
                };
                (trimmed_text(node), raw)
            }
            EntryLayout::SmallSpan => {
                let raw = find_descendant(node, SMALL_SPAN)
                    .and_then(|span| span.parent())
                    .and_then(|parent| find_descendant(&parent, "div"))
                    .map(|div| trimmed_text(&div))
                    .unwrap_or_default();
                (String::new(), raw)
            }
            EntryLayout::Kanji | EntryLayout::Misc => {
                let raw = find_descendant(node, "div")
                    .and_then(|outer| find_descendant(&outer, "div"))
                    .map(|inner| inner.text_contents())
                    .unwrap_or_default();
                (String::new(), raw)
            }
        };

        let extracted = patterns::extract(&raw_text);
        Self {
            depth,
            marker,
            main_text: extracted.main_text,
            topic: extracted.topic,
            antonym: extracted.antonym,
            examples: extracted.examples,
            children,
        }
    }
}

/// Margin div nested deeper than the line's own text block, i.e. one whose
/// parent is not the line node itself. Its parent container becomes the
/// child line, symmetric with the top-level margin rule.
fn nested_margin_div(node: &NodeRef) -> Option<NodeRef> {
    let hits = node.select(MARGIN_DIV).ok()?;
    for hit in hits {
        let div = hit.as_node().clone();
        if div == *node {
            continue;
        }
        match div.parent() {
            Some(parent) if parent == *node => continue,
            _ => return Some(div),
        }
    }
    None
}
