use kuchiki::NodeRef;

use crate::node::{find_descendant, has_descendant};

/// Head text marker for kanji-only entries.
pub(crate) const KANJI_MARKER: &str = "［漢字］";
/// Indented sub-definition block and its own text span.
pub(crate) const INDENT_DIV: &str = r#"div[style="text-indent:0;"]"#;
pub(crate) const INDENT_SPAN: &str = r#"span[style="text-indent:0;"]"#;
/// Left-margin sub-definition block.
pub(crate) const MARGIN_DIV: &str = r#"div[style="margin-left:1.2em;"]"#;
/// Small-font span, used both as a layout cue and as an annotation flag
/// inside the head.
pub(crate) const SMALL_SPAN: &str = r#"span[style="font-size:75%;"]"#;

/// The five markup layouts Weblio uses to present an entry.
///
/// The layout drives every downstream decision: which nodes become
/// definition lines and how each line's raw text is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout {
    Kanji,
    IndentedDiv,
    MarginDiv,
    SmallSpan,
    Misc,
}

/// Classify a head/body pair into one of the known layouts.
///
/// The checks run in a fixed order and the first match wins; the markers are
/// not mutually exclusive in the raw markup. Anything unrecognized falls
/// through to `Misc`, never to an error.
pub fn classify(head: &NodeRef, body: &NodeRef) -> EntryLayout {
    let layout = if head.text_contents().contains(KANJI_MARKER) {
        EntryLayout::Kanji
    } else if has_descendant(body, INDENT_DIV) {
        EntryLayout::IndentedDiv
    } else if has_descendant(body, MARGIN_DIV) {
        EntryLayout::MarginDiv
    } else if small_span_with_block(body) {
        EntryLayout::SmallSpan
    } else {
        EntryLayout::Misc
    };
    tracing::debug!("classified entry as {:?}", layout);
    layout
}

/// A small-font span only signals the `SmallSpan` layout when its parent
/// holds a further block for the definition text.
fn small_span_with_block(body: &NodeRef) -> bool {
    find_descendant(body, SMALL_SPAN)
        .and_then(|span| span.parent())
        .map(|parent| has_descendant(&parent, "div"))
        .unwrap_or(false)
}
