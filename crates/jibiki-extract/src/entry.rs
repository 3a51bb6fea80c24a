use kuchiki::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::{EntryLayout, INDENT_DIV, MARGIN_DIV, SMALL_SPAN, classify};
use crate::line::DefinitionLine;
use crate::node::{find_descendant, trimmed_text};

/// One dictionary entry, built from a NetDicHead/NetDicBody pair.
///
/// Missing pieces degrade to empty strings; construction itself never fails.
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    /// The lookup term as the user typed it.
    pub headword: String,
    pub layout: EntryLayout,
    /// Phonetic reading, empty when not derivable from the head.
    pub yomikata: String,
    /// Canonical written form, empty when undeterminable.
    pub kanji: String,
    /// Headword with its declared inflectional ending stripped.
    pub stem: String,
    /// Top-level definition lines in document order.
    pub lines: Vec<DefinitionLine>,
}

static KANJI_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"【(.+)】").unwrap());
/// Decorative glyphs inside the bracketed written form: variant-kanji
/// triangles, parentheses and angle-bracket annotations.
static KANJI_DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[▼▽（）《》]|・〈.*〉|〈|〉").unwrap());

impl DictionaryEntry {
    /// Build an entry from its head/body pair.
    ///
    /// Both nodes are consumed destructively: the decomposition detaches
    /// nodes as it goes, so callers hand over a freshly parsed fragment that
    /// nothing else reads afterwards. The reading is derived before the
    /// kanji step, which may detach an annotation span from the head that
    /// the reading still needs to see.
    pub fn build(headword: &str, head: &NodeRef, body: &NodeRef) -> Self {
        let layout = classify(head, body);
        let yomikata = build_yomikata(head);
        let kanji = build_kanji(head);
        let stem = build_stem(headword, head);
        let lines = decompose(body, layout);
        Self {
            headword: headword.to_string(),
            layout,
            yomikata,
            kanji,
            stem,
            lines,
        }
    }
}

/// Reading from the bolded head span, unless that span carries a small-font
/// annotation (then it is not a reading at all). Strips whitespace and the
/// middle-dot ending separator.
fn build_yomikata(head: &NodeRef) -> String {
    match find_descendant(head, "b") {
        Some(b) if find_descendant(&b, SMALL_SPAN).is_none() => b
            .text_contents()
            .chars()
            .filter(|c| *c != '・' && !c.is_whitespace())
            .collect(),
        _ => String::new(),
    }
}

/// Written form from the 【…】 bracket pair, minus decorative glyphs; or,
/// failing that, the head text left over once its small-font span is
/// detached. Empty when neither source exists.
fn build_kanji(head: &NodeRef) -> String {
    let head_text = head.text_contents();
    if let Some(caps) = KANJI_BRACKET.captures(&head_text) {
        KANJI_DECORATION.replace_all(&caps[1], "").into_owned()
    } else if let Some(span) = find_descendant(head, SMALL_SPAN) {
        span.detach();
        trimmed_text(head)
    } else {
        String::new()
    }
}

/// Strip the declared ending (the segment after the last middle dot in the
/// bold head text) off the headword. Not finding the ending as a suffix is a
/// benign no-op, not an error.
fn build_stem(headword: &str, head: &NodeRef) -> String {
    let Some(b) = find_descendant(head, "b") else {
        return headword.to_string();
    };
    let text = b.text_contents();
    match text.rsplit_once('・') {
        Some((_, ending)) if !ending.is_empty() => headword
            .strip_suffix(ending)
            .unwrap_or(headword)
            .to_string(),
        _ => headword.to_string(),
    }
}

/// Split the body into top-level definition lines per layout. Structured
/// layouts repeatedly find-and-detach their marker node; every other layout
/// turns the whole body into a single line. No matches means no lines.
fn decompose(body: &NodeRef, layout: EntryLayout) -> Vec<DefinitionLine> {
    let mut lines = Vec::new();
    match layout {
        EntryLayout::IndentedDiv => {
            while let Some(node) = find_descendant(body, INDENT_DIV) {
                lines.push(DefinitionLine::build(&node, layout, 1));
                node.detach();
            }
        }
        EntryLayout::MarginDiv => {
            while let Some(node) = find_descendant(body, MARGIN_DIV) {
                let container = node.parent().unwrap_or_else(|| node.clone());
                lines.push(DefinitionLine::build(&container, layout, 1));
                container.detach();
            }
        }
        _ => lines.push(DefinitionLine::build(body, layout, 1)),
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::head_body;

    #[test]
    fn reading_and_stem_from_bold_head() {
        let (head, body) = head_body(
            r#"<div class="NetDicHead"><b>アカ・い</b>【赤い】</div>
               <div class="NetDicBody"><div><div>色のひとつ。</div></div></div>"#,
        );
        let entry = DictionaryEntry::build("アカい", &head, &body);
        assert_eq!(entry.yomikata, "アカい");
        assert_eq!(entry.kanji, "赤い");
        assert_eq!(entry.stem, "アカ");
    }

    #[test]
    fn kanji_decorations_are_stripped() {
        let (head, body) = head_body(
            r#"<div class="NetDicHead"><b>あか・い</b>【▼赤い▽】</div>
               <div class="NetDicBody"><div><div>x</div></div></div>"#,
        );
        let entry = DictionaryEntry::build("あかい", &head, &body);
        assert_eq!(entry.kanji, "赤い");
    }

    #[test]
    fn small_span_in_bold_suppresses_reading() {
        let (head, body) = head_body(
            r#"<div class="NetDicHead"><b>赤<span style="font-size:75%;">一</span></b></div>
               <div class="NetDicBody"><div><div>x</div></div></div>"#,
        );
        let entry = DictionaryEntry::build("赤", &head, &body);
        assert_eq!(entry.yomikata, "");
        // The small span is detached and the remaining head text becomes the
        // written form.
        assert_eq!(entry.kanji, "赤");
    }

    #[test]
    fn bare_head_degrades_to_empty_fields() {
        let (head, body) = head_body(
            r#"<div class="NetDicHead">みず</div>
               <div class="NetDicBody"><div><div>x</div></div></div>"#,
        );
        let entry = DictionaryEntry::build("みず", &head, &body);
        assert_eq!(entry.yomikata, "");
        assert_eq!(entry.kanji, "");
        assert_eq!(entry.stem, "みず");
        assert_eq!(entry.lines.len(), 1);
    }

    #[test]
    fn ending_that_is_not_a_suffix_is_a_no_op() {
        let (head, body) = head_body(
            r#"<div class="NetDicHead"><b>ミズ・る</b></div>
               <div class="NetDicBody"><div><div>x</div></div></div>"#,
        );
        let entry = DictionaryEntry::build("みず", &head, &body);
        assert_eq!(entry.stem, "みず");
    }

    #[test]
    fn indented_body_yields_one_line_per_top_level_div() {
        let (head, body) = head_body(
            r#"<div class="NetDicHead"><b>みず</b></div>
               <div class="NetDicBody">
                 <div style="text-indent:0;">①<span style="text-indent:0;">一つ目。</span></div>
                 <div style="text-indent:0;">②<span style="text-indent:0;">二つ目。</span></div>
               </div>"#,
        );
        let entry = DictionaryEntry::build("みず", &head, &body);
        assert_eq!(entry.layout, EntryLayout::IndentedDiv);
        assert_eq!(entry.lines.len(), 2);
        assert_eq!(entry.lines[0].main_text, "一つ目。");
        assert_eq!(entry.lines[0].marker, "①");
        assert_eq!(entry.lines[1].main_text, "二つ目。");
    }

    #[test]
    fn margin_body_takes_the_parent_container_per_line() {
        let (head, body) = head_body(
            r#"<div class="NetDicHead"><b>みず</b></div>
               <div class="NetDicBody">
                 <div>（１）<div style="margin-left:1.2em;">一つ目。</div></div>
                 <div>（２）<div style="margin-left:1.2em;">二つ目。</div></div>
               </div>"#,
        );
        let entry = DictionaryEntry::build("みず", &head, &body);
        assert_eq!(entry.layout, EntryLayout::MarginDiv);
        assert_eq!(entry.lines.len(), 2);
        assert_eq!(entry.lines[0].marker, "（１）");
        assert_eq!(entry.lines[0].main_text, "一つ目。");
        assert_eq!(entry.lines[1].marker, "（２）");
    }

    #[test]
    fn misc_body_yields_exactly_one_line() {
        let (head, body) = head_body(
            r#"<div class="NetDicHead">x</div>
               <div class="NetDicBody"><div><div>本文。</div></div></div>"#,
        );
        let entry = DictionaryEntry::build("x", &head, &body);
        assert_eq!(entry.layout, EntryLayout::Misc);
        assert_eq!(entry.lines.len(), 1);
        assert_eq!(entry.lines[0].main_text, "本文。");
    }
}
