//! Ordered text-rewrite passes over one raw definition block.
//!
//! Each pass extracts and strips one kind of tagged fragment; later passes
//! operate on the residue of earlier ones, so the order is part of the
//! contract. Cross-references and citations are stripped but not surfaced.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fragments pulled out of one raw definition text block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    /// Usage examples, each still holding the placeholder dash that the
    /// renderer substitutes with the entry's stem.
    pub examples: Vec<String>,
    /// Topical tag, rewritten to 〔…〕 brackets. Empty when absent.
    pub topic: String,
    /// Trailing antonym annotation, starting at ⇔. Empty when absent.
    pub antonym: String,
    /// Definition prose left over after all passes, trimmed.
    pub main_text: String,
}

/// 「…－…」 usage quote. A `／` inside the closing half marks an alternation
/// the placeholder substitution cannot handle, so those quotes stay put.
static EXAMPLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"「[^「]*－[^「／]*」").unwrap());
/// A quote followed by this is a synonym note, not a usage example.
const SAME_AS: &str = "に同じ";
static TOPIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"〘.*〙").unwrap());
static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"〔.*〕").unwrap());
static CROSS_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"。\s*→.*").unwrap());
/// Stops before 《 so a trailing citation is not swallowed into the antonym
/// when the two co-occur without separating punctuation.
static ANTONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"。\s*⇔[^《]*").unwrap());
static CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"。\s*《.*》").unwrap());

/// Apply the six passes in order and return what they pulled out.
pub fn extract(raw: &str) -> ExtractedText {
    let (examples, text) = take_examples(raw);
    let (topic, text) = take_topic(&text);
    let text = ANNOTATION.replace_all(&text, "").into_owned();
    let text = CROSS_REF.replace_all(&text, "。").into_owned();
    let (antonym, text) = take_antonym(&text);
    let text = CITATION.replace_all(&text, "。").into_owned();
    ExtractedText {
        examples,
        topic,
        antonym,
        main_text: text.trim().to_string(),
    }
}

/// Collect usage quotes in order and strip them from the text. Quotes
/// immediately followed by the "same as" marker stay in the running text.
fn take_examples(raw: &str) -> (Vec<String>, String) {
    let mut examples = Vec::new();
    let mut rest = String::with_capacity(raw.len());
    let mut last = 0;
    for m in EXAMPLE.find_iter(raw) {
        if raw[m.end()..].starts_with(SAME_AS) {
            continue;
        }
        examples.push(m.as_str().to_string());
        rest.push_str(&raw[last..m.start()]);
        last = m.end();
    }
    rest.push_str(&raw[last..]);
    (examples, rest)
}

/// Keep the first topical tag with its brackets canonicalized; strip all of
/// them from the text.
fn take_topic(text: &str) -> (String, String) {
    let topic = TOPIC
        .find(text)
        .map(|m| m.as_str().replace('〘', "〔").replace('〙', "〕"))
        .unwrap_or_default();
    let rest = TOPIC.replace_all(text, "").into_owned();
    (topic, rest)
}

/// Keep a trailing ⇔ annotation that follows a full stop; the stop itself
/// stays in the text.
fn take_antonym(text: &str) -> (String, String) {
    match ANTONYM.find(text) {
        Some(m) => {
            let antonym = m.as_str().strip_prefix('。').unwrap_or(m.as_str()).to_string();
            let rest = ANTONYM.replace_all(text, "。").into_owned();
            (antonym, rest)
        }
        None => (String::new(), text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_is_extracted_and_stripped() {
        let out = extract("水がある。「－がこぼれる」");
        assert_eq!(out.examples, vec!["「－がこぼれる」".to_string()]);
        assert_eq!(out.main_text, "水がある。");
    }

    #[test]
    fn same_as_quote_stays_in_main_text() {
        let out = extract("「水－」に同じ");
        assert!(out.examples.is_empty());
        assert_eq!(out.main_text, "「水－」に同じ");
    }

    #[test]
    fn alternation_quote_is_not_an_example() {
        let out = extract("ある。「－が立つ／とる」");
        assert!(out.examples.is_empty());
        assert_eq!(out.main_text, "ある。「－が立つ／とる」");
    }

    #[test]
    fn topic_antonym_and_citation() {
        let out = extract("〘医学〙高血圧。⇔低血圧。《近世語》");
        assert_eq!(out.topic, "〔医学〕");
        assert_eq!(out.antonym, "⇔低血圧。");
        assert_eq!(out.main_text, "高血圧。");
    }

    #[test]
    fn annotation_is_discarded() {
        let out = extract("〔補説〕ほんとうの意味。");
        assert_eq!(out.main_text, "ほんとうの意味。");
        assert!(out.topic.is_empty());
    }

    #[test]
    fn cross_reference_is_discarded_keeping_the_stop() {
        let out = extract("学問のこと。→学術");
        assert_eq!(out.main_text, "学問のこと。");
        assert!(out.antonym.is_empty());
    }

    #[test]
    fn unpreceded_arrow_is_left_alone() {
        // The cross-reference rule only fires after a full stop.
        let out = extract("→学術");
        assert_eq!(out.main_text, "→学術");
    }

    #[test]
    fn multiple_examples_keep_document_order() {
        let out = extract("流れ。「－が出る」また、その量。「－を増す」");
        assert_eq!(
            out.examples,
            vec!["「－が出る」".to_string(), "「－を増す」".to_string()]
        );
        assert_eq!(out.main_text, "流れ。また、その量。");
    }

    #[test]
    fn empty_input_yields_empty_fields() {
        assert_eq!(extract(""), ExtractedText::default());
    }
}
