use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to raw source-field text before lookup.
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }

    /// Split a source field into the words to look up. The field convention
    /// is one or more words separated by 、.
    fn split_words(&self, text: &str) -> Vec<String> {
        self.process(text)
            .split('、')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_the_full_width_comma() {
        let words = DefaultPreprocessor.split_words("水、赤い");
        assert_eq!(words, vec!["水", "赤い"]);
    }

    #[test]
    fn single_word_passes_through() {
        assert_eq!(DefaultPreprocessor.split_words("水"), vec!["水"]);
    }

    #[test]
    fn empty_segments_and_whitespace_are_dropped() {
        let words = DefaultPreprocessor.split_words(" 水 、、 赤い\n");
        assert_eq!(words, vec!["水", "赤い"]);
    }

    #[test]
    fn half_width_katakana_is_normalized() {
        assert_eq!(DefaultPreprocessor.process("ﾐｽﾞ"), "ミズ");
    }
}
