//! Delegated segmentation for languages without spaces between words.
//!
//! Dictionary or statistical segmenters (MeCab, jieba and friends) live
//! outside this crate. They plug in through the [`Segmenter`] trait and are
//! registered per language on the tokenizer builder.

/// External word segmenter.
///
/// Receives normalized text and returns its pieces in order. The tokenizer
/// applies the usual apostrophe, punctuation and symbol rules to each piece.
pub trait Segmenter: Send + Sync {
    /// Split text into word pieces.
    fn segment(&self, text: &str) -> Vec<String>;
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn segment(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Segmenter for text that was already segmented with spaces, such as the
/// output of an external tokenizer run at corpus-build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresegmentedText;

impl Segmenter for PresegmentedText {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_segmenter() {
        let segmenter = |text: &str| text.chars().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(segmenter.segment("ab"), vec!["a", "b"]);
    }

    #[test]
    fn test_presegmented_text() {
        let segmenter = PresegmentedText;
        assert_eq!(segmenter.segment("私 は  猫"), vec!["私", "は", "猫"]);
    }
}
