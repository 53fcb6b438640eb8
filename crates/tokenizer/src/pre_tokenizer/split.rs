//! Structural word splitting.
//!
//! Text is first cut at Unicode (UAX #29) word boundaries. Each segment is
//! then refined:
//!
//! - runs of letters, marks and digits become tokens
//! - an apostrophe (`'` or `’`) between letters stays inside the token, so
//!   `can't` is one token while `dogs'` is `dogs`
//! - any other punctuation is a hard split and is dropped, so `can.t` is
//!   `can`, `t`
//! - symbol and emoji clusters become tokens of their own, one per grapheme
//!   cluster, even when glued to letters
//! - UAX #29 has no word rules for Thai, Lao, Khmer and Myanmar, so runs of
//!   their letters are kept whole instead of cut into single characters;
//!   real word splitting for them needs a registered segmenter
//!
//! Segmenters for languages without spaces feed their pieces through
//! [`Splitter::refine`] so both paths share these rules.

use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

const WORD_PATTERN: &str = concat!(
    // letters with interior apostrophes: letter before, letter after
    r"(?:[\p{L}\p{N}][\p{L}\p{M}\p{N}]*)?\p{L}\p{M}*",
    r"(?:['’]\p{L}(?:[\p{L}\p{M}\p{N}]*\p{L})?\p{M}*)+",
    r"[\p{L}\p{M}\p{N}]*",
    // plain runs
    r"|[\p{L}\p{N}][\p{L}\p{M}\p{N}]*",
);

const SYMBOL_PATTERN: &str = r"^[\p{S}\p{Extended_Pictographic}]";

const COMPLEX_CONTEXT_PATTERN: &str =
    r"^[[\p{Thai}\p{Lao}\p{Khmer}\p{Myanmar}]&&[\p{L}\p{M}]]+$";

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WORD_PATTERN).expect("Invalid word pattern"))
}

fn symbol_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SYMBOL_PATTERN).expect("Invalid symbol pattern"))
}

fn complex_context_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(COMPLEX_CONTEXT_PATTERN).expect("Invalid complex context pattern")
    })
}

/// Text splitter producing frequency-table token units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter;

impl Splitter {
    /// Create a new splitter.
    pub fn new() -> Self {
        Self
    }

    /// Split normalized text at word boundaries and refine each segment.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut run = String::new();
        for segment in text.split_word_bounds() {
            if complex_context_re().is_match(segment) {
                run.push_str(segment);
                continue;
            }
            if !run.is_empty() {
                self.refine(&run, &mut tokens);
                run.clear();
            }
            self.refine(segment, &mut tokens);
        }
        if !run.is_empty() {
            self.refine(&run, &mut tokens);
        }
        tokens
    }

    /// Apply the apostrophe, punctuation and symbol rules to one piece of
    /// text, appending the resulting tokens.
    pub fn refine(&self, piece: &str, out: &mut Vec<String>) {
        let mut last = 0;
        for m in word_re().find_iter(piece) {
            push_symbols(&piece[last..m.start()], out);
            out.push(m.as_str().to_string());
            last = m.end();
        }
        push_symbols(&piece[last..], out);
    }
}

fn push_symbols(gap: &str, out: &mut Vec<String>) {
    if gap.is_empty() {
        return;
    }
    for grapheme in gap.graphemes(true) {
        if symbol_re().is_match(grapheme) {
            out.push(grapheme.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(text: &str) -> Vec<String> {
        Splitter::new().split(text)
    }

    #[test]
    fn test_whitespace_split() {
        assert_eq!(split("hello world  test"), vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_interior_apostrophe_kept() {
        assert_eq!(split("can't"), vec!["can't"]);
        assert_eq!(split("plan't"), vec!["plan't"]);
        assert_eq!(split("rock'n'roll"), vec!["rock'n'roll"]);
        assert_eq!(split("l’homme"), vec!["l’homme"]);
    }

    #[test]
    fn test_edge_apostrophes_dropped() {
        assert_eq!(split("'quoted' dogs'"), vec!["quoted", "dogs"]);
        assert_eq!(split("12'5"), vec!["12", "5"]);
    }

    #[test]
    fn test_complex_context_scripts_stay_whole() {
        assert_eq!(split("สวัสดีครับ"), vec!["สวัสดีครับ"]);
        assert_eq!(split("ฉันรัก cat, ฉันรัก"), vec!["ฉันรัก", "cat", "ฉันรัก"]);
    }

    #[test]
    fn test_other_punctuation_splits() {
        assert_eq!(split("can.t"), vec!["can", "t"]);
        assert_eq!(split("Hello, world!"), vec!["Hello", "world"]);
        assert_eq!(split("e-mail"), vec!["e", "mail"]);
    }

    #[test]
    fn test_emoji_split_from_letters() {
        assert_eq!(split("😂test"), vec!["😂", "test"]);
        assert_eq!(split("test😂😂"), vec!["test", "😂", "😂"]);
        assert_eq!(split("❤️ you"), vec!["❤️", "you"]);
    }

    #[test]
    fn test_symbols_are_tokens() {
        assert_eq!(split("5 + 3 = 8"), vec!["5", "+", "3", "=", "8"]);
    }

    #[test]
    fn test_ideographs_split_per_character() {
        assert_eq!(split("我的猫"), vec!["我", "的", "猫"]);
    }

    #[test]
    fn test_refine_keeps_segmenter_pieces() {
        let mut out = Vec::new();
        Splitter::new().refine("的人。", &mut out);
        assert_eq!(out, vec!["的人"]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(split(""), Vec::<String>::new());
        assert_eq!(split(" ... "), Vec::<String>::new());
    }
}
