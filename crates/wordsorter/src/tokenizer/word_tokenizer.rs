//! # Default Word Tokenizer

use crate::tokenizer::Tokenizer;
use regex::Regex;

/// Pattern matching every character the default tokenizer replaces with a
/// space: anything that is not an ASCII letter, a letter in the
/// `U+0410..=U+044F` Cyrillic range, a digit, an underscore, or
/// whitespace.
pub const STRIP_PATTERN: &str = r"[^a-zA-ZА-Яа-я0-9_\s]";

/// Pattern matching the whitespace runs the sanitized text is split on.
const SPLIT_PATTERN: &str = r"\s+";

/// Default sanitize-then-split word tokenizer.
///
/// Replaces every character matching [`STRIP_PATTERN`] with a single
/// space, then splits the result on runs of whitespace.
///
/// Split boundaries at the start or end of the text produce empty-string
/// tokens: `"hi!"` tokenizes to `["hi", ""]`, and the empty string
/// tokenizes to `[""]`. Callers that want only non-empty word tokens
/// should plug in their own [`Tokenizer`].
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    strip_re: Regex,
    split_re: Regex,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    /// Create a new default word tokenizer.
    pub fn new() -> Self {
        // Both patterns are fixed literals; compilation cannot fail.
        Self {
            strip_re: Regex::new(STRIP_PATTERN).expect("STRIP_PATTERN compiles"),
            split_re: Regex::new(SPLIT_PATTERN).expect("SPLIT_PATTERN compiles"),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let sanitized = self.strip_re.replace_all(text, " ");

        self.split_re
            .split(&sanitized)
            .map(str::to_owned)
            .collect()
    }
}
