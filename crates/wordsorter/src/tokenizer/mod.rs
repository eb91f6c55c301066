//! # Tokenization
//!
//! Tokenization is a pluggable strategy: the classifier holds a
//! [`Tokenizer`] chosen at construction time and routes every `learn`,
//! `unlearn`, and `categorize` call through it. The default strategy is
//! [`WordTokenizer`]; any `Fn(&str) -> Vec<String>` closure also
//! implements [`Tokenizer`] and can be plugged in through
//! [`ClassifierOptions::with_tokenizer`](crate::ClassifierOptions::with_tokenizer).

mod word_tokenizer;

#[doc(inline)]
pub use word_tokenizer::*;

/// Strategy for splitting text into an ordered sequence of tokens.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into an ordered sequence of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_tokenizer() {
        let commas = |text: &str| -> Vec<String> {
            text.split(',').map(str::to_owned).collect()
        };

        assert_eq!(commas.tokenize("a,b c,d"), vec!["a", "b c", "d"]);
    }
}
