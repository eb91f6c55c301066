//! # Classifier Options

use crate::tokenizer::{Tokenizer, WordTokenizer};
use core::fmt;
use std::sync::Arc;

/// Options for configuring a [`Classifier`](crate::Classifier).
///
/// Captured at construction time and immutable afterwards. Holds the
/// tokenization strategy; absent an override, [`WordTokenizer`] is used.
#[derive(Clone)]
pub struct ClassifierOptions {
    /// The tokenizer strategy.
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            tokenizer: Arc::new(WordTokenizer::new()),
        }
    }
}

impl fmt::Debug for ClassifierOptions {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("ClassifierOptions")
            .finish_non_exhaustive()
    }
}

impl ClassifierOptions {
    /// Create options with the default word tokenizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tokenizer strategy.
    ///
    /// ## Arguments
    /// * `tokenizer` - The tokenization strategy; any
    ///   `Fn(&str) -> Vec<String>` closure qualifies.
    ///
    /// ## Returns
    /// The updated `ClassifierOptions` instance.
    pub fn with_tokenizer<T>(
        self,
        tokenizer: T,
    ) -> Self
    where
        T: Tokenizer + 'static,
    {
        Self {
            tokenizer: Arc::new(tokenizer),
        }
    }

    /// Sets the tokenizer strategy from a shared handle.
    ///
    /// ## Arguments
    /// * `tokenizer` - A shared tokenization strategy.
    ///
    /// ## Returns
    /// The updated `ClassifierOptions` instance.
    pub fn with_shared_tokenizer(
        self,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self { tokenizer }
    }

    /// Gets the tokenizer strategy.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }
}
