//! # Classifier State & Training

use crate::classifier::ClassifierOptions;
use crate::frequency::frequency_table;
use crate::tokenizer::Tokenizer;
use crate::types::{WsHashMap, WsHashSet, hash_map_new, hash_set_new};

/// Incremental multinomial naive-Bayes classifier with Laplace smoothing.
///
/// All counters are owned exclusively by the instance; mutation is only
/// possible through [`learn`](Self::learn), [`unlearn`](Self::unlearn),
/// [`remove_category`](Self::remove_category),
/// [`initialize_category`](Self::initialize_category), and state import.
///
/// Counting model: the vocabulary count of a token is the total number of
/// occurrences attributed across all categories, and always equals the
/// sum of the per-category frequency counts for that token. The
/// vocabulary size used for smoothing is the number of tokens with a
/// positive count.
#[derive(Debug, Clone)]
pub struct Classifier {
    pub(crate) options: ClassifierOptions,

    /// Token -> total occurrence count across all categories.
    /// Entries are removed when they reach zero.
    pub(crate) vocabulary: WsHashMap<String, u64>,

    /// Number of tokens with a positive vocabulary count.
    pub(crate) vocabulary_size: u64,

    /// Total number of documents learned across all categories.
    pub(crate) total_documents: u64,

    /// Category -> number of documents learned under it.
    pub(crate) doc_count: WsHashMap<String, u64>,

    /// Category -> total token occurrences attributed to it.
    pub(crate) word_count: WsHashMap<String, u64>,

    /// Category -> token -> occurrence count within the category.
    pub(crate) word_frequency_count: WsHashMap<String, WsHashMap<String, u64>>,

    /// The registered category names visible to inference.
    pub(crate) categories: WsHashSet<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a classifier with default options.
    pub fn new() -> Self {
        Self::with_options(ClassifierOptions::default())
    }

    /// Create a classifier with the given options.
    ///
    /// ## Arguments
    /// * `options` - The configuration, including the tokenizer strategy.
    pub fn with_options(options: ClassifierOptions) -> Self {
        Self {
            options,
            vocabulary: hash_map_new(),
            vocabulary_size: 0,
            total_documents: 0,
            doc_count: hash_map_new(),
            word_count: hash_map_new(),
            word_frequency_count: hash_map_new(),
            categories: hash_set_new(),
        }
    }

    /// Gets the configured options.
    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// The number of tokens with a positive vocabulary count.
    pub fn vocabulary_size(&self) -> u64 {
        self.vocabulary_size
    }

    /// The total occurrence count attributed to `token` across all
    /// categories, or 0 if the token is unknown.
    pub fn vocabulary_count(
        &self,
        token: &str,
    ) -> u64 {
        self.vocabulary.get(token).copied().unwrap_or(0)
    }

    /// The total number of documents learned.
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    /// Iterate the registered category names, in no particular order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Returns true if `category` is registered.
    pub fn has_category(
        &self,
        category: &str,
    ) -> bool {
        self.categories.contains(category)
    }

    /// The number of documents learned under `category`, or 0.
    pub fn doc_count(
        &self,
        category: &str,
    ) -> u64 {
        self.doc_count.get(category).copied().unwrap_or(0)
    }

    /// The total token occurrences attributed to `category`, or 0.
    pub fn word_count(
        &self,
        category: &str,
    ) -> u64 {
        self.word_count.get(category).copied().unwrap_or(0)
    }

    /// The occurrence count of `token` within `category`, or 0.
    pub fn token_count(
        &self,
        token: &str,
        category: &str,
    ) -> u64 {
        self.word_frequency_count
            .get(category)
            .and_then(|freqs| freqs.get(token))
            .copied()
            .unwrap_or(0)
    }

    /// Register `category` with zeroed counters.
    ///
    /// Idempotent: a no-op if the category is already registered.
    pub fn initialize_category(
        &mut self,
        category: &str,
    ) -> &mut Self {
        if !self.categories.contains(category) {
            self.doc_count.insert(category.to_owned(), 0);
            self.word_count.insert(category.to_owned(), 0);
            self.word_frequency_count
                .insert(category.to_owned(), hash_map_new());
            self.categories.insert(category.to_owned());
        }

        self
    }

    /// Remove `category` entirely, releasing its documents from the
    /// total and its token occurrences from the vocabulary.
    ///
    /// A no-op if the category is not registered.
    pub fn remove_category(
        &mut self,
        category: &str,
    ) -> &mut Self {
        if !self.categories.contains(category) {
            return self;
        }

        let docs = self.doc_count.remove(category).unwrap_or(0);
        self.total_documents = self.total_documents.saturating_sub(docs);

        if let Some(freqs) = self.word_frequency_count.remove(category) {
            for (token, count) in freqs {
                self.release_vocabulary_count(&token, count);
            }
        }

        self.word_count.remove(category);
        self.categories.remove(category);

        log::debug!("removed category {category:?} ({docs} documents)");

        self
    }

    /// Learn `text` as a document of `category`.
    ///
    /// Registers the category if needed, then attributes the document and
    /// its token occurrence counts to the category and the vocabulary.
    ///
    /// ## Arguments
    /// * `text` - The document text.
    /// * `category` - The category to learn the document under.
    ///
    /// ## Returns
    /// `&mut Self`, for call chaining.
    pub fn learn(
        &mut self,
        text: &str,
        category: &str,
    ) -> &mut Self {
        self.initialize_category(category);

        *self.doc_count.entry(category.to_owned()).or_insert(0) += 1;
        self.total_documents += 1;

        let tokens = self.options.tokenizer().tokenize(text);
        let table = frequency_table(tokens);

        log::debug!(
            "learning {} distinct tokens as {category:?}",
            table.len(),
        );

        let cat_freqs = self
            .word_frequency_count
            .entry(category.to_owned())
            .or_insert_with(hash_map_new);
        let cat_words = self.word_count.entry(category.to_owned()).or_insert(0);

        for (token, frequency_in_text) in table {
            let global = self.vocabulary.entry(token.clone()).or_insert(0);
            if *global == 0 {
                self.vocabulary_size += 1;
            }
            *global += frequency_in_text;

            *cat_freqs.entry(token).or_insert(0) += frequency_in_text;
            *cat_words += frequency_in_text;
        }

        self
    }

    /// Reverse a previous [`learn`](Self::learn) call.
    ///
    /// Caller contract: the exact same `(text, category)` pair was
    /// previously learned and has not already been unlearned or
    /// invalidated by an intervening
    /// [`remove_category`](Self::remove_category). Violating the contract
    /// silently degrades the counters toward zero; it never panics and
    /// never returns an error.
    ///
    /// Unlearning a category's last document deletes its counters but
    /// leaves the category registered; only `remove_category` removes the
    /// registration.
    ///
    /// ## Arguments
    /// * `text` - The previously learned document text.
    /// * `category` - The category it was learned under.
    ///
    /// ## Returns
    /// `&mut Self`, for call chaining.
    pub fn unlearn(
        &mut self,
        text: &str,
        category: &str,
    ) -> &mut Self {
        if let Some(docs) = self.doc_count.get_mut(category) {
            *docs = docs.saturating_sub(1);
            if *docs == 0 {
                self.doc_count.remove(category);
            }
        }
        self.total_documents = self.total_documents.saturating_sub(1);

        let tokens = self.options.tokenizer().tokenize(text);
        let table = frequency_table(tokens);

        log::debug!(
            "unlearning {} distinct tokens from {category:?}",
            table.len(),
        );

        for (token, frequency_in_text) in table {
            self.release_vocabulary_count(&token, frequency_in_text);

            if let Some(cat_freqs) = self.word_frequency_count.get_mut(category) {
                if let Some(count) = cat_freqs.get_mut(&token) {
                    *count = count.saturating_sub(frequency_in_text);
                    if *count == 0 {
                        cat_freqs.remove(&token);
                    }
                }
            }

            if let Some(words) = self.word_count.get_mut(category) {
                *words = words.saturating_sub(frequency_in_text);
                if *words == 0 {
                    self.word_count.remove(category);
                    self.word_frequency_count.remove(category);
                }
            }
        }

        self
    }

    /// Subtract `count` occurrences of `token` from the vocabulary,
    /// dropping the entry and shrinking the vocabulary size at zero.
    fn release_vocabulary_count(
        &mut self,
        token: &str,
        count: u64,
    ) {
        if let Some(global) = self.vocabulary.get_mut(token) {
            *global = global.saturating_sub(count);
            if *global == 0 {
                self.vocabulary.remove(token);
                self.vocabulary_size = self.vocabulary_size.saturating_sub(1);
            }
        }
    }
}
