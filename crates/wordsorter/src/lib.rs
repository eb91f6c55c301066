//! # `wordsorter` Naive-Bayes Text Classifier
//!
//! An incremental, in-memory multinomial naive-Bayes classifier with
//! Laplace (add-one) smoothing.
//!
//! The classifier learns category associations one document at a time,
//! can reverse a previous learning step, can drop an entire category,
//! predicts the most likely category for new text with calibrated
//! probabilities, and serializes its full learned state to a JSON record.
//!
//! See:
//! * [`Classifier::learn`] / [`Classifier::unlearn`] to train and untrain.
//! * [`Classifier::remove_category`] to drop a category and its counts.
//! * [`Classifier::categorize`] to rank categories for a text.
//! * [`Classifier::to_json`] / [`Classifier::from_json`] for state IO.
//! * [`tokenizer`] to plug in a custom tokenization strategy.
//!
//! ## Counting Model
//!
//! All counters use occurrence-count semantics: the global vocabulary
//! count of a token is the total number of occurrences attributed across
//! all categories, so it always equals the sum of the per-category
//! frequency counts for that token. `learn` adds a document's occurrence
//! counts, `unlearn` subtracts them, and `remove_category` releases
//! exactly the counts the category holds. The vocabulary size used in the
//! smoothing denominator is the number of tokens with a positive count.
//!
//! ## Example
//!
//! ```rust
//! use wordsorter::Classifier;
//!
//! let mut classifier = Classifier::new();
//! classifier
//!     .learn("amazing awesome movie", "positive")
//!     .learn("horrible terrible film", "negative");
//!
//! let result = classifier.categorize("awesome");
//! assert_eq!(result.predicted_category.as_deref(), Some("positive"));
//! assert!(result.likelihoods[0].proba > 0.5);
//! ```
//!
//! ## Concurrency
//!
//! The classifier is a plain owned value with no interior mutability.
//! Mutations must be serialized by the caller; read-only operations
//! (`categorize`, `to_json`) may run concurrently with each other through
//! a shared reference.
#![warn(missing_docs, unused)]

pub mod classifier;
pub mod errors;
pub mod frequency;
pub mod state;
pub mod tokenizer;
pub mod types;

#[doc(inline)]
pub use classifier::{Categorization, Classifier, ClassifierOptions, Likelihood};
#[doc(inline)]
pub use errors::{WordsorterError, WsResult};
#[doc(inline)]
pub use state::STATE_KEYS;
#[doc(inline)]
pub use tokenizer::{Tokenizer, WordTokenizer};
