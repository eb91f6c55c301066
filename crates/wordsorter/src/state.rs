//! # State Serialization
//!
//! Export/import of the classifier's full learned state as a flat JSON
//! record. The field set is the published [`STATE_KEYS`] contract; both
//! directions honor those names verbatim.
//!
//! The tokenizer strategy is a function value and does not round-trip;
//! [`Classifier::from_value_with_options`] lets an importer re-supply
//! one, and the plain import paths fall back to the default tokenizer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classifier::{Classifier, ClassifierOptions};
use crate::errors::{WordsorterError, WsResult};
use crate::types::WsHashMap;

/// The fixed set of field names in a serialized classifier state.
///
/// This is a stable, published contract: [`Classifier::to_json`] writes
/// exactly these fields, and the import paths require every one of them
/// to be present.
pub const STATE_KEYS: [&str; 8] = [
    "categories",
    "docCount",
    "totalDocuments",
    "vocabulary",
    "vocabularySize",
    "wordCount",
    "wordFrequencyCount",
    "options",
];

/// Serializable subset of [`ClassifierOptions`].
///
/// Currently empty: the only option is the tokenizer strategy, which is
/// not serializable.
#[derive(Debug, Default, Serialize, Deserialize)]
struct OptionsRecord {}

/// Borrowed export view of a classifier's state.
///
/// Field declaration order matches [`STATE_KEYS`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateView<'a> {
    categories: WsHashMap<&'a str, bool>,
    doc_count: &'a WsHashMap<String, u64>,
    total_documents: u64,
    vocabulary: &'a WsHashMap<String, u64>,
    vocabulary_size: u64,
    word_count: &'a WsHashMap<String, u64>,
    word_frequency_count: &'a WsHashMap<String, WsHashMap<String, u64>>,
    options: OptionsRecord,
}

/// Owned decoded form of a serialized state record.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateRecord {
    categories: WsHashMap<String, bool>,
    doc_count: WsHashMap<String, u64>,
    total_documents: u64,
    vocabulary: WsHashMap<String, u64>,
    vocabulary_size: u64,
    word_count: WsHashMap<String, u64>,
    word_frequency_count: WsHashMap<String, WsHashMap<String, u64>>,
    options: Value,
}

/// The JSON kind of a value, for shape-error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Classifier {
    /// Export the full learned state as a JSON string.
    ///
    /// The record holds exactly the [`STATE_KEYS`] fields; `categories`
    /// is a `{name: true}` marker map.
    pub fn to_json(&self) -> WsResult<String> {
        let view = StateView {
            categories: self
                .categories
                .iter()
                .map(|name| (name.as_str(), true))
                .collect(),
            doc_count: &self.doc_count,
            total_documents: self.total_documents,
            vocabulary: &self.vocabulary,
            vocabulary_size: self.vocabulary_size,
            word_count: &self.word_count,
            word_frequency_count: &self.word_frequency_count,
            options: OptionsRecord::default(),
        };

        serde_json::to_string(&view)
            .map_err(|source| WordsorterError::StateEncode(source.to_string()))
    }

    /// Restore a classifier from a JSON string produced by
    /// [`to_json`](Self::to_json).
    ///
    /// ## Arguments
    /// * `input` - The encoded state.
    ///
    /// ## Returns
    /// A new classifier carrying the decoded state, or a descriptive
    /// error if the input does not parse, is not an object, or is missing
    /// a state field.
    pub fn from_json(input: &str) -> WsResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|source| WordsorterError::StateParse(source.to_string()))?;

        Self::from_value(value)
    }

    /// Restore a classifier from an already-decoded state record.
    ///
    /// Uses default options (the default word tokenizer); see
    /// [`from_value_with_options`](Self::from_value_with_options) to
    /// re-supply a custom tokenizer strategy.
    pub fn from_value(value: Value) -> WsResult<Self> {
        Self::from_value_with_options(value, ClassifierOptions::default())
    }

    /// Restore a classifier from an already-decoded state record, using
    /// `options` for the non-serializable configuration.
    ///
    /// Every [`STATE_KEYS`] field must be present in the record; presence
    /// is checked by key, so legitimately empty or zero values (an empty
    /// `categories` map, `totalDocuments: 0`) import fine.
    ///
    /// ## Arguments
    /// * `value` - The decoded state record.
    /// * `options` - The configuration for the restored classifier.
    pub fn from_value_with_options(
        value: Value,
        options: ClassifierOptions,
    ) -> WsResult<Self> {
        let Value::Object(fields) = &value else {
            return Err(WordsorterError::StateShape {
                kind: value_kind(&value),
            });
        };

        for key in STATE_KEYS {
            if !fields.contains_key(key) {
                return Err(WordsorterError::MissingStateField { field: key });
            }
        }

        let record: StateRecord = serde_json::from_value(value)
            .map_err(|source| WordsorterError::StateParse(source.to_string()))?;

        if !record.options.is_object() {
            return Err(WordsorterError::InvalidOptions(
                value_kind(&record.options).to_owned(),
            ));
        }

        let mut classifier = Classifier::with_options(options);
        classifier.categories = record
            .categories
            .into_iter()
            .filter(|(_, marked)| *marked)
            .map(|(name, _)| name)
            .collect();
        classifier.doc_count = record.doc_count;
        classifier.total_documents = record.total_documents;
        classifier.vocabulary = record.vocabulary;
        classifier.vocabulary_size = record.vocabulary_size;
        classifier.word_count = record.word_count;
        classifier.word_frequency_count = record.word_frequency_count;

        Ok(classifier)
    }
}
