//! End-to-end classifier scenarios.

use proptest::prelude::*;
use wordsorter::{Classifier, ClassifierOptions, STATE_KEYS};

const TOLERANCE: f64 = 1e-9;

const QUERIES: &[&str] = &[
    "awesome",
    "terrible film",
    "an amazing movie night",
    "nothing the model has seen",
    "",
];

fn sentiment_classifier() -> Classifier {
    let mut classifier = Classifier::new();
    classifier
        .learn("amazing awesome movie", "positive")
        .learn("what a great day", "positive")
        .learn("horrible terrible film", "negative")
        .learn("awful boring plot", "negative");
    classifier
}

#[test]
fn test_sentiment_scenario() {
    let mut classifier = Classifier::new();
    classifier
        .learn("amazing awesome movie", "positive")
        .learn("horrible terrible film", "negative");

    let result = classifier.categorize("awesome");

    assert_eq!(result.predicted_category.as_deref(), Some("positive"));
    assert!(result.likelihoods[0].proba > 0.5);
}

#[test]
fn test_predicted_category_is_argmax() {
    let classifier = sentiment_classifier();

    for query in QUERIES {
        let result = classifier.categorize(query);
        let best = result
            .likelihoods
            .iter()
            .max_by(|a, b| a.proba.total_cmp(&b.proba))
            .unwrap();

        assert_eq!(
            result.predicted_category.as_deref(),
            Some(best.category.as_str()),
            "argmax mismatch for {query:?}",
        );
    }
}

#[test]
fn test_round_trip_preserves_categorize_output() {
    let original = sentiment_classifier();
    let restored = Classifier::from_json(&original.to_json().unwrap()).unwrap();

    for query in QUERIES {
        let before = original.categorize(query);
        let after = restored.categorize(query);

        assert_eq!(
            before.predicted_category, after.predicted_category,
            "prediction changed for {query:?}",
        );
        assert_eq!(before.likelihoods.len(), after.likelihoods.len());

        for (b, a) in before.likelihoods.iter().zip(after.likelihoods.iter()) {
            assert_eq!(b.category, a.category, "ordering changed for {query:?}");
            assert!(
                (b.proba - a.proba).abs() < TOLERANCE,
                "probability drift for {query:?}: {} vs {}",
                b.proba,
                a.proba,
            );
        }
    }
}

#[test]
fn test_state_keys_contract() {
    let state = sentiment_classifier().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&state).unwrap();
    let fields = value.as_object().unwrap();

    assert_eq!(fields.len(), STATE_KEYS.len());
    for key in STATE_KEYS {
        assert!(fields.contains_key(key), "missing {key}");
    }
}

#[test]
fn test_zero_category_classifier_predicts_nothing() {
    let classifier = Classifier::new();
    let result = classifier.categorize("any text at all");

    assert!(result.likelihoods.is_empty());
    assert_eq!(result.predicted_category, None);
}

#[test]
fn test_fully_unlearned_classifier_predicts_nothing() {
    let mut classifier = Classifier::new();
    classifier.learn("only document", "only");
    classifier.unlearn("only document", "only");

    let result = classifier.categorize("only");

    assert!(result.likelihoods.is_empty());
    assert_eq!(result.predicted_category, None);
}

#[test]
fn test_learn_unlearn_inverse_for_single_document_category() {
    let mut classifier = sentiment_classifier();

    let total_documents = classifier.total_documents();
    let vocabulary_size = classifier.vocabulary_size();

    classifier.learn("quirky offbeat comedy", "neutral");
    classifier.unlearn("quirky offbeat comedy", "neutral");

    assert_eq!(classifier.total_documents(), total_documents);
    assert_eq!(classifier.vocabulary_size(), vocabulary_size);
    assert_eq!(classifier.doc_count("neutral"), 0);
    assert_eq!(classifier.word_count("neutral"), 0);
    assert_eq!(classifier.token_count("quirky", "neutral"), 0);
}

#[test]
fn test_remove_category_cleans_vocabulary() {
    let mut classifier = sentiment_classifier();
    classifier.remove_category("negative");

    for token in ["horrible", "terrible", "film", "awful", "boring", "plot"] {
        assert_eq!(classifier.vocabulary_count(token), 0, "{token} survived");
    }
    assert!(!classifier.has_category("negative"));

    let result = classifier.categorize("terrible film");
    assert_eq!(result.predicted_category.as_deref(), Some("positive"));
}

#[test]
fn test_custom_tokenizer_strategy() {
    let options = ClassifierOptions::new().with_tokenizer(|text: &str| {
        text.split(',')
            .map(|piece| piece.trim().to_lowercase())
            .collect::<Vec<_>>()
    });

    let mut classifier = Classifier::with_options(options);
    classifier
        .learn("Salmon, Tuna, Trout", "fish")
        .learn("Oak, Maple, Birch", "trees");

    // The comma tokenizer keeps multi-word pieces intact.
    assert_eq!(classifier.vocabulary_size(), 6);
    assert_eq!(
        classifier.categorize("tuna, trout").predicted_category.as_deref(),
        Some("fish"),
    );
}

#[test]
fn test_restored_classifier_keeps_learning() {
    let original = sentiment_classifier();
    let mut restored = Classifier::from_json(&original.to_json().unwrap()).unwrap();

    restored.learn("dull and horrible", "negative");

    assert_eq!(restored.total_documents(), original.total_documents() + 1);
    assert_eq!(
        restored.categorize("dull").predicted_category.as_deref(),
        Some("negative"),
    );
}

proptest! {
    #[test]
    fn prop_probabilities_normalize(
        documents in proptest::collection::vec(
            (
                "[a-e]{1,4}( [a-e]{1,4}){0,4}",
                prop_oneof!(
                    Just("red".to_owned()),
                    Just("green".to_owned()),
                    Just("blue".to_owned()),
                ),
            ),
            1..12,
        ),
        query in "[a-e]{1,4}( [a-e]{1,4}){0,3}",
    ) {
        let mut classifier = Classifier::new();
        for (text, category) in &documents {
            classifier.learn(text, category);
        }

        let result = classifier.categorize(&query);

        let total: f64 = result.likelihoods.iter().map(|l| l.proba).sum();
        prop_assert!((total - 1.0).abs() < TOLERANCE, "probas summed to {total}");

        let best = result
            .likelihoods
            .iter()
            .max_by(|a, b| a.proba.total_cmp(&b.proba))
            .unwrap();
        prop_assert_eq!(
            result.predicted_category.as_deref(),
            Some(best.category.as_str()),
        );
    }
}
