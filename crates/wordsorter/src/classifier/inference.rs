//! # Inference

use crate::classifier::Classifier;
use crate::frequency::frequency_table;
use crate::tokenizer::Tokenizer;

/// Per-category scoring detail from [`Classifier::categorize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Likelihood {
    /// The category name.
    pub category: String,

    /// Unnormalized score:
    /// `ln(prior) + Σ freq(token) · ln P(token | category)`.
    pub log_likelihood: f64,

    /// Log-posterior after log-sum-exp normalization.
    pub log_proba: f64,

    /// Posterior probability. Across all likelihood entries these sum
    /// to 1.
    pub proba: f64,
}

/// Ranked result of [`Classifier::categorize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Categorization {
    /// Per-category likelihoods, sorted by descending probability with
    /// category name as tie-break.
    pub likelihoods: Vec<Likelihood>,

    /// The top-ranked category. `None` when the classifier has no
    /// registered categories or has learned no documents.
    pub predicted_category: Option<String>,
}

impl Classifier {
    /// Determine the most likely category for `text`.
    ///
    /// Scores every registered category with its document-frequency prior
    /// and Laplace-smoothed token likelihoods, then normalizes across
    /// categories with a max-shifted log-sum-exp.
    ///
    /// A classifier with no registered categories, or one that has
    /// learned no documents, produces an empty ranking and no prediction.
    /// A registered category that currently holds no documents scores
    /// `-inf` (probability zero).
    pub fn categorize(
        &self,
        text: &str,
    ) -> Categorization {
        let tokens = self.options.tokenizer().tokenize(text);
        let table = frequency_table(tokens);

        if self.categories.is_empty() || self.total_documents == 0 {
            return Categorization {
                likelihoods: Vec::new(),
                predicted_category: None,
            };
        }

        let mut names: Vec<&String> = self.categories.iter().collect();
        names.sort_unstable();

        let mut likelihoods: Vec<Likelihood> = names
            .into_iter()
            .map(|category| {
                let docs = self.doc_count.get(category).copied().unwrap_or(0);
                let prior = docs as f64 / self.total_documents as f64;

                let mut log_likelihood = prior.ln();
                for (token, frequency_in_text) in &table {
                    log_likelihood += *frequency_in_text as f64
                        * self.token_probability(token, category).ln();
                }

                if log_likelihood == f64::NEG_INFINITY {
                    log::debug!("category {category:?} had -infinity odds");
                }

                Likelihood {
                    category: category.clone(),
                    log_likelihood,
                    log_proba: 0.0,
                    proba: 0.0,
                }
            })
            .collect();

        let log_prob_x =
            log_sum_exp(likelihoods.iter().map(|likelihood| likelihood.log_likelihood));

        for likelihood in &mut likelihoods {
            if log_prob_x == f64::NEG_INFINITY {
                likelihood.log_proba = f64::NEG_INFINITY;
                likelihood.proba = 0.0;
            } else {
                likelihood.log_proba = likelihood.log_likelihood - log_prob_x;
                likelihood.proba = likelihood.log_proba.exp();
            }
        }

        // Stable sort keeps the name-sorted base order on probability ties.
        likelihoods.sort_by(|a, b| b.proba.total_cmp(&a.proba));

        let predicted_category = likelihoods
            .first()
            .map(|likelihood| likelihood.category.clone());

        Categorization {
            likelihoods,
            predicted_category,
        }
    }

    /// Laplace-smoothed probability of `token` under `category`:
    /// `(count(token, category) + 1) / (word_count(category) + vocabulary_size)`.
    pub fn token_probability(
        &self,
        token: &str,
        category: &str,
    ) -> f64 {
        let token_count = self.token_count(token, category);
        let word_count = self.word_count(category);

        (token_count + 1) as f64 / (word_count + self.vocabulary_size) as f64
    }
}

/// Numerically stable `ln(Σ exp(xᵢ))`.
///
/// Shifts by the maximum before exponentiating, so large-magnitude
/// negative log-likelihoods do not underflow to a zero sum.
fn log_sum_exp(values: impl Iterator<Item = f64>) -> f64 {
    let values: Vec<f64> = values.collect();

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }

    let shifted_sum: f64 = values.iter().map(|value| (value - max).exp()).sum();
    max + shifted_sum.ln()
}
