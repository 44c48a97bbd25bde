//! Inference wrapper around the pre-trained classifier
//!
//! The classifier is an opaque, externally-trained capability. Its class
//! ordering is part of the contract (`Classifier::classes`), and the
//! wrapper looks probabilities up by class label, never by position, so a
//! model retrained with a different internal ordering cannot silently
//! flip the reported probability.

pub mod logistic;

pub use logistic::LogisticModel;

use anyhow::{anyhow, Result};

/// Class labels as the classifier was trained on them.
pub const CLASS_DEFAULT: &str = "Default";
pub const CLASS_NON_DEFAULT: &str = "Non-default";

/// The eight financial figures the classifier consumes, in its fixed
/// positional order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub capital_expenditure: f64,
    pub cash_at_bank: f64,
    pub ebitda: f64,
    pub employees_remuneration: f64,
    pub profit_for_year: f64,
    pub retained_earnings: f64,
    pub total_assets: f64,
    pub total_equity: f64,
}

impl FeatureVector {
    /// The positional layout the classifier was trained against.
    pub fn to_array(&self) -> [f64; 8] {
        [
            self.capital_expenditure,
            self.cash_at_bank,
            self.ebitda,
            self.employees_remuneration,
            self.profit_for_year,
            self.retained_earnings,
            self.total_assets,
            self.total_equity,
        ]
    }
}

/// The pre-trained classifier capability. Inputs are passed through
/// unvalidated; any failure the implementation raises propagates
/// unchanged to the caller.
pub trait Classifier {
    /// Label order of the `predict_probability` output.
    fn classes(&self) -> &[String];

    /// Discrete class label for one feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<String>;

    /// Probability per class, ordered as `classes()`.
    fn predict_probability(&self, features: &FeatureVector) -> Result<Vec<f64>>;
}

/// Human-facing prediction result.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// `"default"` or `"not default"`.
    pub label: String,
    /// Probability of the reported label, in percent.
    pub probability_percent: f64,
}

/// Map the classifier's raw output into the default / not-default
/// decision: a `Default` prediction is reported with the probability of
/// the `Default` class, anything else as `not default` with the
/// probability of `Non-default`.
pub fn predict_default(model: &dyn Classifier, features: &FeatureVector) -> Result<Prediction> {
    let predicted = model.predict(features)?;
    let probabilities = model.predict_probability(features)?;

    let (label, class) = if predicted == CLASS_DEFAULT {
        ("default", CLASS_DEFAULT)
    } else {
        ("not default", CLASS_NON_DEFAULT)
    };

    let index = model
        .classes()
        .iter()
        .position(|c| c == class)
        .ok_or_else(|| anyhow!("Classifier does not expose a '{}' class", class))?;

    let probability = probabilities.get(index).copied().ok_or_else(|| {
        anyhow!(
            "Classifier returned {} probabilities for {} classes",
            probabilities.len(),
            model.classes().len()
        )
    })?;

    Ok(Prediction {
        label: label.to_string(),
        probability_percent: probability * 100.0,
    })
}
