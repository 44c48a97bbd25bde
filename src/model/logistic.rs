//! Logistic model artifact
//!
//! The deployed classifier ships as a JSON artifact holding eight
//! coefficients, a bias, and the class-label order of its probability
//! output. Scoring is a sigmoid over the weighted feature vector.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Classifier, FeatureVector, CLASS_DEFAULT, CLASS_NON_DEFAULT};

/// A pre-trained logistic classifier loaded from a JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// One coefficient per feature, in the positional order of
    /// [`FeatureVector::to_array`].
    pub weights: [f64; 8],
    pub bias: f64,
    /// Label order of the probability output; recorded in the artifact
    /// so the wrapper never has to guess it.
    pub classes: Vec<String>,
}

impl LogisticModel {
    /// Load the artifact from disk and sanity-check its class labels.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open model artifact: {}", path.display()))?;
        let model: LogisticModel = serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse model artifact: {}", path.display()))?;

        let knows = |label: &str| model.classes.iter().any(|c| c == label);
        if model.classes.len() != 2 || !knows(CLASS_DEFAULT) || !knows(CLASS_NON_DEFAULT) {
            anyhow::bail!(
                "Model artifact must declare exactly the classes '{}' and '{}', got {:?}",
                CLASS_DEFAULT,
                CLASS_NON_DEFAULT,
                model.classes
            );
        }

        Ok(model)
    }

    fn probability_of_default(&self, features: &FeatureVector) -> f64 {
        let score: f64 = features
            .to_array()
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.bias;

        1.0 / (1.0 + (-score).exp())
    }
}

impl Classifier for LogisticModel {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict(&self, features: &FeatureVector) -> Result<String> {
        let p = self.probability_of_default(features);
        if p >= 0.5 {
            Ok(CLASS_DEFAULT.to_string())
        } else {
            Ok(CLASS_NON_DEFAULT.to_string())
        }
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let p = self.probability_of_default(features);
        Ok(self
            .classes
            .iter()
            .map(|c| if c == CLASS_DEFAULT { p } else { 1.0 - p })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_features() -> FeatureVector {
        FeatureVector {
            capital_expenditure: 0.0,
            cash_at_bank: 0.0,
            ebitda: 0.0,
            employees_remuneration: 0.0,
            profit_for_year: 0.0,
            retained_earnings: 0.0,
            total_assets: 0.0,
            total_equity: 0.0,
        }
    }

    #[test]
    fn test_zero_weights_score_even_odds() {
        let model = LogisticModel {
            weights: [0.0; 8],
            bias: 0.0,
            classes: vec![CLASS_DEFAULT.to_string(), CLASS_NON_DEFAULT.to_string()],
        };

        let probs = model.predict_probability(&zero_features()).unwrap();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_bias_predicts_non_default() {
        let model = LogisticModel {
            weights: [0.0; 8],
            bias: -3.0,
            classes: vec![CLASS_DEFAULT.to_string(), CLASS_NON_DEFAULT.to_string()],
        };

        assert_eq!(model.predict(&zero_features()).unwrap(), CLASS_NON_DEFAULT);
    }

    #[test]
    fn test_probabilities_follow_declared_class_order() {
        let model = LogisticModel {
            weights: [0.0; 8],
            bias: 2.0,
            classes: vec![CLASS_NON_DEFAULT.to_string(), CLASS_DEFAULT.to_string()],
        };

        let probs = model.predict_probability(&zero_features()).unwrap();
        // Default is declared second here, so its probability sits at index 1
        assert!(probs[1] > 0.85);
        assert!(probs[0] < 0.15);
    }
}
