//! Fitted estimators that can be described in a model artifact.
//!
//! Two families are supported:
//!
//! - **Logistic regression**: `p1 = sigmoid(w · x + b)`.
//! - **Decision forest**: an ensemble of binary trees stored as flat node
//!   arrays. A split sends `x[feature] <= threshold` to `left`, otherwise to
//!   `right`. Leaves carry per-class weights (counts or probabilities); the
//!   forest probability is the mean of the normalized leaf distributions.

use std::fmt;

use finclusion_model::ClassProbabilities;
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    LogisticRegression(LogisticRegression),
    DecisionForest(DecisionForest),
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::LogisticRegression(_) => "logistic_regression",
            Estimator::DecisionForest(_) => "decision_forest",
        }
    }

    /// Checks internal consistency against the declared feature count.
    pub fn validate(&self, feature_count: usize) -> Result<(), ModelError> {
        match self {
            Estimator::LogisticRegression(model) => model.validate(feature_count),
            Estimator::DecisionForest(model) => model.validate(feature_count),
        }
    }

    /// Class probabilities for a row already known to have the right length.
    pub fn probabilities(&self, row: &[f64]) -> ClassProbabilities {
        match self {
            Estimator::LogisticRegression(model) => model.probabilities(row),
            Estimator::DecisionForest(model) => model.probabilities(row),
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimator::LogisticRegression(_) => f.write_str("logistic regression"),
            Estimator::DecisionForest(forest) => {
                write!(f, "decision forest ({} trees)", forest.trees.len())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    fn validate(&self, feature_count: usize) -> Result<(), ModelError> {
        if self.coefficients.len() != feature_count {
            return Err(ModelError::invalid(format!(
                "logistic regression has {} coefficients for {} features",
                self.coefficients.len(),
                feature_count
            )));
        }
        if let Some(index) = self.coefficients.iter().position(|w| !w.is_finite()) {
            return Err(ModelError::invalid(format!(
                "coefficient {index} is not finite"
            )));
        }
        if !self.intercept.is_finite() {
            return Err(ModelError::invalid("intercept is not finite"));
        }
        Ok(())
    }

    /// Linear decision value `w · x + b`.
    pub fn decision(&self, row: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    fn probabilities(&self, row: &[f64]) -> ClassProbabilities {
        ClassProbabilities::from_positive(sigmoid(self.decision(row)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionForest {
    pub trees: Vec<DecisionTree>,
}

impl DecisionForest {
    fn validate(&self, feature_count: usize) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::invalid("decision forest has no trees"));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(feature_count)
                .map_err(|message| ModelError::invalid(format!("tree {index}: {message}")))?;
        }
        Ok(())
    }

    fn probabilities(&self, row: &[f64]) -> ClassProbabilities {
        let (mut no_account, mut has_account) = (0.0, 0.0);
        for tree in &self.trees {
            let [p0, p1] = tree.leaf_distribution(row);
            no_account += p0;
            has_account += p1;
        }
        let count = self.trees.len() as f64;
        ClassProbabilities::new(no_account / count, has_account / count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

impl DecisionTree {
    /// Children must come after their parent, which rules out cycles and
    /// guarantees that traversal terminates.
    fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        let len = self.nodes.len();
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= feature_count {
                        return Err(format!(
                            "node {index} splits on feature {feature}, model has {feature_count}"
                        ));
                    }
                    if threshold.is_nan() {
                        return Err(format!("node {index} has a NaN threshold"));
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= len {
                            return Err(format!(
                                "node {index} points to invalid child {child}"
                            ));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != 2 {
                        return Err(format!(
                            "leaf {index} has {} class weights, expected 2",
                            value.len()
                        ));
                    }
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(format!("leaf {index} has a negative or non-finite weight"));
                    }
                    let total = value.iter().sum::<f64>();
                    if !total.is_finite() || total <= 0.0 {
                        return Err(format!(
                            "leaf {index} total weight {total} cannot be normalized"
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Normalized class distribution at the leaf reached by `row`.
    fn leaf_distribution(&self, row: &[f64]) -> [f64; 2] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value } => {
                    let total = value[0] + value[1];
                    return [value[0] / total, value[1] / total];
                }
            }
        }
    }
}
