//! Classifier output and the verdict shown to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed drift of `p0 + p1` away from 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ClassLabel {
    /// Class 0: no bank account.
    NoAccount,
    /// Class 1: has a bank account.
    HasAccount,
}

impl ClassLabel {
    pub fn as_u8(self) -> u8 {
        match self {
            ClassLabel::NoAccount => 0,
            ClassLabel::HasAccount => 1,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ClassLabel::NoAccount),
            1 => Some(ClassLabel::HasAccount),
            _ => None,
        }
    }
}

impl From<ClassLabel> for u8 {
    fn from(label: ClassLabel) -> Self {
        label.as_u8()
    }
}

impl TryFrom<u8> for ClassLabel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or_else(|| format!("class label must be 0 or 1, got {value}"))
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Probability of each class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub no_account: f64,
    pub has_account: f64,
}

impl ClassProbabilities {
    pub fn new(no_account: f64, has_account: f64) -> Self {
        Self {
            no_account,
            has_account,
        }
    }

    /// Builds the pair from the positive-class probability.
    pub fn from_positive(has_account: f64) -> Self {
        Self::new(1.0 - has_account, has_account)
    }

    pub fn of(&self, label: ClassLabel) -> f64 {
        match label {
            ClassLabel::NoAccount => self.no_account,
            ClassLabel::HasAccount => self.has_account,
        }
    }

    pub fn sum(&self) -> f64 {
        self.no_account + self.has_account
    }

    /// Both entries finite, non-negative, and summing to 1 within tolerance.
    pub fn is_distribution(&self) -> bool {
        let entries = [self.no_account, self.has_account];
        entries
            .iter()
            .all(|p| p.is_finite() && *p >= 0.0 && *p <= 1.0 + PROBABILITY_TOLERANCE)
            && (self.sum() - 1.0).abs() <= PROBABILITY_TOLERANCE
    }

    /// The more likely class; a tie resolves to class 0.
    pub fn most_likely(&self) -> ClassLabel {
        if self.has_account > self.no_account {
            ClassLabel::HasAccount
        } else {
            ClassLabel::NoAccount
        }
    }
}

/// Outcome of one prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: ClassLabel,
    pub probabilities: ClassProbabilities,
}

impl PredictionResult {
    /// Probability of the predicted class.
    pub fn confidence(&self) -> f64 {
        self.probabilities.of(self.label)
    }

    /// Human-readable verdict quoting the predicted class probability as a
    /// percentage with two decimals.
    pub fn verdict(&self) -> String {
        let percent = self.confidence() * 100.0;
        match self.label {
            ClassLabel::HasAccount => format!(
                "The model predicts that this individual has a bank account with {percent:.2}% probability."
            ),
            ClassLabel::NoAccount => format!(
                "The model predicts that this individual does NOT have a bank account with {percent:.2}% probability."
            ),
        }
    }
}
