//! Machine-readable output of the encode and predict commands.

use std::path::{Path, PathBuf};

use finclusion_classifier::{Classifier, ModelArtifact, SchemaMismatch};
use finclusion_encode::encoding_rule;
use finclusion_model::{FEATURE_NAMES, FeatureVector, PredictionResult};
use serde::Serialize;

/// JSON document printed by `encode` and `predict` with `--output json`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport<'a> {
    pub features: &'a FeatureVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
}

impl<'a> PredictionReport<'a> {
    pub fn features_only(features: &'a FeatureVector) -> Self {
        Self {
            features,
            prediction: None,
            verdict: None,
        }
    }

    pub fn with_prediction(features: &'a FeatureVector, result: PredictionResult) -> Self {
        Self {
            features,
            prediction: Some(result),
            verdict: Some(result.verdict()),
        }
    }
}

/// One line of the `schema` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRow {
    pub position: usize,
    pub name: &'static str,
    pub rule: &'static str,
}

/// The encoder schema with the derivation rule of each column.
pub fn schema_rows() -> Vec<SchemaRow> {
    FEATURE_NAMES
        .iter()
        .copied()
        .enumerate()
        .map(|(position, name)| SchemaRow {
            position,
            name,
            rule: encoding_rule(name).unwrap_or("-"),
        })
        .collect()
}

/// Columns of `classifier` that disagree with the encoder, seen from the
/// encoder's side: `missing` lists columns the model expects but the encoder
/// never produces.
pub fn schema_mismatch<C: Classifier + ?Sized>(classifier: &C) -> Option<SchemaMismatch> {
    SchemaMismatch::compare(&FEATURE_NAMES, classifier.feature_names())
}

/// What the `model` command shows about an artifact.
#[derive(Debug, Clone)]
pub struct ModelReport {
    pub path: PathBuf,
    pub sha256: String,
    pub estimator: String,
    pub description: Option<String>,
    pub feature_count: usize,
    pub mismatch: Option<SchemaMismatch>,
}

impl ModelReport {
    pub fn new(artifact: &ModelArtifact, path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            sha256: artifact.sha256().to_string(),
            estimator: artifact.estimator().to_string(),
            description: artifact.description().map(str::to_string),
            feature_count: artifact.feature_names().len(),
            mismatch: schema_mismatch(artifact),
        }
    }

    /// True when the artifact can score encoder output as-is.
    pub fn is_compatible(&self) -> bool {
        self.mismatch.is_none()
    }
}
