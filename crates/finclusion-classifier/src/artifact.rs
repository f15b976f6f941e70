//! Loading and validating serialized classifier artifacts.
//!
//! An artifact is a JSON document:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "feature_names": ["location_type", "cellphone_access", "..."],
//!   "estimator": { "type": "logistic_regression", "coefficients": [...], "intercept": -1.3 }
//! }
//! ```
//!
//! Loading is all-or-nothing: a missing file, malformed JSON, or an
//! inconsistent estimator is an error, and there is no fallback model.

#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use finclusion_model::ClassProbabilities;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hash::{is_sha256_hex, sha256_hex};
use crate::{Classifier, Estimator, ModelError};

/// The artifact layout this build understands.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// On-disk representation of an artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactDocument {
    pub format_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub feature_names: Vec<String>,
    pub estimator: Estimator,
}

/// A validated, read-only classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelArtifact {
    description: Option<String>,
    feature_names: Vec<String>,
    estimator: Estimator,
    sha256: String,
}

impl ModelArtifact {
    /// Reads and validates an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        Self::load_verified(path, None)
    }

    /// Reads an artifact, optionally checking its SHA-256 digest first.
    pub fn load_verified(path: &Path, expected_sha256: Option<&str>) -> Result<Self, ModelError> {
        let start = Instant::now();
        let bytes = std::fs::read(path).map_err(|source| ModelError::io(path, source))?;
        let actual = sha256_hex(&bytes);

        if let Some(expected) = expected_sha256 {
            if !is_sha256_hex(expected) {
                return Err(ModelError::InvalidSha256 {
                    path: path.to_path_buf(),
                    message: "sha256 must be 64 hex characters".to_string(),
                });
            }
            let expected = expected.to_ascii_lowercase();
            if expected != actual {
                return Err(ModelError::Sha256Mismatch {
                    path: path.to_path_buf(),
                    expected,
                    actual,
                });
            }
        }

        let document: ArtifactDocument =
            serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
                origin: path.display().to_string(),
                source,
            })?;
        let artifact = Self::from_document(document, actual)?;

        info!(
            path = %path.display(),
            estimator = artifact.estimator.kind(),
            feature_count = artifact.feature_names.len(),
            duration_ms = start.elapsed().as_millis(),
            "model artifact loaded"
        );
        Ok(artifact)
    }

    /// Parses an artifact held in memory.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let document: ArtifactDocument =
            serde_json::from_str(json).map_err(|source| ModelError::Parse {
                origin: "<inline>".to_string(),
                source,
            })?;
        Self::from_document(document, sha256_hex(json.as_bytes()))
    }

    fn from_document(document: ArtifactDocument, sha256: String) -> Result<Self, ModelError> {
        if document.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: document.format_version,
                supported: ARTIFACT_FORMAT_VERSION,
            });
        }
        if document.feature_names.is_empty() {
            return Err(ModelError::invalid("feature_names is empty"));
        }
        let mut seen = BTreeSet::new();
        for name in &document.feature_names {
            if name.trim().is_empty() {
                return Err(ModelError::invalid("feature_names contains a blank name"));
            }
            if !seen.insert(name.as_str()) {
                return Err(ModelError::invalid(format!(
                    "duplicate feature name: {name}"
                )));
            }
        }
        document.estimator.validate(document.feature_names.len())?;

        Ok(Self {
            description: document.description,
            feature_names: document.feature_names,
            estimator: document.estimator,
            sha256,
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// Lowercase hex SHA-256 of the artifact bytes.
    pub fn sha256(&self) -> &str {
        &self.sha256
    }
}

impl Classifier for ModelArtifact {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_proba(&self, row: &[f64]) -> Result<ClassProbabilities, ModelError> {
        if row.len() != self.feature_names.len() {
            return Err(ModelError::RowLength {
                expected: self.feature_names.len(),
                actual: row.len(),
            });
        }
        Ok(self.estimator.probabilities(row))
    }
}
