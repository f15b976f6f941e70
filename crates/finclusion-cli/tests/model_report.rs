//! Artifact summaries shown by the `model` command.

use std::fs;
use std::path::{Path, PathBuf};

use finclusion_classifier::{ColumnDifference, ModelArtifact};
use finclusion_cli::report::{ModelReport, schema_mismatch};
use finclusion_model::FEATURE_NAMES;
use tempfile::TempDir;

fn bundled_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models/financialinclusionmodel.json")
}

fn write_artifact(dir: &Path, names: &[&str]) -> PathBuf {
    let coefficients = vec![0.1; names.len()];
    let json = serde_json::json!({
        "format_version": 1,
        "feature_names": names,
        "estimator": {
            "type": "logistic_regression",
            "coefficients": coefficients,
            "intercept": 0.0
        }
    });
    let path = dir.join("model.json");
    fs::write(&path, json.to_string()).expect("write artifact");
    path
}

#[test]
fn bundled_model_is_compatible() {
    let path = bundled_model_path();
    let artifact = ModelArtifact::load(&path).expect("load bundled model");
    let report = ModelReport::new(&artifact, &path);

    assert!(report.is_compatible());
    assert_eq!(report.feature_count, FEATURE_NAMES.len());
    assert_eq!(report.estimator, "logistic regression");
    assert_eq!(report.sha256, artifact.sha256());
}

#[test]
fn reordered_artifact_is_reported_from_encoder_side() {
    let dir = TempDir::new().expect("temp dir");
    let mut names = FEATURE_NAMES.to_vec();
    names.swap(13, 14);
    let path = write_artifact(dir.path(), &names);
    let artifact = ModelArtifact::load(&path).expect("load artifact");

    let report = ModelReport::new(&artifact, &path);

    assert!(!report.is_compatible());
    let mismatch = report.mismatch.expect("mismatch");
    assert_eq!(
        mismatch.reordered,
        Some(ColumnDifference {
            position: 13,
            provided: "is_married".to_string(),
            expected: "is_single".to_string(),
        })
    );
    assert_eq!(
        mismatch.to_string(),
        "feature schema mismatch: column 13 is 'is_married' but the model expects 'is_single'"
    );
}

#[test]
fn model_only_columns_are_missing_from_encoder_output() {
    let dir = TempDir::new().expect("temp dir");
    let names: Vec<&str> = FEATURE_NAMES
        .iter()
        .copied()
        .filter(|name| *name != "is_single")
        .chain(["is_female"])
        .collect();
    let path = write_artifact(dir.path(), &names);
    let artifact = ModelArtifact::load(&path).expect("load artifact");

    let mismatch = schema_mismatch(&artifact).expect("mismatch");

    assert_eq!(mismatch.missing, vec!["is_female".to_string()]);
    assert_eq!(mismatch.unexpected, vec!["is_single".to_string()]);
}
