//! Inference for the financial inclusion classifier.
//!
//! A [`ModelArtifact`] is loaded once at startup and never mutated. A
//! [`Predictor`] borrows it, checks that an encoded
//! [`FeatureVector`](finclusion_model::FeatureVector) lines up with the
//! columns the model was fit on, and returns a
//! [`PredictionResult`](finclusion_model::PredictionResult).

#![deny(unsafe_code)]

pub mod artifact;
pub mod classifier;
pub mod error;
pub mod estimator;
pub mod hash;
pub mod predictor;
pub mod schema;

pub use artifact::{ARTIFACT_FORMAT_VERSION, ArtifactDocument, ModelArtifact};
pub use classifier::Classifier;
pub use error::ModelError;
pub use estimator::{DecisionForest, DecisionTree, Estimator, LogisticRegression, TreeNode};
pub use predictor::Predictor;
pub use schema::{ColumnDifference, SchemaMismatch};
