//! Applying a loaded classifier to an encoded feature vector.

use std::time::Instant;

use finclusion_model::{FeatureVector, PredictionResult};
use tracing::{debug, info_span};

use crate::{Classifier, ModelError, SchemaMismatch};

/// Runs predictions against a classifier that outlives it.
///
/// The classifier is loaded once and only ever read, so the predictor just
/// borrows it.
pub struct Predictor<'a, C: Classifier + ?Sized> {
    classifier: &'a C,
}

impl<'a, C: Classifier + ?Sized> Predictor<'a, C> {
    pub fn new(classifier: &'a C) -> Self {
        Self { classifier }
    }

    /// Fails when the vector's columns differ from the model's by name or order.
    pub fn check_schema(&self, features: &FeatureVector) -> Result<(), SchemaMismatch> {
        match SchemaMismatch::compare(features.names(), self.classifier.feature_names()) {
            Some(mismatch) => Err(mismatch),
            None => Ok(()),
        }
    }

    /// Predicts the class and class probabilities for one vector.
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, ModelError> {
        let span = info_span!("predict", feature_count = features.len());
        let _guard = span.enter();
        let start = Instant::now();

        self.check_schema(features)?;
        let row = features.to_f64();
        let label = self.classifier.predict(&row)?;
        let probabilities = self.classifier.predict_proba(&row)?;
        if !probabilities.is_distribution() {
            return Err(ModelError::InvalidProbabilities {
                no_account: probabilities.no_account,
                has_account: probabilities.has_account,
            });
        }

        debug!(
            duration_us = start.elapsed().as_micros(),
            "prediction complete"
        );
        Ok(PredictionResult {
            label,
            probabilities,
        })
    }
}
