use finclusion_model::{ClassLabel, ClassProbabilities};

use crate::ModelError;

/// A fitted binary classifier over a named, ordered set of columns.
pub trait Classifier {
    /// Columns in the order the model was fit on.
    fn feature_names(&self) -> &[String];

    /// Probability of each class for one row.
    fn predict_proba(&self, row: &[f64]) -> Result<ClassProbabilities, ModelError>;

    /// Predicted class for one row. Defaults to the most probable class.
    fn predict(&self, row: &[f64]) -> Result<ClassLabel, ModelError> {
        Ok(self.predict_proba(row)?.most_likely())
    }
}
