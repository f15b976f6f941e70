//! Feature encoding for the financial inclusion classifier.
//!
//! [`encode`] is a total, pure function: every [`RawAnswer`] maps to exactly
//! one [`FeatureVector`] in the column order the model was fit on.
//!
//! [`RawAnswer`]: finclusion_model::RawAnswer
//! [`FeatureVector`]: finclusion_model::FeatureVector

pub mod encoder;
pub mod education;

pub use education::{EducationNote, education_note};
pub use encoder::{encode, encoding_rule, indicator};
