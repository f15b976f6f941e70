//! Domain model for the financial inclusion predictor.
//!
//! The types here describe one respondent's answers ([`RawAnswer`]), the
//! fixed-order numeric encoding a classifier consumes ([`FeatureVector`]),
//! and the classifier's verdict ([`PredictionResult`]).

pub mod answer;
pub mod enums;
pub mod error;
pub mod features;
pub mod prediction;

pub use answer::{EducationFlags, HouseholdSize, RawAnswer, RespondentAge};
pub use enums::{JobType, LocationType, MaritalStatus, YesNo};
pub use error::{AnswerError, Result};
pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, JOB_TYPE_PREFIX};
pub use prediction::{ClassLabel, ClassProbabilities, PROBABILITY_TOLERANCE, PredictionResult};
