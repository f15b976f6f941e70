//! Answer-to-feature encoding.

use finclusion_model::{
    FEATURE_COUNT, FEATURE_NAMES, FeatureVector, JOB_TYPE_PREFIX, JobType, LocationType,
    MaritalStatus, RawAnswer,
};
use tracing::debug;

/// Encodes a boolean condition as a 0/1 feature value.
pub fn indicator(condition: bool) -> i64 {
    i64::from(condition)
}

/// Builds the feature vector for one form submission.
///
/// Column layout (see [`finclusion_model::FEATURE_NAMES`]):
///
/// | Columns | Source |
/// |---------|--------|
/// | 0       | Urban → 1, Rural → 0 |
/// | 1       | cellphone access Yes → 1 |
/// | 2, 3    | household size, age (unchanged) |
/// | 4..12   | job type, one-hot in [`JobType::ALL`] order |
/// | 12      | income Yes → 1 |
/// | 13, 14  | `is_married`, `is_single` (complementary) |
/// | 15..20  | education flags, passed through |
pub fn encode(answer: &RawAnswer) -> FeatureVector {
    let mut values = [0i64; FEATURE_COUNT];

    values[0] = indicator(answer.location == LocationType::Urban);
    values[1] = indicator(answer.cellphone_access.is_yes());
    values[2] = i64::from(answer.household_size.get());
    values[3] = i64::from(answer.age.get());

    for job in JobType::ALL {
        values[4 + job.index()] = indicator(answer.job_type == job);
    }

    values[12] = indicator(answer.has_income.is_yes());
    values[13] = indicator(answer.marital_status == MaritalStatus::Married);
    values[14] = indicator(answer.marital_status == MaritalStatus::Single);

    for (offset, flag) in answer.education.as_array().into_iter().enumerate() {
        values[15 + offset] = indicator(flag);
    }

    debug!(feature_count = FEATURE_COUNT, "encoded answers");
    FeatureVector::from_values(values)
}

/// Short description of how a schema column is derived from the answers.
pub fn encoding_rule(name: &str) -> Option<&'static str> {
    if !FEATURE_NAMES.contains(&name) {
        return None;
    }
    let rule = match name {
        "location_type" => "Urban = 1, Rural = 0",
        "cellphone_access" | "has_income" => "Yes = 1, No = 0",
        "household_size" => "people in household, 1 to 10",
        "age_of_respondent" => "age in years, 18 to 100",
        "is_married" => "Married = 1, Single = 0",
        "is_single" => "Single = 1, Married = 0",
        name if name.starts_with(JOB_TYPE_PREFIX) => "1 if this job type is selected",
        _ => "1 if ticked (independent toggle)",
    };
    Some(rule)
}
