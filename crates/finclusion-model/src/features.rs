//! The fixed feature schema and the encoded vector.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of columns the classifier was fit on.
pub const FEATURE_COUNT: usize = 20;

/// Prefix shared by the one-hot job type columns.
pub const JOB_TYPE_PREFIX: &str = "job_type_";

/// Column names in training order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "location_type",
    "cellphone_access",
    "household_size",
    "age_of_respondent",
    "job_type_Farming and Fishing",
    "job_type_Formally employed Government",
    "job_type_Formally employed Private",
    "job_type_Government Dependent",
    "job_type_Informally employed",
    "job_type_No Income",
    "job_type_Other Income",
    "job_type_Self employed",
    "has_income",
    "is_married",
    "is_single",
    "primary_education",
    "no_education",
    "secondary_education",
    "tertiary_education",
    "other_education",
];

/// A single encoded row, ordered as [`FEATURE_NAMES`].
///
/// Values are 0/1 indicators except `household_size` and
/// `age_of_respondent`, which carry the raw answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureVector {
    values: [i64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [i64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn names(&self) -> &'static [&'static str] {
        &FEATURE_NAMES
    }

    pub fn values(&self) -> &[i64; FEATURE_COUNT] {
        &self.values
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Looks up a value by column name.
    pub fn get(&self, name: &str) -> Option<i64> {
        FEATURE_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| self.values[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Values as a model input row.
    pub fn to_f64(&self) -> [f64; FEATURE_COUNT] {
        // All encoded values are small integers, so the conversion is exact.
        self.values.map(|value| value as f64)
    }

    /// Columns whose name starts with `prefix`, in schema order.
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'static str, i64)> + 'a {
        self.iter().filter(move |(name, _)| name.starts_with(prefix))
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
