//! Categorical answers collected from the respondent.
//!
//! Each enum renders and parses the exact label the classifier was trained
//! on. Parsing is lenient about case, whitespace, and punctuation so that
//! `self-employed`, `Self employed`, and `SELF_EMPLOYED` all resolve to the
//! same option.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AnswerError;

/// Reduce a label to lowercase ASCII alphanumerics for comparison.
fn normalize_label(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn parse_option<T: Copy>(
    field: &'static str,
    value: &str,
    options: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, AnswerError> {
    let wanted = normalize_label(value);
    options
        .iter()
        .copied()
        .find(|option| normalize_label(label(*option)) == wanted)
        .ok_or_else(|| AnswerError::UnknownOption {
            field,
            value: value.to_string(),
            expected: options
                .iter()
                .map(|option| label(*option))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Where the respondent lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    #[default]
    Rural,
    Urban,
}

impl LocationType {
    pub const ALL: [LocationType; 2] = [LocationType::Rural, LocationType::Urban];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Rural => "Rural",
            LocationType::Urban => "Urban",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("location type", s, &Self::ALL, Self::as_str)
    }
}

/// A yes/no answer (cellphone access, income presence).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    #[default]
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("yes/no answer", s, &Self::ALL, Self::as_str)
    }
}

/// Marital status as offered by the form.
///
/// The classifier was fit on two complementary indicator columns
/// (`is_married`, `is_single`), both derived from this single choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[default]
    Married,
    Single,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 2] = [MaritalStatus::Married, MaritalStatus::Single];

    pub fn as_str(self) -> &'static str {
        match self {
            MaritalStatus::Married => "Married",
            MaritalStatus::Single => "Single",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaritalStatus {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("marital status", s, &Self::ALL, Self::as_str)
    }
}

/// Job type, one-hot encoded into eight `job_type_*` columns.
///
/// Variant order is the column order of the trained model and must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Farming and Fishing")]
    FarmingAndFishing,
    #[serde(rename = "Formally employed Government")]
    FormallyEmployedGovernment,
    #[serde(rename = "Formally employed Private")]
    FormallyEmployedPrivate,
    #[serde(rename = "Government Dependent")]
    GovernmentDependent,
    #[serde(rename = "Informally employed")]
    InformallyEmployed,
    #[serde(rename = "No Income")]
    NoIncome,
    #[serde(rename = "Other Income")]
    OtherIncome,
    #[serde(rename = "Self employed")]
    SelfEmployed,
}

impl JobType {
    pub const ALL: [JobType; 8] = [
        JobType::FarmingAndFishing,
        JobType::FormallyEmployedGovernment,
        JobType::FormallyEmployedPrivate,
        JobType::GovernmentDependent,
        JobType::InformallyEmployed,
        JobType::NoIncome,
        JobType::OtherIncome,
        JobType::SelfEmployed,
    ];

    /// Returns the label exactly as it appears in the training data.
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FarmingAndFishing => "Farming and Fishing",
            JobType::FormallyEmployedGovernment => "Formally employed Government",
            JobType::FormallyEmployedPrivate => "Formally employed Private",
            JobType::GovernmentDependent => "Government Dependent",
            JobType::InformallyEmployed => "Informally employed",
            JobType::NoIncome => "No Income",
            JobType::OtherIncome => "Other Income",
            JobType::SelfEmployed => "Self employed",
        }
    }

    /// Position of this category among the job-type indicator columns.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("job type", s, &Self::ALL, Self::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_parses_label_variants() {
        assert_eq!(
            "Self employed".parse::<JobType>().unwrap(),
            JobType::SelfEmployed
        );
        assert_eq!(
            "self-employed".parse::<JobType>().unwrap(),
            JobType::SelfEmployed
        );
        assert_eq!(
            "FORMALLY_EMPLOYED_PRIVATE".parse::<JobType>().unwrap(),
            JobType::FormallyEmployedPrivate
        );
    }

    #[test]
    fn job_type_index_follows_enumeration_order() {
        for (position, job) in JobType::ALL.iter().enumerate() {
            assert_eq!(job.index(), position);
        }
    }

    #[test]
    fn unknown_option_lists_expected_labels() {
        let error = "Suburban".parse::<LocationType>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown location type 'Suburban' (expected one of: Rural, Urban)"
        );
    }

    #[test]
    fn yes_no_from_bool() {
        assert_eq!(YesNo::from(true), YesNo::Yes);
        assert!(!YesNo::from(false).is_yes());
    }
}
