//! One respondent's answers to the prediction form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{AnswerError, JobType, LocationType, MaritalStatus, YesNo};

/// Declares a numeric answer that only exists inside an inclusive range.
macro_rules! bounded_answer {
    ($(#[$meta:meta])* $name:ident, $field:literal, $min:literal..=$max:literal, default = $default:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "u8")]
        pub struct $name(u8);

        impl $name {
            pub const MIN: u8 = $min;
            pub const MAX: u8 = $max;

            pub fn new(value: i64) -> Result<Self, AnswerError> {
                if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
                    return Err(AnswerError::OutOfRange {
                        field: $field,
                        value,
                        min: Self::MIN,
                        max: Self::MAX,
                    });
                }
                // Range checked above.
                Ok(Self(value as u8))
            }

            pub fn get(self) -> u8 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = AnswerError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = AnswerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let value = trimmed
                    .parse::<i64>()
                    .map_err(|_| AnswerError::NotANumber {
                        field: $field,
                        value: trimmed.to_string(),
                    })?;
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

bounded_answer!(
    /// Number of people in the household, 1 through 10.
    HouseholdSize,
    "household size",
    1..=10,
    default = 3
);

bounded_answer!(
    /// Age of the respondent in years, 18 through 100.
    RespondentAge,
    "age of respondent",
    18..=100,
    default = 30
);

/// Education levels the respondent ticked.
///
/// These are independent toggles: nothing prevents selecting none or
/// several of them, and the encoder passes them through as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EducationFlags {
    pub primary: bool,
    #[serde(rename = "none")]
    pub no_formal: bool,
    pub secondary: bool,
    pub tertiary: bool,
    pub other: bool,
}

impl EducationFlags {
    /// Flags in feature order: primary, none, secondary, tertiary, other.
    pub fn as_array(self) -> [bool; 5] {
        [
            self.primary,
            self.no_formal,
            self.secondary,
            self.tertiary,
            self.other,
        ]
    }

    pub fn selected_count(self) -> usize {
        self.as_array().iter().filter(|flag| **flag).count()
    }
}

/// A fully populated form submission.
///
/// Every field has a default matching the form's initial state, so a
/// partially specified answers file still yields a complete answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawAnswer {
    pub location: LocationType,
    pub cellphone_access: YesNo,
    pub household_size: HouseholdSize,
    pub age: RespondentAge,
    pub marital_status: MaritalStatus,
    pub has_income: YesNo,
    pub job_type: JobType,
    pub education: EducationFlags,
}
