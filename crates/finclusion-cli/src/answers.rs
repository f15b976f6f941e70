//! Collecting a [`RawAnswer`] from an answers file and command-line flags.

use std::path::{Path, PathBuf};

use finclusion_model::{
    HouseholdSize, JobType, LocationType, MaritalStatus, RawAnswer, RespondentAge, YesNo,
};

#[derive(Debug, thiserror::Error)]
pub enum AnswersFileError {
    #[error("failed to read answers file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse answers file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse answers file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Reads answers from a `.toml` file, or JSON for any other extension.
///
/// Omitted fields keep the form defaults.
pub fn read_answers_file(path: &Path) -> Result<RawAnswer, AnswersFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| AnswersFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&content).map_err(|source| AnswersFileError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(&content).map_err(|source| AnswersFileError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Answers given as flags, layered over a base answer.
///
/// Education flags can only switch a level on; an answers file is the way
/// to start from a different set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerOverrides {
    pub location: Option<LocationType>,
    pub cellphone_access: Option<YesNo>,
    pub household_size: Option<HouseholdSize>,
    pub age: Option<RespondentAge>,
    pub marital_status: Option<MaritalStatus>,
    pub has_income: Option<YesNo>,
    pub job_type: Option<JobType>,
    pub primary_education: bool,
    pub no_education: bool,
    pub secondary_education: bool,
    pub tertiary_education: bool,
    pub other_education: bool,
}

impl AnswerOverrides {
    pub fn apply(self, base: RawAnswer) -> RawAnswer {
        let mut answer = base;
        if let Some(location) = self.location {
            answer.location = location;
        }
        if let Some(cellphone) = self.cellphone_access {
            answer.cellphone_access = cellphone;
        }
        if let Some(size) = self.household_size {
            answer.household_size = size;
        }
        if let Some(age) = self.age {
            answer.age = age;
        }
        if let Some(status) = self.marital_status {
            answer.marital_status = status;
        }
        if let Some(income) = self.has_income {
            answer.has_income = income;
        }
        if let Some(job) = self.job_type {
            answer.job_type = job;
        }
        answer.education.primary |= self.primary_education;
        answer.education.no_formal |= self.no_education;
        answer.education.secondary |= self.secondary_education;
        answer.education.tertiary |= self.tertiary_education;
        answer.education.other |= self.other_education;
        answer
    }
}
