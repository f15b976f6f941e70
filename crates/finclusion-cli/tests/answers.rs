//! Reading answers files and layering flag overrides.

use std::fs;

use finclusion_cli::answers::{AnswerOverrides, AnswersFileError, read_answers_file};
use finclusion_model::{JobType, LocationType, MaritalStatus, RawAnswer, YesNo};
use tempfile::TempDir;

#[test]
fn json_answers_file_keeps_defaults_for_omitted_fields() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("answers.json");
    fs::write(
        &path,
        r#"{ "location": "Urban", "job_type": "Formally employed Private" }"#,
    )
    .expect("write answers");

    let answer = read_answers_file(&path).expect("read answers");
    assert_eq!(answer.location, LocationType::Urban);
    assert_eq!(answer.job_type, JobType::FormallyEmployedPrivate);
    assert_eq!(answer.household_size.get(), 3);
    assert_eq!(answer.marital_status, MaritalStatus::Married);
}

#[test]
fn toml_answers_file_is_detected_by_extension() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("answers.TOML");
    fs::write(
        &path,
        "cellphone_access = \"No\"\nage = 72\n\n[education]\ntertiary = true\n",
    )
    .expect("write answers");

    let answer = read_answers_file(&path).expect("read answers");
    assert_eq!(answer.cellphone_access, YesNo::No);
    assert_eq!(answer.age.get(), 72);
    assert!(answer.education.tertiary);
}

#[test]
fn out_of_range_answer_is_rejected_with_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("answers.json");
    fs::write(&path, r#"{ "household_size": 11 }"#).expect("write answers");

    let error = read_answers_file(&path).unwrap_err();
    assert!(matches!(error, AnswersFileError::Json { .. }));
    let message = error.to_string();
    assert!(message.contains("answers.json"), "{message}");
    assert!(message.contains("household size must be between 1 and 10"), "{message}");
}

#[test]
fn missing_answers_file_reports_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = read_answers_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(error, AnswersFileError::Io { .. }));
}

#[test]
fn flags_override_file_values() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("answers.json");
    fs::write(&path, r#"{ "location": "Urban", "marital_status": "Single" }"#)
        .expect("write answers");
    let base = read_answers_file(&path).expect("read answers");

    let overrides = AnswerOverrides {
        location: Some(LocationType::Rural),
        has_income: Some(YesNo::No),
        ..AnswerOverrides::default()
    };
    let answer = overrides.apply(base);

    assert_eq!(answer.location, LocationType::Rural);
    assert_eq!(answer.has_income, YesNo::No);
    assert_eq!(answer.marital_status, MaritalStatus::Single);
}

#[test]
fn empty_overrides_leave_answer_untouched() {
    let answer = AnswerOverrides::default().apply(RawAnswer::default());
    assert_eq!(answer, RawAnswer::default());
}

#[test]
fn bundled_demo_answers_parse() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");

    let urban = read_answers_file(&demos.join("urban-self-employed.toml")).expect("toml demo");
    assert_eq!(urban.job_type, JobType::SelfEmployed);
    assert!(urban.education.secondary);

    let rural = read_answers_file(&demos.join("rural-no-income.json")).expect("json demo");
    assert_eq!(rural.job_type, JobType::NoIncome);
    assert!(rural.education.no_formal);
}
