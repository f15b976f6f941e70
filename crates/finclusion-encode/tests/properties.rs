//! Property-based tests for the feature encoder.
//!
//! Invariants that hold for every valid answer:
//! - exactly 20 fields in schema order
//! - exactly one job type indicator set, matching the selection
//! - `is_married + is_single == 1`
//! - encoding is deterministic

use proptest::prelude::*;

use finclusion_encode::encode;
use finclusion_model::{
    EducationFlags, FEATURE_NAMES, HouseholdSize, JOB_TYPE_PREFIX, JobType, LocationType,
    MaritalStatus, RawAnswer, RespondentAge, YesNo,
};

fn any_answer() -> impl Strategy<Value = RawAnswer> {
    (
        prop::sample::select(LocationType::ALL.to_vec()),
        prop::sample::select(YesNo::ALL.to_vec()),
        HouseholdSize::MIN..=HouseholdSize::MAX,
        RespondentAge::MIN..=RespondentAge::MAX,
        prop::sample::select(MaritalStatus::ALL.to_vec()),
        prop::sample::select(YesNo::ALL.to_vec()),
        prop::sample::select(JobType::ALL.to_vec()),
        prop::array::uniform5(any::<bool>()),
    )
        .prop_map(
            |(location, cellphone, household, age, marital, income, job, education)| RawAnswer {
                location,
                cellphone_access: cellphone,
                household_size: HouseholdSize::new(i64::from(household)).unwrap(),
                age: RespondentAge::new(i64::from(age)).unwrap(),
                marital_status: marital,
                has_income: income,
                job_type: job,
                education: EducationFlags {
                    primary: education[0],
                    no_formal: education[1],
                    secondary: education[2],
                    tertiary: education[3],
                    other: education[4],
                },
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_vector_matches_schema(answer in any_answer()) {
        let vector = encode(&answer);
        let names: Vec<&str> = vector.iter().map(|(name, _)| name).collect();
        prop_assert_eq!(names.len(), 20);
        prop_assert_eq!(names, FEATURE_NAMES.to_vec());
    }

    #[test]
    fn prop_job_type_is_one_hot(answer in any_answer()) {
        let vector = encode(&answer);
        let hot: Vec<&str> = vector
            .with_prefix(JOB_TYPE_PREFIX)
            .filter(|(_, value)| *value == 1)
            .map(|(name, _)| name)
            .collect();
        prop_assert_eq!(hot.len(), 1);
        prop_assert_eq!(
            hot[0].strip_prefix(JOB_TYPE_PREFIX),
            Some(answer.job_type.as_str())
        );
        let total: i64 = vector.with_prefix(JOB_TYPE_PREFIX).map(|(_, value)| value).sum();
        prop_assert_eq!(total, 1);
    }

    #[test]
    fn prop_marital_fields_are_complementary(answer in any_answer()) {
        let vector = encode(&answer);
        let married = vector.get("is_married").unwrap();
        let single = vector.get("is_single").unwrap();
        prop_assert_eq!(married + single, 1);
        prop_assert_eq!(married == 1, answer.marital_status == MaritalStatus::Married);
    }

    #[test]
    fn prop_encoding_is_deterministic(answer in any_answer()) {
        prop_assert_eq!(encode(&answer), encode(&answer));
    }

    #[test]
    fn prop_indicators_are_binary(answer in any_answer()) {
        let vector = encode(&answer);
        for (name, value) in vector.iter() {
            if name == "household_size" || name == "age_of_respondent" {
                continue;
            }
            prop_assert!(value == 0 || value == 1, "{} = {}", name, value);
        }
        prop_assert_eq!(
            vector.get("household_size"),
            Some(i64::from(answer.household_size.get()))
        );
        prop_assert_eq!(
            vector.get("age_of_respondent"),
            Some(i64::from(answer.age.get()))
        );
    }
}
