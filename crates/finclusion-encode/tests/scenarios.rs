//! End-to-end encoding scenarios.

use finclusion_encode::encode;
use finclusion_model::{
    EducationFlags, HouseholdSize, JobType, LocationType, MaritalStatus, RawAnswer,
    RespondentAge, YesNo,
};

fn urban_self_employed(marital_status: MaritalStatus) -> RawAnswer {
    RawAnswer {
        location: LocationType::Urban,
        cellphone_access: YesNo::Yes,
        household_size: HouseholdSize::new(3).unwrap(),
        age: RespondentAge::new(30).unwrap(),
        marital_status,
        has_income: YesNo::Yes,
        job_type: JobType::SelfEmployed,
        education: EducationFlags {
            secondary: true,
            ..EducationFlags::default()
        },
    }
}

#[test]
fn urban_married_self_employed_secondary() {
    let vector = encode(&urban_self_employed(MaritalStatus::Married));

    assert_eq!(vector.get("location_type"), Some(1));
    assert_eq!(vector.get("cellphone_access"), Some(1));
    assert_eq!(vector.get("household_size"), Some(3));
    assert_eq!(vector.get("age_of_respondent"), Some(30));
    assert_eq!(vector.get("job_type_Self employed"), Some(1));
    for job in JobType::ALL {
        if job != JobType::SelfEmployed {
            assert_eq!(vector.get(&format!("job_type_{job}")), Some(0), "{job}");
        }
    }
    assert_eq!(vector.get("has_income"), Some(1));
    assert_eq!(vector.get("is_married"), Some(1));
    assert_eq!(vector.get("is_single"), Some(0));
    assert_eq!(vector.get("secondary_education"), Some(1));
    for name in [
        "primary_education",
        "no_education",
        "tertiary_education",
        "other_education",
    ] {
        assert_eq!(vector.get(name), Some(0), "{name}");
    }
}

#[test]
fn switching_to_single_only_flips_marital_fields() {
    let married = encode(&urban_self_employed(MaritalStatus::Married));
    let single = encode(&urban_self_employed(MaritalStatus::Single));

    assert_eq!(single.get("is_married"), Some(0));
    assert_eq!(single.get("is_single"), Some(1));

    let changed: Vec<&str> = married
        .iter()
        .zip(single.iter())
        .filter(|(left, right)| left.1 != right.1)
        .map(|(left, _)| left.0)
        .collect();
    assert_eq!(changed, vec!["is_married", "is_single"]);
}

#[test]
fn feature_echo_snapshot() {
    let vector = encode(&urban_self_employed(MaritalStatus::Married));
    insta::assert_json_snapshot!(vector, @r#"
    {
      "location_type": 1,
      "cellphone_access": 1,
      "household_size": 3,
      "age_of_respondent": 30,
      "job_type_Farming and Fishing": 0,
      "job_type_Formally employed Government": 0,
      "job_type_Formally employed Private": 0,
      "job_type_Government Dependent": 0,
      "job_type_Informally employed": 0,
      "job_type_No Income": 0,
      "job_type_Other Income": 0,
      "job_type_Self employed": 1,
      "has_income": 1,
      "is_married": 1,
      "is_single": 0,
      "primary_education": 0,
      "no_education": 0,
      "secondary_education": 1,
      "tertiary_education": 0,
      "other_education": 0
    }
    "#);
}
