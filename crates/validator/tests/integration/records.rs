//! Whole-record validation from JSON.

use datavalid_validator::prelude::*;
use datavalid_validator::{RecordError, validate_record_with};
use pretty_assertions::assert_eq;

#[test]
fn record_from_json_reports_each_field() {
    let record = PersonalRecord::from_json(
        r#"{
            "email": "user@example.com",
            "phone": "081 234 5678",
            "date_of_birth": "30/02/2024",
            "website": "www.example.net"
        }"#,
    )
    .unwrap();

    let report = validate_record(&record);
    let summary: Vec<(Field, bool)> = report
        .outcomes()
        .iter()
        .map(|o| (o.field(), o.is_valid()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (Field::Email, true),
            (Field::Phone, false),
            (Field::Date, false),
            (Field::Url, true),
        ]
    );

    let errors = report.into_errors();
    let codes: Vec<&str> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, vec!["invalid_format", "calendar_invalid"]);
}

#[test]
fn record_errors_use_record_keys() {
    let record = PersonalRecord::from_json(r#"{"date": "31/04/2025", "url": "htp://x.com"}"#)
        .unwrap();
    let errors = validate_record(&record).into_errors();

    let fields: Vec<Option<&str>> = errors.errors().iter().map(|e| e.field.as_deref()).collect();
    assert_eq!(fields, vec![Some("date_of_birth"), Some("website")]);
    assert_eq!(
        errors.for_field("date_of_birth").and_then(|e| e.param("max_day")),
        Some("30")
    );
}

#[test]
fn record_errors_display() {
    let record = PersonalRecord {
        email: Some(String::new()),
        ..PersonalRecord::default()
    };
    let errors = validate_record(&record).into_errors();
    assert_eq!(
        errors.to_string(),
        "Validation failed with 1 error(s):\n  1. [email] empty_input: Email field cannot be empty.\n"
    );
}

#[test]
fn record_with_legacy_leap_rule() {
    let record = PersonalRecord {
        date_of_birth: Some("29/02/2021".into()),
        ..PersonalRecord::default()
    };
    let legacy = Date::new().with_leap_rule(LeapYearRule::LegacyWindow);

    assert!(!validate_record(&record).is_valid());
    assert!(validate_record_with(&record, legacy).is_valid());
}

#[test]
fn malformed_json_is_an_error() {
    let err = PersonalRecord::from_json("not json").unwrap_err();
    assert!(matches!(err, RecordError::Json(_)));
}
