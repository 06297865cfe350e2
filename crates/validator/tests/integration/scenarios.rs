//! Concrete inputs and the exact outcome each must produce.

use datavalid_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// EMAIL
// ============================================================================

#[rstest]
#[case("user@example.com", None)]
#[case("test@example.com", None)]
#[case("user.name@domain.com", None)]
#[case("user@domain", Some(ErrorKind::InvalidFormat))]
#[case("user@com", Some(ErrorKind::InvalidFormat))]
#[case("invalid-email.com", Some(ErrorKind::InvalidFormat))]
#[case("", Some(ErrorKind::EmptyInput))]
fn email_cases(#[case] input: &str, #[case] expected: Option<ErrorKind>) {
    assert_eq!(validate_email(input).failure(), expected);
}

#[test]
fn email_too_long_message() {
    let input = format!("{}@example.com", "a".repeat(320));
    assert_eq!(
        validate_email(&input).as_pair(),
        (false, "Email is too long. It must not exceed 320 characters.")
    );
}

#[test]
fn email_invalid_message() {
    assert_eq!(
        validate_email("user@domain").message(),
        "Invalid email format. Ensure it follows the pattern 'example@domain.com'."
    );
}

// ============================================================================
// PHONE
// ============================================================================

#[rstest]
#[case("+2348012345678", None)]
#[case("08012345678", None)]
#[case("07012345678", None)]
#[case("09112345678", None)]
#[case("081 234 5678", Some(ErrorKind::InvalidFormat))]
#[case("+12345678901", Some(ErrorKind::InvalidFormat))]
#[case("0801234567", Some(ErrorKind::InvalidFormat))]
#[case("", Some(ErrorKind::EmptyInput))]
fn phone_cases(#[case] input: &str, #[case] expected: Option<ErrorKind>) {
    assert_eq!(validate_phone(input).failure(), expected);
}

// ============================================================================
// DATE
// ============================================================================

#[rstest]
#[case("31/01/2024", None)]
#[case("29/02/2024", None)]
#[case("15/08/2023", None)]
#[case("30/02/2024", Some(ErrorKind::CalendarInvalid))]
#[case("30/02/2025", Some(ErrorKind::CalendarInvalid))]
#[case("31/02/2025", Some(ErrorKind::CalendarInvalid))]
#[case("31/04/2025", Some(ErrorKind::CalendarInvalid))]
#[case("29/02/2023", Some(ErrorKind::CalendarInvalid))]
#[case("2025-02-31", Some(ErrorKind::InvalidFormat))]
#[case("1/1/2025", Some(ErrorKind::InvalidFormat))]
#[case("", Some(ErrorKind::EmptyInput))]
fn date_cases(#[case] input: &str, #[case] expected: Option<ErrorKind>) {
    assert_eq!(validate_date(input).failure(), expected);
}

#[test]
fn calendar_failures_are_invalid_format() {
    let outcome = validate_date("30/02/2025");
    assert!(!outcome.is_valid());
    assert!(outcome.failure().is_some_and(ErrorKind::is_invalid_format));
}

// ============================================================================
// URL
// ============================================================================

#[rstest]
#[case("https://www.google.com", None)]
#[case("http://example.org", None)]
#[case("www.example.net", None)]
#[case("www.missinghttp.com", None)]
#[case("https://example.co.uk/path?q=1", None)]
#[case("htp://invalid.com", Some(ErrorKind::InvalidFormat))]
#[case("https://google", Some(ErrorKind::InvalidFormat))]
#[case("", Some(ErrorKind::EmptyInput))]
fn url_cases(#[case] input: &str, #[case] expected: Option<ErrorKind>) {
    assert_eq!(validate_url(input).failure(), expected);
}

// ============================================================================
// MESSAGES
// ============================================================================

#[rstest]
#[case(Field::Email, "user@example.com", "Valid email address.")]
#[case(Field::Phone, "+2348012345678", "Valid phone number!")]
#[case(Field::Date, "29/02/2024", "Valid date")]
#[case(Field::Url, "www.example.net", "Valid URL.")]
fn success_messages(#[case] field: Field, #[case] input: &str, #[case] message: &str) {
    assert_eq!(validate_field(field, input).as_pair(), (true, message));
}

#[rstest]
#[case(Field::Email, "Email field cannot be empty.")]
#[case(Field::Phone, "Phone field cannot be empty.")]
#[case(Field::Date, "Date field cannot be empty.")]
#[case(Field::Url, "URL field cannot be empty.")]
fn empty_messages(#[case] field: Field, #[case] message: &str) {
    assert_eq!(validate_field(field, "").as_pair(), (false, message));
}

#[test]
fn outcome_round_trips_through_result() {
    let error = validate_phone("081 234 5678").into_result().unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidFormat);
    assert_eq!(error.field.as_deref(), Some("phone"));
    assert_eq!(
        error.message,
        "Invalid phone number format. Use '08012345678' or '+2348012345678'."
    );
}

#[test]
fn validator_and_facade_agree() {
    let inputs = ["user@example.com", "081 234 5678", "29/02/2024", "www.example.net", ""];
    for input in inputs {
        assert_eq!(Email::new().check(input), validate_email(input));
        assert_eq!(Phone::new().check(input), validate_phone(input));
        assert_eq!(Date::new().check(input), validate_date(input));
        assert_eq!(Url::new().check(input), validate_url(input));
    }
}
