//! Property-based tests.

use datavalid_validator::prelude::*;
use proptest::prelude::*;

/// Calendar check written independently of the validator.
fn exists(day: u32, month: u32, year: u32) -> bool {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let max = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => return false,
    };
    (1..=max).contains(&day)
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn email_idempotent(s in ".*") {
        prop_assert_eq!(validate_email(&s), validate_email(&s));
    }

    #[test]
    fn phone_idempotent(s in ".*") {
        prop_assert_eq!(validate_phone(&s), validate_phone(&s));
    }

    #[test]
    fn date_idempotent(s in ".*") {
        prop_assert_eq!(validate_date(&s), validate_date(&s));
    }

    #[test]
    fn url_idempotent(s in ".*") {
        prop_assert_eq!(validate_url(&s), validate_url(&s));
    }
}

// ============================================================================
// DATE: agrees with an independent calendar
// ============================================================================

proptest! {
    #[test]
    fn date_agrees_with_calendar(day in 0u32..=99, month in 0u32..=99, year in 0u32..=9999) {
        let input = format!("{day:02}/{month:02}/{year:04}");
        prop_assert_eq!(validate_date(&input).is_valid(), exists(day, month, year), "{}", input);
    }

    #[test]
    fn well_formed_dates_never_fail_on_format(day in 0u32..=99, month in 0u32..=99, year in 0u32..=9999) {
        let input = format!("{day:02}/{month:02}/{year:04}");
        let failure = validate_date(&input).failure();
        prop_assert!(
            failure.is_none() || failure == Some(ErrorKind::CalendarInvalid),
            "{} -> {:?}", input, failure
        );
    }

    #[test]
    fn parsed_date_round_trips(day in 1u8..=28, month in 1u8..=12, year in 0u16..=9999) {
        let input = format!("{day:02}/{month:02}/{year:04}");
        let parsed = Date::new().parse(&input).unwrap();
        prop_assert_eq!(parsed.to_string(), input);
    }
}

// ============================================================================
// PHONE: whitespace is never accepted
// ============================================================================

proptest! {
    #[test]
    fn phone_with_whitespace_rejected(
        prefix in prop::sample::select(vec!["0", "+234"]),
        network in prop::sample::select(vec!["70", "80", "81", "90", "91"]),
        subscriber in "[0-9]{8}",
        ws in prop::sample::select(vec![" ", "\t", "\n", "\u{a0}"]),
        at in 0usize..=14,
    ) {
        let number = format!("{prefix}{network}{subscriber}");
        prop_assert!(validate_phone(&number).is_valid());

        let mut broken = number.clone();
        broken.insert_str(at.min(number.len()), ws);
        prop_assert!(!validate_phone(&broken).is_valid(), "{:?}", broken);
    }

    #[test]
    fn phone_accepts_only_known_lengths(s in "\\+?[0-9]{0,16}") {
        if validate_phone(&s).is_valid() {
            prop_assert!(s.len() == 11 || s.len() == 14, "{}", s);
        }
    }
}

// ============================================================================
// EMAIL / URL: whitespace anywhere is rejected
// ============================================================================

proptest! {
    #[test]
    fn email_with_whitespace_rejected(s in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,4}", at in 0usize..=20) {
        prop_assert!(validate_email(&s).is_valid());
        let mut broken = s.clone();
        broken.insert(at.min(s.len()), ' ');
        prop_assert!(!validate_email(&broken).is_valid());
    }

    #[test]
    fn url_with_whitespace_rejected(s in "https://[a-z]{1,8}\\.[a-z]{2,4}/[a-z]{0,8}", at in 0usize..=40) {
        prop_assert!(validate_url(&s).is_valid());
        let mut broken = s.clone();
        broken.insert(at.min(s.len()), ' ');
        prop_assert!(!validate_url(&broken).is_valid());
    }
}
