//! Month-boundary coverage for the date validator.

use datavalid_validator::prelude::*;
use datavalid_validator::validators::is_leap_year;
use rstest::rstest;

#[rstest]
fn month_boundaries(
    #[values(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)] month: u8,
    #[values(28, 29, 30, 31)] day: u8,
    #[values(1900, 2000, 2023, 2024, 2100, 2400)] year: u16,
) {
    let max = match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };
    let input = format!("{day:02}/{month:02}/{year:04}");
    let outcome = validate_date(&input);

    if day <= max {
        assert!(outcome.is_valid(), "{input} should be valid");
    } else {
        assert_eq!(
            outcome.failure(),
            Some(ErrorKind::CalendarInvalid),
            "{input} should be a calendar error"
        );
    }
}

#[rstest]
#[case(1896, true)]
#[case(1900, false)]
#[case(2000, true)]
#[case(2023, false)]
#[case(2024, true)]
#[case(2100, false)]
#[case(2400, true)]
fn gregorian_leap_years(#[case] year: u16, #[case] leap: bool) {
    assert_eq!(is_leap_year(year), leap);
    assert_eq!(
        validate_date(&format!("29/02/{year}")).is_valid(),
        leap,
        "29/02/{year}"
    );
}

#[rstest]
#[case(1899, false)]
#[case(1900, true)]
#[case(2023, true)]
#[case(2199, true)]
#[case(2200, false)]
#[case(2400, false)]
fn legacy_window_feb_29(#[case] year: u16, #[case] accepted: bool) {
    let validator = Date::new().with_leap_rule(LeapYearRule::LegacyWindow);
    assert_eq!(
        validator.validate(&format!("29/02/{year}")).is_ok(),
        accepted,
        "29/02/{year}"
    );
}
