//! Calendar date validator for `DD/MM/YYYY` strings.
//!
//! Validation happens in two stages: a byte-level shape check (two digits,
//! `/`, two digits, `/`, four digits) and a calendar check that bounds the
//! month to 1..=12 and the day to the month's length in that year.

use serde::{Deserialize, Serialize};

use crate::foundation::{
    ErrorKind, Field, FieldValidator, Validate, ValidationError, ValidationResult,
};

/// Exact length of a `DD/MM/YYYY` string.
const DATE_LEN: usize = 10;

/// Date component separator.
const SEPARATOR: u8 = b'/';

/// Maximum days in each month (index 0 is unused, months are 1-indexed).
/// February shows the common-year value.
const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// ============================================================================
// LEAP YEARS
// ============================================================================

/// How February 29 is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeapYearRule {
    /// Divisible by 4, and not by 100 unless also by 400. Applies to every year.
    #[default]
    Gregorian,
    /// Accept February 29 in any year from 1900 to 2199 and reject it
    /// otherwise. Divisibility is not checked. Kept for compatibility with
    /// datasets validated by the prefix-based rule.
    LegacyWindow,
}

impl LeapYearRule {
    /// Whether February of `year` has 29 days under this rule.
    #[must_use]
    pub const fn allows_feb_29(self, year: u16) -> bool {
        match self {
            Self::Gregorian => is_leap_year(year),
            Self::LegacyWindow => year >= 1900 && year <= 2199,
        }
    }
}

/// Gregorian leap-year rule.
///
/// ```
/// use datavalid_validator::validators::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
#[must_use]
pub const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1..=12) of `year` under the Gregorian rule.
/// Returns 0 for a month outside 1..=12.
#[must_use]
pub const fn days_in_month(month: u8, year: u16) -> u8 {
    days_in_month_with(month, year, LeapYearRule::Gregorian)
}

const fn days_in_month_with(month: u8, year: u16, rule: LeapYearRule) -> u8 {
    match month {
        2 if rule.allows_feb_29(year) => 29,
        1..=12 => DAYS_IN_MONTH[month as usize],
        _ => 0,
    }
}

// ============================================================================
// CALENDAR DATE
// ============================================================================

/// A parsed, calendar-valid day/month/year triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Day of month, 1-based.
    pub day: u8,
    /// Month, 1-based.
    pub month: u8,
    /// Four-digit year.
    pub year: u16,
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Parses a two-digit numeric field from a byte slice at the given offset.
fn parse_two_digits(bytes: &[u8], offset: usize) -> Option<u8> {
    let d1 = bytes.get(offset)?.wrapping_sub(b'0');
    let d2 = bytes.get(offset + 1)?.wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

fn parse_four_digits(bytes: &[u8], offset: usize) -> Option<u16> {
    let hi = parse_two_digits(bytes, offset)?;
    let lo = parse_two_digits(bytes, offset + 2)?;
    Some(u16::from(hi) * 100 + u16::from(lo))
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates `DD/MM/YYYY` dates, including month lengths and leap years.
///
/// # Examples
///
/// ```
/// use datavalid_validator::foundation::{ErrorKind, Validate};
/// use datavalid_validator::validators::{Date, LeapYearRule};
///
/// let v = Date::new();
/// assert!(v.validate("29/02/2024").is_ok());
/// assert!(v.validate("15/08/2023").is_ok());
///
/// let err = v.validate("31/04/2025").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::CalendarInvalid);
///
/// let err = v.validate("2025-02-28").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::InvalidFormat);
///
/// let legacy = Date::new().with_leap_rule(LeapYearRule::LegacyWindow);
/// assert!(legacy.validate("29/02/2023").is_ok());
/// assert!(legacy.validate("29/02/2400").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Date {
    leap_rule: LeapYearRule,
}

impl Date {
    /// Creates a date validator using the Gregorian leap-year rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            leap_rule: LeapYearRule::Gregorian,
        }
    }

    /// Sets the leap-year rule.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_leap_rule(mut self, rule: LeapYearRule) -> Self {
        self.leap_rule = rule;
        self
    }

    /// The configured leap-year rule.
    #[must_use]
    pub const fn leap_rule(&self) -> LeapYearRule {
        self.leap_rule
    }

    /// Parses and validates `input`, returning the calendar date.
    pub fn parse(&self, input: &str) -> ValidationResult<CalendarDate> {
        if input.is_empty() {
            return Err(ValidationError::for_field(Field::Date, ErrorKind::EmptyInput));
        }

        let bytes = input.as_bytes();
        let shape_error = || {
            ValidationError::for_field(Field::Date, ErrorKind::InvalidFormat)
                .with_param("expected", "DD/MM/YYYY")
        };

        if bytes.len() != DATE_LEN || bytes[2] != SEPARATOR || bytes[5] != SEPARATOR {
            return Err(shape_error());
        }

        let day = parse_two_digits(bytes, 0).ok_or_else(shape_error)?;
        let month = parse_two_digits(bytes, 3).ok_or_else(shape_error)?;
        let year = parse_four_digits(bytes, 6).ok_or_else(shape_error)?;

        if !(1..=12).contains(&month) {
            return Err(
                ValidationError::for_field(Field::Date, ErrorKind::CalendarInvalid)
                    .with_param("month", month.to_string())
                    .with_help("month must be between 01 and 12"),
            );
        }

        let max_day = days_in_month_with(month, year, self.leap_rule);
        if day == 0 || day > max_day {
            return Err(
                ValidationError::for_field(Field::Date, ErrorKind::CalendarInvalid)
                    .with_param("day", day.to_string())
                    .with_param("max_day", max_day.to_string()),
            );
        }

        Ok(CalendarDate { day, month, year })
    }
}

impl Validate for Date {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult<()> {
        self.parse(input).map(|_| ())
    }
}

impl FieldValidator for Date {
    const FIELD: Field = Field::Date;
}

/// Creates a new [`Date`] validator.
#[must_use]
pub const fn date() -> Date {
    Date::new()
}

// ============================================================================
// TESTS
// ============================================================================
