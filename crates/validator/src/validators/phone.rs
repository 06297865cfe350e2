//! Nigerian phone number validator.
//!
//! Accepts two exact shapes and nothing else:
//! - **Local**: `0` + network prefix + 8 digits, e.g. `08012345678`
//! - **International**: `+234` + network prefix + 8 digits, e.g. `+2348012345678`
//!
//! Network prefixes: `70`, `80`, `81`, `90`, `91`.

use serde::{Deserialize, Serialize};

use crate::foundation::{
    ErrorKind, Field, FieldValidator, Validate, ValidationError, ValidationResult,
};

/// Country calling code including the leading `+`.
pub const COUNTRY_CODE: &str = "+234";

/// Trunk prefix used in the local format.
const TRUNK_PREFIX: &str = "0";

/// Mobile network prefixes following the trunk or country code.
pub const NETWORK_PREFIXES: [&str; 5] = ["70", "80", "81", "90", "91"];

/// Digits after the network prefix.
const SUBSCRIBER_DIGITS: usize = 8;

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Which of the two accepted shapes a phone number uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneFormat {
    /// `0XXXXXXXXXX` (11 digits).
    Local,
    /// `+234XXXXXXXXXX`.
    International,
}

/// Validates Nigerian mobile numbers.
///
/// Matching is exact over the whole string: separators, whitespace and
/// other country codes are rejected.
///
/// # Examples
///
/// ```
/// use datavalid_validator::validators::{Phone, PhoneFormat};
/// use datavalid_validator::foundation::Validate;
///
/// let v = Phone::new();
/// assert!(v.validate("08012345678").is_ok());
/// assert!(v.validate("+2348012345678").is_ok());
/// assert!(v.validate("081 234 5678").is_err());
/// assert!(v.validate("+12345678901").is_err());
///
/// assert_eq!(Phone::format_of("07012345678"), Some(PhoneFormat::Local));
/// assert_eq!(
///     Phone::to_international("09112345678").as_deref(),
///     Some("+2349112345678"),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Phone;

impl Phone {
    /// Creates a new phone validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the shape `input` matches, or `None` if it matches neither.
    #[must_use]
    pub fn format_of(input: &str) -> Option<PhoneFormat> {
        if let Some(national) = input.strip_prefix(COUNTRY_CODE) {
            is_national_number(national).then_some(PhoneFormat::International)
        } else if let Some(national) = input.strip_prefix(TRUNK_PREFIX) {
            is_national_number(national).then_some(PhoneFormat::Local)
        } else {
            None
        }
    }

    /// Normalizes a valid number to the `+234` form.
    #[must_use]
    pub fn to_international(input: &str) -> Option<String> {
        match Self::format_of(input)? {
            PhoneFormat::International => Some(input.to_owned()),
            PhoneFormat::Local => Some(format!("{COUNTRY_CODE}{}", &input[TRUNK_PREFIX.len()..])),
        }
    }
}

/// Network prefix followed by exactly eight ASCII digits.
fn is_national_number(rest: &str) -> bool {
    let Some(prefix) = rest.get(..2) else {
        return false;
    };
    let subscriber = &rest[2..];

    NETWORK_PREFIXES.contains(&prefix)
        && subscriber.len() == SUBSCRIBER_DIGITS
        && subscriber.bytes().all(|b| b.is_ascii_digit())
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult<()> {
        if input.is_empty() {
            return Err(ValidationError::for_field(Field::Phone, ErrorKind::EmptyInput));
        }

        if Self::format_of(input).is_none() {
            return Err(
                ValidationError::for_field(Field::Phone, ErrorKind::InvalidFormat).with_help(
                    "use 0 or +234, then 70, 80, 81, 90 or 91, then 8 digits, with no spaces",
                ),
            );
        }

        Ok(())
    }
}

impl FieldValidator for Phone {
    const FIELD: Field = Field::Phone;
}

/// Creates a new [`Phone`] validator.
#[must_use]
pub const fn phone() -> Phone {
    Phone
}

// ============================================================================
// TESTS
// ============================================================================
