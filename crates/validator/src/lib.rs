//! # datavalid-validator
//!
//! Syntactic validators for personal-data strings: email addresses,
//! Nigerian phone numbers, `DD/MM/YYYY` calendar dates and web URLs.
//!
//! ## Quick Start
//!
//! ```
//! use datavalid_validator::{validate_date, validate_email, validate_phone, validate_url};
//!
//! assert!(validate_email("user@example.com").is_valid());
//! assert!(validate_phone("+2348012345678").is_valid());
//! assert!(validate_url("www.example.net").is_valid());
//!
//! let outcome = validate_date("30/02/2025");
//! assert_eq!(
//!     outcome.as_pair(),
//!     (false, "Invalid date. The day does not exist in the given month and year."),
//! );
//! ```
//!
//! Every check is pure: no I/O, no shared mutable state, and the same input
//! always yields the same [`Outcome`]. All validators are `Copy + Send + Sync`.
//!
//! ## Validator values
//!
//! The free functions use default configuration. For options, build the
//! validator value and call [`Validate::validate`](foundation::Validate::validate)
//! or [`FieldValidator::check`](foundation::FieldValidator::check):
//!
//! ```
//! use datavalid_validator::prelude::*;
//!
//! let legacy = Date::new().with_leap_rule(LeapYearRule::LegacyWindow);
//! assert!(legacy.check("29/02/2023").is_valid());
//!
//! let short = Email::new().max_length(16);
//! assert_eq!(short.validate("someone@example.org").unwrap_err().kind, ErrorKind::TooLong);
//! assert_eq!(
//!     short.check("someone@example.org").message(),
//!     "Email is too long. It must not exceed 16 characters.",
//! );
//! ```

#![warn(missing_docs)]

pub mod foundation;
pub mod prelude;
pub mod record;
pub mod validators;

pub use foundation::{ErrorKind, Field, Outcome, ValidationError, ValidationErrors};
pub use record::{PersonalRecord, RecordError, RecordReport, validate_record, validate_record_with};

use foundation::FieldValidator;
use validators::{Date, Email, Phone, Url};

/// Validates an email address with the default 320-character limit.
pub fn validate_email(text: &str) -> Outcome {
    Email::new().check(text)
}

/// Validates a Nigerian phone number (`0…` or `+234…`).
pub fn validate_phone(text: &str) -> Outcome {
    Phone::new().check(text)
}

/// Validates a `DD/MM/YYYY` date under the Gregorian leap-year rule.
pub fn validate_date(text: &str) -> Outcome {
    Date::new().check(text)
}

/// Validates a web URL.
pub fn validate_url(text: &str) -> Outcome {
    Url::new().check(text)
}

/// Validates `text` as the given field with default configuration.
pub fn validate_field(field: Field, text: &str) -> Outcome {
    match field {
        Field::Email => validate_email(text),
        Field::Phone => validate_phone(text),
        Field::Date => validate_date(text),
        Field::Url => validate_url(text),
    }
}
