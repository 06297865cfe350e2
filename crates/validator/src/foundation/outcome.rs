//! The typed validation result and its fixed message table.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::foundation::{ErrorKind, ValidationError};

// ============================================================================
// FIELD
// ============================================================================

/// The class of personal data a validator checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Email address.
    Email,
    /// Nigerian phone number.
    Phone,
    /// `DD/MM/YYYY` calendar date.
    Date,
    /// Web URL.
    Url,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Self; 4] = [Self::Email, Self::Phone, Self::Date, Self::Url];

    /// Machine key, used as the error field path.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Url => "url",
        }
    }

    /// Label used in user-facing messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Date => "Date",
            Self::Url => "URL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returns the message for `field` with the given failure, or the success
/// message when `failure` is `None`.
///
/// Combinations that no validator produces (e.g. a too-long phone number)
/// fall back to the field's invalid-format message.
#[must_use]
pub const fn message_for(field: Field, failure: Option<ErrorKind>) -> &'static str {
    use ErrorKind::{CalendarInvalid, EmptyInput, InvalidFormat, TooLong};

    match (field, failure) {
        (Field::Email, None) => "Valid email address.",
        (Field::Email, Some(EmptyInput)) => "Email field cannot be empty.",
        (Field::Email, Some(TooLong)) => "Email is too long. It must not exceed 320 characters.",
        (Field::Email, Some(InvalidFormat | CalendarInvalid)) => {
            "Invalid email format. Ensure it follows the pattern 'example@domain.com'."
        }

        (Field::Phone, None) => "Valid phone number!",
        (Field::Phone, Some(EmptyInput)) => "Phone field cannot be empty.",
        (Field::Phone, Some(_)) => {
            "Invalid phone number format. Use '08012345678' or '+2348012345678'."
        }

        (Field::Date, None) => "Valid date",
        (Field::Date, Some(EmptyInput)) => "Date field cannot be empty.",
        (Field::Date, Some(CalendarInvalid)) => {
            "Invalid date. The day does not exist in the given month and year."
        }
        (Field::Date, Some(_)) => "Invalid date format. Use 'DD/MM/YYYY'.",

        (Field::Url, None) => "Valid URL.",
        (Field::Url, Some(EmptyInput)) => "URL field cannot be empty.",
        (Field::Url, Some(_)) => {
            "Invalid URL format. Ensure it follows the pattern 'https://www.example.com'."
        }
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of validating one input: either valid, or invalid with
/// exactly one [`ValidationError`].
///
/// Use [`is_valid`](Self::is_valid) for boolean-only callers and
/// [`as_pair`](Self::as_pair) for callers that display a message. The
/// message is the validator's own, so a configured limit shows up in it.
///
/// # Examples
///
/// ```
/// use datavalid_validator::validate_date;
///
/// let outcome = validate_date("29/02/2024");
/// assert!(outcome.is_valid());
/// assert_eq!(outcome.as_pair(), (true, "Valid date"));
///
/// let outcome = validate_date("30/02/2025");
/// assert!(!outcome.is_valid());
/// assert!(outcome.failure().is_some_and(|k| k.is_invalid_format()));
/// assert_eq!(outcome.error().and_then(|e| e.param("max_day")), Some("28"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    field: Field,
    error: Option<ValidationError>,
}

impl Outcome {
    /// A successful outcome for `field`.
    #[must_use]
    pub const fn valid(field: Field) -> Self {
        Self { field, error: None }
    }

    /// A failed outcome for `field` carrying the table error for `kind`.
    #[must_use]
    pub fn invalid(field: Field, kind: ErrorKind) -> Self {
        Self {
            field,
            error: Some(ValidationError::for_field(field, kind)),
        }
    }

    /// Builds an outcome from a validator's result, keeping its error.
    pub fn from_result(field: Field, result: Result<(), ValidationError>) -> Self {
        Self {
            field,
            error: result.err(),
        }
    }

    /// The field that was validated.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Boolean projection.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The failure reason, if any.
    #[must_use]
    pub fn failure(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }

    /// The structured error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// The success message, or the error's message.
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.error {
            None => message_for(self.field, None),
            Some(error) => &error.message,
        }
    }

    /// Descriptive projection: `(is_valid, message)`.
    #[must_use]
    pub fn as_pair(&self) -> (bool, &str) {
        (self.is_valid(), self.message())
    }

    /// Converts into a `Result`, handing back the validator's error.
    pub fn into_result(self) -> Result<(), ValidationError> {
        self.error.map_or(Ok(()), Err)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<&Outcome> for bool {
    fn from(outcome: &Outcome) -> Self {
        outcome.is_valid()
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 4)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("code", &self.failure().map(ErrorKind::code))?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
