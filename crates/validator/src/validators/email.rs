//! Email address validator.
//!
//! A deliberately small grammar, not RFC 5322: a local part, `@`, a domain,
//! and an alphabetic top-level domain of at least two letters.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{
    ErrorKind, Field, FieldValidator, Validate, ValidationError, ValidationResult,
};

/// Default maximum length in characters.
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Letters, digits and `._%+-`, one or more.
const LOCAL_PART: &str = r"[a-zA-Z0-9._%+\-]+";
/// Letters, digits and `.-`, one or more.
const DOMAIN: &str = r"[a-zA-Z0-9.\-]+";
/// Two or more letters.
const TLD: &str = r"[a-zA-Z]{2,}";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{LOCAL_PART}@{DOMAIN}\.{TLD}$")).expect("email grammar is a valid regex")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates email addresses.
///
/// Rules are applied in order: empty input, then length, then grammar.
///
/// # Examples
///
/// ```
/// use datavalid_validator::foundation::{ErrorKind, Validate};
/// use datavalid_validator::validators::Email;
///
/// let v = Email::new();
/// assert!(v.validate("user@example.com").is_ok());
/// assert!(v.validate("user.name+tag@mail.example.co").is_ok());
///
/// let err = v.validate("user@domain").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::InvalidFormat);
///
/// let err = Email::new().max_length(10).validate("user@example.com").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::TooLong);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Email {
    max_length: usize,
}

impl Email {
    /// Creates an email validator with the default 320-character limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: MAX_EMAIL_LENGTH,
        }
    }

    /// Sets the maximum number of characters allowed.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult<()> {
        if input.is_empty() {
            return Err(ValidationError::for_field(Field::Email, ErrorKind::EmptyInput));
        }

        let length = input.chars().count();
        if length > self.max_length {
            let error = ValidationError::for_field(Field::Email, ErrorKind::TooLong)
                .with_param("max", self.max_length.to_string())
                .with_param("actual", length.to_string());
            // The table message names the default limit.
            return Err(if self.max_length == MAX_EMAIL_LENGTH {
                error
            } else {
                ValidationError {
                    message: format!(
                        "Email is too long. It must not exceed {} characters.",
                        self.max_length
                    )
                    .into(),
                    ..error
                }
            });
        }

        if !EMAIL_REGEX.is_match(input) {
            return Err(ValidationError::for_field(Field::Email, ErrorKind::InvalidFormat)
                .with_help("expected local-part@domain.tld"));
        }

        Ok(())
    }
}

impl FieldValidator for Email {
    const FIELD: Field = Field::Email;
}

/// Creates a new [`Email`] validator.
#[must_use]
pub const fn email() -> Email {
    Email::new()
}

// ============================================================================
// TESTS
// ============================================================================
