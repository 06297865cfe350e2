//! Core traits for the validation system
//!
//! This module defines the trait every validator implements.

use crate::foundation::{Field, Outcome, ValidationResult};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are plain values (usually `Copy`) holding only their
/// configuration, so a single instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use datavalid_validator::foundation::Validate;
/// use datavalid_validator::validators::Email;
///
/// let email = Email::new();
/// assert!(email.validate("user@example.com").is_ok());
/// assert!(email.validate("user@domain").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` carrying exactly one failure reason otherwise
    fn validate(&self, input: &Self::Input) -> ValidationResult<()>;

    /// Returns the name of this validator.
    ///
    /// Used for debugging and log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A validator bound to one class of personal data.
///
/// Adds the [`check`](Self::check) projection that turns the `Result` into
/// an [`Outcome`] with the field's message table.
pub trait FieldValidator: Validate<Input = str> {
    /// The field this validator checks.
    const FIELD: Field;

    /// Validates `input` and returns the typed outcome.
    fn check(&self, input: &str) -> Outcome {
        let result = self.validate(input);
        if let Err(error) = &result {
            tracing::trace!(
                field = Self::FIELD.key(),
                code = %error.code,
                len = input.len(),
                "input rejected"
            );
        }
        Outcome::from_result(Self::FIELD, result)
    }
}

// ============================================================================
// TESTS
// ============================================================================
