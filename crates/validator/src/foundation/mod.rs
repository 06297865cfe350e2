//! Core validation types and traits
//!
//! This module contains the building blocks shared by every validator:
//!
//! - **Traits**: [`Validate`], [`FieldValidator`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ErrorKind`]
//! - **Results**: [`Outcome`], [`Field`] and the fixed message table
//!
//! # Architecture
//!
//! Validators return [`ValidationResult`]`<()>`. The error carries a
//! closed [`ErrorKind`] so callers can branch on the reason without parsing
//! strings, plus the exact user-facing message for the field.
//!
//! [`Outcome`] is the value-level view of the same result: it keeps the
//! validator's error, serializes to JSON, and projects to either a `bool` or
//! a `(bool, message)` pair.
//!
//! ```
//! use datavalid_validator::foundation::{Field, FieldValidator, Validate};
//! use datavalid_validator::validators::Phone;
//!
//! let phone = Phone::new();
//! assert!(phone.validate("08012345678").is_ok());
//!
//! let outcome = phone.check("081 234 5678");
//! assert_eq!(outcome.field(), Field::Phone);
//! assert!(!outcome.is_valid());
//! ```

// Module declarations
pub mod error;
pub mod outcome;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use error::{ErrorKind, ValidationError, ValidationErrors};
pub use outcome::{Field, Outcome, message_for};
pub use traits::{FieldValidator, Validate};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
