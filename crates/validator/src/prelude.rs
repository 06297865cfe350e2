//! Prelude module for convenient imports.
//!
//! ```
//! use datavalid_validator::prelude::*;
//!
//! assert!(phone().validate("08012345678").is_ok());
//! assert!(validate_url("https://example.com").is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, outcomes
// ============================================================================

pub use crate::foundation::{
    ErrorKind, Field, FieldValidator, Outcome, Validate, ValidationError, ValidationErrors,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    CalendarDate, Date, Email, LeapYearRule, Phone, PhoneFormat, Url, date, email, phone, url,
};

// ============================================================================
// FACADE: One-call validation
// ============================================================================

pub use crate::{
    PersonalRecord, RecordReport, validate_date, validate_email, validate_field, validate_phone,
    validate_record, validate_url,
};
