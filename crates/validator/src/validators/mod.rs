//! Built-in validators
//!
//! One validator per class of personal data:
//!
//! - [`Email`]: local part, `@`, domain, alphabetic TLD; at most 320 characters
//! - [`Phone`]: Nigerian mobile numbers in local (`0…`) or `+234…` form
//! - [`Date`]: `DD/MM/YYYY` with month lengths and leap years
//! - [`Url`]: optional `http(s)://` and `www.`, a host with TLD, optional path
//!
//! Each validator is a `Copy` value implementing
//! [`Validate`](crate::foundation::Validate) and
//! [`FieldValidator`](crate::foundation::FieldValidator).

pub mod date;
pub mod email;
pub mod phone;
pub mod url;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use date::{CalendarDate, Date, LeapYearRule, date, days_in_month, is_leap_year};
pub use email::{Email, MAX_EMAIL_LENGTH, email};
pub use phone::{COUNTRY_CODE, NETWORK_PREFIXES, Phone, PhoneFormat, phone};
pub use url::{Url, url};
