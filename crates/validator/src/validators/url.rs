//! Web URL validator.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{
    ErrorKind, Field, FieldValidator, Validate, ValidationError, ValidationResult,
};

/// `http://` or `https://`, optional.
const SCHEME: &str = r"(?:https?://)?";
/// `www.`, optional.
const WWW: &str = r"(?:www\.)?";
/// One label, a TLD, and an optional second-level TLD such as `.co.uk`.
const HOST: &str = r"[a-zA-Z0-9\-]+\.[a-zA-Z]{2,}(?:\.[a-zA-Z]{2,})?";
/// `/` followed by anything but whitespace, optional.
const PATH: &str = r"(?:/\S*)?";

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{SCHEME}{WWW}{HOST}{PATH}$")).expect("url grammar is a valid regex")
});

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates web URLs with an optional `http`/`https` scheme.
///
/// The host is a single label plus TLD (with an optional second-level TLD),
/// optionally prefixed by `www.`. Ports and userinfo are not part of the
/// grammar.
///
/// # Examples
///
/// ```
/// use datavalid_validator::foundation::Validate;
/// use datavalid_validator::validators::Url;
///
/// let v = Url::new();
/// assert!(v.validate("https://www.google.com").is_ok());
/// assert!(v.validate("www.example.net").is_ok());
/// assert!(v.validate("example.co.uk/path?q=1#top").is_ok());
/// assert!(v.validate("htp://invalid.com").is_err());
/// assert!(v.validate("https://google").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Url;

impl Url {
    /// Creates a new URL validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult<()> {
        if input.is_empty() {
            return Err(ValidationError::for_field(Field::Url, ErrorKind::EmptyInput));
        }

        if !URL_REGEX.is_match(input) {
            return Err(ValidationError::for_field(Field::Url, ErrorKind::InvalidFormat)
                .with_help("expected [http(s)://][www.]name.tld[/path]"));
        }

        Ok(())
    }
}

impl FieldValidator for Url {
    const FIELD: Field = Field::Url;
}

/// Creates a new [`Url`] validator.
#[must_use]
pub const fn url() -> Url {
    Url
}

// ============================================================================
// TESTS
// ============================================================================
