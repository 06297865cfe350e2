//! Whole-record validation.
//!
//! A [`PersonalRecord`] bundles the four personal-data fields. Every field
//! is optional; absent fields are skipped, present ones (including empty
//! strings) are validated.

use serde::{Deserialize, Serialize};

use crate::foundation::{Field, FieldValidator, Outcome, ValidationErrors};
use crate::validators::{Date, Email, Phone, Url};

/// Errors from loading a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The input was not a JSON object with the expected fields.
    #[error("invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The personal-data fields of one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalRecord {
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Date of birth, `DD/MM/YYYY`.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "date")]
    pub date_of_birth: Option<String>,
    /// Personal website.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "url")]
    pub website: Option<String>,
}

impl PersonalRecord {
    /// Parses a record from a JSON object.
    ///
    /// ```
    /// use datavalid_validator::PersonalRecord;
    ///
    /// let record = PersonalRecord::from_json(r#"{"email": "user@example.com"}"#)?;
    /// assert_eq!(record.email.as_deref(), Some("user@example.com"));
    /// assert!(record.phone.is_none());
    /// # Ok::<(), datavalid_validator::RecordError>(())
    /// ```
    pub fn from_json(input: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(input)?)
    }

    /// The JSON key that holds `field` in a record.
    #[must_use]
    pub const fn key_of(field: Field) -> &'static str {
        match field {
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Date => "date_of_birth",
            Field::Url => "website",
        }
    }

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Date => self.date_of_birth.as_deref(),
            Field::Url => self.website.as_deref(),
        }
    }
}

/// Per-field outcomes for a record, in [`Field::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordReport {
    outcomes: Vec<Outcome>,
}

impl RecordReport {
    /// True when every present field is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_valid)
    }

    /// Outcomes for the fields that were present.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// The outcome for one field, if it was present.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.field() == field)
    }

    /// Collects the validator error of every failing field, with its field
    /// path set to the record key (`date_of_birth`, `website`, ...).
    pub fn into_errors(self) -> ValidationErrors {
        self.outcomes
            .into_iter()
            .filter_map(|o| {
                let key = PersonalRecord::key_of(o.field());
                o.into_result().err().map(|e| e.with_field(key))
            })
            .collect()
    }
}

/// Validates every present field of `record` with the given date validator.
///
/// Use [`validate_record`] for the default configuration.
pub fn validate_record_with(record: &PersonalRecord, date: Date) -> RecordReport {
    let outcomes = Field::ALL
        .into_iter()
        .filter_map(|field| {
            let value = record.value(field)?;
            Some(match field {
                Field::Email => Email::new().check(value),
                Field::Phone => Phone::new().check(value),
                Field::Date => date.check(value),
                Field::Url => Url::new().check(value),
            })
        })
        .collect();

    RecordReport { outcomes }
}

/// Validates every present field of `record`.
///
/// ```
/// use datavalid_validator::{Field, PersonalRecord, validate_record};
///
/// let record = PersonalRecord {
///     email: Some("user@example.com".into()),
///     phone: Some("081 234 5678".into()),
///     ..PersonalRecord::default()
/// };
///
/// let report = validate_record(&record);
/// assert!(!report.is_valid());
/// assert!(report.get(Field::Email).is_some_and(|o| o.is_valid()));
/// assert_eq!(report.into_errors().len(), 1);
/// ```
pub fn validate_record(record: &PersonalRecord) -> RecordReport {
    validate_record_with(record, Date::new())
}

// ============================================================================
// TESTS
// ============================================================================
