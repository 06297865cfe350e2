//! Integration tests for datavalid-validator.

mod calendar;
mod properties;
mod records;
mod scenarios;
