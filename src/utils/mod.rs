//! Utility functions for the cohort pipeline

pub mod progress;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CohortError, Result};

/// Date formats accepted in the raw extracts, tried in order.
///
/// The upstream tables mix plain dates with timestamp columns; timestamps
/// are truncated to their date component.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%d %H:%M:%S"];

/// Parse a date or timestamp field
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp.date());
        }
    }
    None
}

/// Parse a mandatory date column, reporting the column name on failure
pub fn parse_date_column(value: &str, column: &'static str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| CohortError::DateParse {
        column,
        value: value.to_string(),
    })
}

/// Parse an optional date column; a missing or blank field means absent
pub fn parse_opt_date_column(
    value: Option<&str>,
    column: &'static str,
) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(field) if field.is_empty() => Ok(None),
        Some(field) => parse_date_column(field, column).map(Some),
    }
}
