use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;

/// Calendar dates travel as ISO `YYYY-MM-DD` strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fail with a validation error when `value` is empty after trimming.
#[track_caller]
pub fn require_non_empty(value: &str, field: &str, message: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            message: message.to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` calendar date.
#[track_caller]
pub fn parse_calendar_date(value: &str, field: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| CoreError::Validation {
        message: format!("{field} must be a date in YYYY-MM-DD format, got '{value}'"),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
