//! Caller-side input validation.
//!
//! The store does not validate entity fields; the presentation layer
//! checks user input before any mutation reaches it (non-empty names and
//! titles, parseable ISO dates).

use chrono::NaiveDate;
use rollcall_lib::{Result, RollcallError};

/// Require a non-empty, non-whitespace value for a named field.
///
/// # Errors
///
/// Returns `Validation` naming the field.
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RollcallError::validation(field, "cannot be empty"));
    }
    Ok(())
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `Validation` if the value is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    value.parse().map_err(|_| {
        RollcallError::validation("date", "must be an ISO calendar date (YYYY-MM-DD)")
    })
}

/// Map an empty CLI value to "clear the field".
#[must_use]
pub fn clearable(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
