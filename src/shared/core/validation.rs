use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input rejected before it reaches the event store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user_id must be positive")]
    NonPositiveUserId,

    #[error("id must be positive")]
    NonPositiveId,

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("invalid date format, expected YYYY-MM-DD")]
    InvalidDate,

    #[error("invalid user_id")]
    InvalidUserId,

    #[error("date parameter is required")]
    MissingDate,
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)
}

pub fn positive(value: i64, error: ValidationError) -> Result<u64, ValidationError> {
    u64::try_from(value)
        .ok()
        .filter(|value| *value > 0)
        .ok_or(error)
}

pub fn non_empty(title: String) -> Result<String, ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title)
}
