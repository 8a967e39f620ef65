//! Error types for business-hours operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid window format: {0}")]
    InvalidWindowFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Negative duration: {0} seconds")]
    NegativeDuration(i64),

    #[error("No working day found: {0}")]
    NoWorkingDayFound(String),

    #[error("Datetime out of range: {0}")]
    OutOfRange(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
