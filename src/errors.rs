use thiserror::Error;

use crate::models::calendar::{CalendarDate, InvalidDateError};

/// Fatal conditions for a quote calculation. Any of these aborts the whole
/// calculation; a partial total is never returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuoteError {
    #[error("invalid date in quote input: {0}")]
    InvalidDate(#[from] InvalidDateError),

    /// No active rate record covers the key on the requested date. The key
    /// and date are carried so the operator can see exactly which catalog
    /// entry is missing.
    #[error("no active rate found for {key} on {date}")]
    RateNotFound { key: String, date: CalendarDate },

    #[error("invalid quote input: {0}")]
    InvalidInput(String),
}
