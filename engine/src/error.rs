use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token is not in header.payload.signature form")]
    Malformed,

    #[error("token payload base64 error: {source}")]
    Decode {
        #[from]
        source: base64::DecodeError,
    },

    #[error("token payload is not a claims object: {source}")]
    Claims {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("plate: {0}")]
    Plate(String),

    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    #[error("description is required")]
    EmptyDescription,
}
