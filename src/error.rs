use thiserror::Error;

/// Construction-time failures of a [`PaymentRequest`](crate::domain::request::PaymentRequest).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("payee name is {len} characters long, the limit is {max}")]
    NameTooLong { len: usize, max: usize },
    #[error("payee city is {len} characters long, the limit is {max}")]
    CityTooLong { len: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum PixError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PixError>;
