//! Single error type for the whole pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommissionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("malformed date: {0}")]
    MalformedDate(String),

    #[error("negative amount: {0}")]
    NegativeAmount(rust_decimal::Decimal),

    #[error("{0}")]
    Usage(&'static str),
}

pub type Result<T> = std::result::Result<T, CommissionError>;
