//! Error types for coverage-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Invalid shift: {0}")]
    InvalidShift(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
