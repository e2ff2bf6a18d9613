//! Adapter error type.

use thiserror::Error;

use crate::ValueKind;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("value is not an array (found {0})")]
    NotAnArray(ValueKind),
    #[error("value is not an object (found {0})")]
    NotAnObject(ValueKind),
    #[error("failed to freeze value: {0}")]
    Freeze(String),
    #[error("failed to parse document: {0}")]
    Parse(String),
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
