//! Error handling for approvex-store
//!
//! Wraps approvex-core AxError with store-specific helpers

use approvex_core::errors::{AxError, AxErrorKind};

/// Result type alias using AxError
pub type Result<T> = std::result::Result<T, AxError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> AxError {
    AxError::new(AxErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a corrupt reference error
pub fn reference_corrupt(name: &str, reason: &str) -> AxError {
    AxError::new(AxErrorKind::ReferenceCorrupt)
        .with_op("load_reference")
        .with_name(name)
        .with_message(reason.to_string())
}

/// Create an invalid comparison name error
pub fn invalid_name(name: &str, reason: &str) -> AxError {
    AxError::new(AxErrorKind::InvalidInput)
        .with_op("resolve_reference_path")
        .with_name(name)
        .with_message(reason.to_string())
}
