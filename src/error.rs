//! Error types for dynarray
//!
//! Provides a unified error type for all container operations.

use thiserror::Error;

/// Result type alias using SeqError
pub type Result<T> = std::result::Result<T, SeqError>;

/// Unified error type for sequence container operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeqError {
    // -------------------------------------------------------------------------
    // Argument Errors
    // -------------------------------------------------------------------------
    #[error("invalid argument: required collection `{0}` is absent")]
    InvalidArgument(&'static str),

    // -------------------------------------------------------------------------
    // Bounds Errors
    // -------------------------------------------------------------------------
    #[error("index {index} out of range for count {count}")]
    IndexOutOfRange { index: usize, count: usize },

    // -------------------------------------------------------------------------
    // State Errors
    // -------------------------------------------------------------------------
    #[error("collection is empty")]
    EmptyCollection,
}
