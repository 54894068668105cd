//! Error types for the request boundary.

use serde::Serialize;
use thiserror::Error;

/// Invalid-argument failures raised before any processing begins.
///
/// Both variants are synchronous and non-recoverable by the routine itself;
/// the caller must fix the call. Every input that passes validation, however
/// degenerate, produces a well-defined successful result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum TopWordsError {
    /// No content was supplied.
    #[error("content is required but was not provided")]
    MissingContent,

    /// The requested word count is negative.
    #[error("top-word count must be non-negative, got {n}")]
    NegativeCount { n: i64 },
}
