//! FILENAME: engine/src/error.rs

use thiserror::Error;

/// A query rejected before any scan starts. Validation failures never
/// produce partial results; the scan simply does not run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("query must normalize to exactly 5 digits, got \"{0}\"")]
    InvalidCode(String),
}
