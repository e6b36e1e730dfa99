//! FILENAME: host/src/error.rs

use thiserror::Error;

/// A failed round trip to the spreadsheet host. Terminal for the search
/// it occurred in; no retries, no partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("host communication failed: {0}")]
    Transport(String),
}
