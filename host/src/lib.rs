//! FILENAME: host/src/lib.rs
//! PURPOSE: Main library entry point (host bridge).
//! CONTEXT: Exposes the collaborator traits and the busy-guarded search
//! service. The real spreadsheet host plugs in behind the traits; the
//! engine stays pure underneath.

pub mod error;
pub mod provider;
pub mod service;

pub use error::HostError;
pub use provider::{SelectionSink, WorksheetProvider};
pub use service::{SearchFailure, SearchReport, SearchService};
