//! FILENAME: host/src/provider.rs
//! PURPOSE: Collaborator seams toward the real spreadsheet host.
//! CONTEXT: The search service only ever sees these two traits. The
//! worksheet provider performs the single request/response round trip
//! that snapshots the active sheet's used range; the selection sink
//! consumes the locator address the service computed. Rendering, DOM
//! wiring and host-readiness checks all live behind these seams.

use engine::ValueMatrix;

use crate::error::HostError;

/// Supplies the used-range snapshot of the active worksheet.
pub trait WorksheetProvider {
    /// Fetches the used range as a value matrix with its absolute origin.
    /// Returns `Ok(None)` for a worksheet with no used range at all;
    /// the service treats that as zero hits, not an error.
    fn used_range(&self) -> Result<Option<ValueMatrix>, HostError>;
}

/// Accepts an A1-style address and navigates/highlights that cell.
/// The service computes the address; the sink performs the selection.
pub trait SelectionSink {
    fn select(&mut self, address: &str) -> Result<(), HostError>;
}
