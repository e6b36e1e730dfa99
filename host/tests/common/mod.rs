//! FILENAME: tests/common/mod.rs
//! Test doubles and fixtures for host integration tests.

use engine::{CellScalar, ValueMatrix};
use host::{HostError, SelectionSink, WorksheetProvider};

/// A provider that serves a fixed snapshot.
pub struct FixedProvider {
    pub matrix: Option<ValueMatrix>,
}

impl FixedProvider {
    /// Builds a provider serving a single-column used range starting at
    /// A1. Empty strings become empty cells.
    pub fn single_column(values: &[&str]) -> Self {
        let rows = values
            .iter()
            .map(|v| {
                vec![if v.is_empty() {
                    CellScalar::Empty
                } else {
                    CellScalar::Text(v.to_string())
                }]
            })
            .collect();
        FixedProvider {
            matrix: Some(ValueMatrix::new(rows, 0, 0)),
        }
    }

    /// A worksheet with no used range at all.
    pub fn empty_sheet() -> Self {
        FixedProvider { matrix: None }
    }
}

impl WorksheetProvider for FixedProvider {
    fn used_range(&self) -> Result<Option<ValueMatrix>, HostError> {
        Ok(self.matrix.clone())
    }
}

/// A provider whose round trip always fails.
pub struct FailingProvider;

impl WorksheetProvider for FailingProvider {
    fn used_range(&self) -> Result<Option<ValueMatrix>, HostError> {
        Err(HostError::Transport("sync dropped".to_string()))
    }
}

/// A sink that records every address it was asked to select.
#[derive(Default)]
pub struct RecordingSink {
    pub selected: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }
}

impl SelectionSink for RecordingSink {
    fn select(&mut self, address: &str) -> Result<(), HostError> {
        self.selected.push(address.to_string());
        Ok(())
    }
}
