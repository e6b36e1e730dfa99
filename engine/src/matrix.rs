//! FILENAME: engine/src/matrix.rs
//! PURPOSE: Defines the value-matrix snapshot the scanner operates on.
//! CONTEXT: This file contains the `CellScalar` enum and `ValueMatrix`
//! struct. A matrix is a rectangular, row-major snapshot of a worksheet's
//! used range together with the absolute position of its top-left cell,
//! supplied by the host collaborator once per search and then discarded.

use serde::{Deserialize, Serialize};

/// An opaque scalar cell value as reported by the host worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellScalar {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl CellScalar {
    /// Returns the display text of the scalar, or `None` for an empty
    /// cell. Empty cells never participate in matching.
    pub fn display_text(&self) -> Option<String> {
        match self {
            CellScalar::Empty => None,
            CellScalar::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{:.0}", n))
                } else {
                    Some(format!("{}", n))
                }
            }
            CellScalar::Text(s) => Some(s.clone()),
            CellScalar::Boolean(b) => {
                Some(if *b { "TRUE" } else { "FALSE" }.to_string())
            }
        }
    }
}

/// A rectangular, row-major snapshot of a used range.
///
/// `origin_row` and `origin_col` are the 0-based absolute coordinates of
/// `values[0][0]` within the full sheet; the used range does not have to
/// start at A1. The snapshot is immutable for the duration of a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueMatrix {
    values: Vec<Vec<CellScalar>>,
    /// 0-based absolute sheet row of matrix row 0.
    pub origin_row: u32,
    /// 0-based absolute sheet column of matrix column 0.
    pub origin_col: u32,
}

impl ValueMatrix {
    /// Creates a matrix from row-major values. Ragged rows are padded with
    /// `Empty` so the matrix is always rectangular.
    pub fn new(mut values: Vec<Vec<CellScalar>>, origin_row: u32, origin_col: u32) -> Self {
        let width = values.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut values {
            row.resize(width, CellScalar::Empty);
        }
        ValueMatrix {
            values,
            origin_row,
            origin_col,
        }
    }

    /// An empty matrix, as returned for a worksheet with no used range.
    pub fn empty() -> Self {
        ValueMatrix {
            values: Vec::new(),
            origin_row: 0,
            origin_col: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    pub fn column_count(&self) -> usize {
        self.values.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Retrieves the scalar at 0-based matrix coordinates.
    /// Returns `None` when the coordinates fall outside the matrix.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellScalar> {
        self.values.get(row).and_then(|r| r.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(CellScalar::Empty.display_text(), None);
        assert_eq!(
            CellScalar::Number(6328.0).display_text(),
            Some("6328".to_string())
        );
        assert_eq!(
            CellScalar::Number(1.5).display_text(),
            Some("1.5".to_string())
        );
        assert_eq!(
            CellScalar::Text("  x ".to_string()).display_text(),
            Some("  x ".to_string())
        );
        assert_eq!(
            CellScalar::Boolean(true).display_text(),
            Some("TRUE".to_string())
        );
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let matrix = ValueMatrix::new(
            vec![
                vec![CellScalar::Text("a".to_string()), CellScalar::Text("b".to_string())],
                vec![CellScalar::Text("c".to_string())],
            ],
            0,
            0,
        );
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.column_count(), 2);
        assert_eq!(matrix.cell(1, 1), Some(&CellScalar::Empty));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = ValueMatrix::empty();
        assert_eq!(matrix.row_count(), 0);
        assert_eq!(matrix.column_count(), 0);
        assert_eq!(matrix.cell(0, 0), None);
    }
}
