//! FILENAME: engine/src/scan.rs
//! PURPOSE: Row-by-row match scanner over a value-matrix snapshot.
//! CONTEXT: Walks one column of the used range top to bottom, skips
//! configured header rows, normalizes each candidate cell and compares it
//! to the pre-normalized query. Each match is mapped to its logical row
//! (position after skip-row removal) and page (ceiling division by the
//! page size). Pure function of its inputs; no I/O.

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::matrix::ValueMatrix;
use crate::normalize::{normalize_cell, SearchMode};

/// A single matching cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// The row's real 1-based position in the full sheet.
    pub absolute_row: u32,
    /// 1-based position after skip-row removal; always >= 1.
    pub logical_row: u32,
    /// 1-based page bucket, ceil(logical_row / page_size); always >= 1.
    pub page: u32,
}

/// Scans the matrix column at `offset` for cells matching `query`.
///
/// `query` must already be normalized for `mode` (see
/// [`crate::normalize::validate_query`]). Hits come back in ascending
/// row-scan order. A zero page size is substituted with the default,
/// same as [`crate::config::SearchConfig::sanitized`].
pub fn scan(
    matrix: &ValueMatrix,
    offset: usize,
    query: &str,
    config: &SearchConfig,
    mode: SearchMode,
) -> Vec<Hit> {
    let page_size = if config.page_size == 0 {
        crate::config::DEFAULT_PAGE_SIZE
    } else {
        config.page_size
    };
    let mut hits = Vec::new();

    for r in 0..matrix.row_count() {
        // Spreadsheet rows are 1-based while matrix indices are 0-based.
        let absolute_row = matrix.origin_row + r as u32 + 1;

        // Header rows are excluded from matching and pagination alike.
        if absolute_row <= config.skip_rows {
            continue;
        }

        let Some(scalar) = matrix.cell(r, offset) else {
            continue;
        };
        let Some(normalized) = normalize_cell(scalar, mode) else {
            continue;
        };

        if normalized == query {
            // logical_row is derived from the absolute position, not from
            // how many candidate rows preceded this one.
            let logical_row = absolute_row - config.skip_rows;
            let page = logical_row.div_ceil(page_size);
            hits.push(Hit {
                absolute_row,
                logical_row,
                page,
            });
        }
    }

    hits
}
