//! FILENAME: engine/src/coord.rs
//! PURPOSE: Utilities for converting between spreadsheet coordinate formats.
//! CONTEXT: This module resolves user-supplied column letters (e.g. "A",
//! "AA") to 0-based column indices, maps a resolved index onto a value
//! matrix whose first column is not necessarily column A, and builds
//! A1-style cell addresses for the selection locator.
//! Column "A" = 0, "B" = 1, ..., "Z" = 25, "AA" = 26, etc.

use crate::matrix::ValueMatrix;

/// Resolves a column string (e.g., "A", "AA") to a 0-based column index.
/// "A" -> 0, "B" -> 1, ..., "Z" -> 25, "AA" -> 26, "AB" -> 27, etc.
///
/// Input is trimmed and upper-cased first; matching is case-insensitive.
/// An empty string or any string containing a non-A-Z character resolves
/// to 0 (column "A"). Invalid configuration must never block a search,
/// so there is no error path here.
pub fn resolve_column(col_str: &str) -> u32 {
    let trimmed = col_str.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let mut result: u32 = 0;
    for c in trimmed.chars() {
        let upper = c.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return 0; // Fall back to column "A"
        }
        let digit = (upper as u32) - ('A' as u32) + 1;
        // Letter strings of 7+ characters exceed u32; saturate instead of
        // overflowing. A saturated index lies outside any real used
        // range, so the scan resolves it to zero hits.
        result = result.saturating_mul(26).saturating_add(digit);
    }
    result - 1 // Convert to 0-based
}

/// Converts a 0-based column index to a column string.
/// 0 -> "A", 1 -> "B", ..., 25 -> "Z", 26 -> "AA", 27 -> "AB", etc.
pub fn index_to_column(mut col_index: u32) -> String {
    let mut result = String::new();
    loop {
        let remainder = col_index % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if col_index < 26 {
            break;
        }
        col_index = col_index / 26 - 1;
    }
    result
}

/// Maps a resolved 0-based column index onto a value matrix.
///
/// The matrix's first column sits at `origin_col` in the sheet, so the
/// offset is `resolved - origin_col`. Returns `None` when the target
/// column lies outside the matrix; the caller treats that as zero hits,
/// not an error (the used range simply does not reach that column).
pub fn column_offset(resolved: u32, matrix: &ValueMatrix) -> Option<usize> {
    if resolved < matrix.origin_col {
        return None;
    }
    let offset = (resolved - matrix.origin_col) as usize;
    if offset >= matrix.column_count() {
        return None;
    }
    Some(offset)
}

/// Builds an A1-style cell address from a 0-based column index and a
/// 1-based absolute row number. (26, 100) -> "AA100".
pub fn cell_address(col_index: u32, absolute_row: u32) -> String {
    format!("{}{}", index_to_column(col_index), absolute_row)
}
