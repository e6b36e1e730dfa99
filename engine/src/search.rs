//! FILENAME: engine/src/search.rs
//! PURPOSE: The full search pipeline over one value-matrix snapshot.
//! CONTEXT: Ties the pieces together: validate the query, resolve the
//! target column, map it onto the matrix, scan, and aggregate. A target
//! column outside the used range is a normal zero-hit outcome, not an
//! error. The pipeline is synchronous and pure; fetching the snapshot and
//! acting on the locator are the host crate's business.

use crate::aggregate::{aggregate, SearchResult};
use crate::config::SearchConfig;
use crate::coord::{cell_address, column_offset, resolve_column};
use crate::error::ValidationError;
use crate::matrix::ValueMatrix;
use crate::normalize::{validate_query, SearchMode};
use crate::scan::scan;

/// Runs the scan-normalize-classify-aggregate pipeline on a snapshot.
///
/// Fails only on query validation; every other degenerate input (empty
/// matrix, out-of-range column) yields an empty result.
pub fn execute(
    matrix: &ValueMatrix,
    config: &SearchConfig,
    query: &str,
    mode: SearchMode,
) -> Result<SearchResult, ValidationError> {
    let normalized_query = validate_query(query, mode)?;
    let config = config.sanitized();

    let resolved = resolve_column(&config.column_letter);
    let Some(offset) = column_offset(resolved, matrix) else {
        return Ok(SearchResult::empty());
    };

    let hits = scan(matrix, offset, &normalized_query, &config, mode);
    Ok(aggregate(hits))
}

/// Computes the A1-style locator address for a result's first hit, using
/// the column the search actually ran against. Returns `None` when there
/// was no hit. The address is plain data; navigation belongs to the
/// selection sink.
pub fn first_hit_address(result: &SearchResult, config: &SearchConfig) -> Option<String> {
    let first = result.first_hit?;
    let col_index = resolve_column(&config.column_letter);
    Some(cell_address(col_index, first.absolute_row))
}
