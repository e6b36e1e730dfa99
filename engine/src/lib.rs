//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the worksheet lookup engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod aggregate;
pub mod config;
pub mod coord;
pub mod error;
pub mod matrix;
pub mod normalize;
pub mod scan;
pub mod search;

// Re-export commonly used types at the crate root
pub use aggregate::{aggregate, page_estimate, PageGroup, SearchResult};
pub use config::{SearchConfig, DEFAULT_COLUMN_LETTER, DEFAULT_PAGE_SIZE, DEFAULT_SKIP_ROWS};
pub use coord::{cell_address, column_offset, index_to_column, resolve_column};
pub use error::ValidationError;
pub use matrix::{CellScalar, ValueMatrix};
pub use normalize::{normalize_cell, normalize_code, validate_query, SearchMode};
pub use scan::{scan, Hit};
pub use search::{execute, first_hit_address};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_test_free_text_workflow() {
        // A small two-column sheet starting at B3 (origin_row 2, origin_col 1).
        let matrix = ValueMatrix::new(
            vec![
                vec![CellScalar::Text("header".to_string()), CellScalar::Empty],
                vec![CellScalar::Text("widget".to_string()), CellScalar::Number(1.0)],
                vec![CellScalar::Text("gadget".to_string()), CellScalar::Number(2.0)],
                vec![CellScalar::Text("widget".to_string()), CellScalar::Number(3.0)],
            ],
            2,
            1,
        );
        let config = SearchConfig {
            column_letter: "B".to_string(),
            page_size: 2,
            skip_rows: 3,
        };

        let result = execute(&matrix, &config, "widget", SearchMode::FreeText).unwrap();

        // Absolute rows 4 and 6 match; logical rows 1 and 3; pages 1 and 2.
        assert_eq!(result.total_count, 2);
        assert_eq!(result.hits[0], Hit { absolute_row: 4, logical_row: 1, page: 1 });
        assert_eq!(result.hits[1], Hit { absolute_row: 6, logical_row: 3, page: 2 });
        assert_eq!(result.page_groups.len(), 2);
        assert_eq!(first_hit_address(&result, &config), Some("B4".to_string()));
    }

    #[test]
    fn integration_test_settings_record_round_trips_as_json() {
        let config = SearchConfig {
            column_letter: "AA".to_string(),
            page_size: 25,
            skip_rows: 1,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
