//! FILENAME: engine/src/config.rs
//! PURPOSE: The user-configurable search settings record.
//! CONTEXT: This struct is exactly the flat record the settings store
//! persists across sessions. The engine reads it at the start of a search
//! and never mutates it. Invalid values are substituted with defaults
//! rather than rejected, so stale or hand-edited settings cannot block a
//! search.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLUMN_LETTER: &str = "A";
pub const DEFAULT_PAGE_SIZE: u32 = 18;
pub const DEFAULT_SKIP_ROWS: u32 = 0;

/// Search settings: target column, pagination layout, header rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Spreadsheet-style column letter ("A".."Z", "AA", ...). Invalid
    /// letters resolve to column "A" at scan time.
    pub column_letter: String,
    /// Rows per page; pages are 1-based buckets of this many logical rows.
    pub page_size: u32,
    /// Leading rows excluded from matching and pagination (header rows).
    pub skip_rows: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            column_letter: DEFAULT_COLUMN_LETTER.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            skip_rows: DEFAULT_SKIP_ROWS,
        }
    }
}

impl SearchConfig {
    /// Returns a copy with out-of-range fields replaced by defaults.
    /// A page size of zero would make ceiling division meaningless, so it
    /// falls back to the default instead of erroring.
    pub fn sanitized(&self) -> SearchConfig {
        SearchConfig {
            column_letter: self.column_letter.clone(),
            page_size: if self.page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                self.page_size
            },
            skip_rows: self.skip_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.column_letter, "A");
        assert_eq!(config.page_size, 18);
        assert_eq!(config.skip_rows, 0);
    }

    #[test]
    fn test_sanitized_replaces_zero_page_size() {
        let config = SearchConfig {
            column_letter: "B".to_string(),
            page_size: 0,
            skip_rows: 3,
        };
        let clean = config.sanitized();
        assert_eq!(clean.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(clean.column_letter, "B");
        assert_eq!(clean.skip_rows, 3);
    }

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"page_size": 25}"#).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.column_letter, "A");
        assert_eq!(config.skip_rows, 0);
    }
}
