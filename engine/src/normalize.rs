//! FILENAME: engine/src/normalize.rs
//! PURPOSE: Cell and query normalization policies for the two search modes.
//! CONTEXT: Matching is exact string equality over normalized text. The
//! fixed-code mode canonicalizes 5-digit postal-style codes so that
//! "328", "00328" and the numeric 328.0 all compare equal; the free-text
//! mode only trims surrounding whitespace. The query is validated with
//! the same policy before any scan runs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::matrix::CellScalar;

/// Which normalization and reporting policy a search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// 5-digit code lookup: zero-padded canonical form, count + page
    /// estimate reporting.
    FixedCode,
    /// Trimmed exact-text lookup: page groups + first-hit locator.
    FreeText,
}

/// Numeric-ish text, e.g. "12345" or "12345.0".
static NUMERIC_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.0+)?$").unwrap());

/// Bare digits short enough to pad to 5.
static SHORT_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,5}$").unwrap());

/// Exactly five digits, the only shape a fixed-code query may take.
static FIVE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").unwrap());

/// Canonicalizes text to a zero-padded 5-digit code where possible.
///
/// Numeric-ish input (optionally with a trailing ".0") is parsed as an
/// integer and re-rendered zero-padded to 5 characters; 1-5 bare digits
/// are zero-padded directly; anything else passes through trimmed but
/// otherwise untouched. Idempotent: normalizing twice equals normalizing
/// once.
pub fn normalize_code(text: &str) -> String {
    let s = text.trim();
    if s.is_empty() {
        return String::new();
    }
    if NUMERIC_CODE.is_match(s) {
        // Codes longer than 5 digits keep their full width, matching the
        // zero-pad semantics of padStart.
        let digits = s.split('.').next().unwrap_or(s);
        let stripped = digits.trim_start_matches('0');
        let value = if stripped.is_empty() { "0" } else { stripped };
        return format!("{:0>5}", value);
    }
    if SHORT_DIGITS.is_match(s) {
        return format!("{:0>5}", s);
    }
    s.to_string()
}

/// Applies the mode's normalization policy to raw text.
pub fn normalize_text(text: &str, mode: SearchMode) -> String {
    match mode {
        SearchMode::FixedCode => normalize_code(text),
        SearchMode::FreeText => text.trim().to_string(),
    }
}

/// Normalizes a cell for comparison. Empty cells yield no candidate and
/// can therefore never match, even against an empty query.
pub fn normalize_cell(scalar: &CellScalar, mode: SearchMode) -> Option<String> {
    let text = scalar.display_text()?;
    let normalized = normalize_text(&text, mode);
    if normalized.is_empty() {
        return None;
    }
    Some(normalized)
}

/// Validates and normalizes the query up front; the scan never runs on a
/// rejected query.
pub fn validate_query(query: &str, mode: SearchMode) -> Result<String, ValidationError> {
    let normalized = normalize_text(query, mode);
    match mode {
        SearchMode::FixedCode => {
            if FIVE_DIGITS.is_match(&normalized) {
                Ok(normalized)
            } else {
                Err(ValidationError::InvalidCode(normalized))
            }
        }
        SearchMode::FreeText => {
            if normalized.is_empty() {
                Err(ValidationError::EmptyQuery)
            } else {
                Ok(normalized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_code_pads_short_digits() {
        assert_eq!(normalize_code("328"), "00328");
        assert_eq!(normalize_code("06328"), "06328");
        assert_eq!(normalize_code("0"), "00000");
    }

    #[test]
    fn test_normalize_code_strips_trailing_point_zero() {
        assert_eq!(normalize_code("00328.0"), "00328");
        assert_eq!(normalize_code("12345.00"), "12345");
        assert_eq!(normalize_code("6328.0"), "06328");
    }

    #[test]
    fn test_normalize_code_leaves_other_text_alone() {
        assert_eq!(normalize_code("abc"), "abc");
        assert_eq!(normalize_code("12a45"), "12a45");
        assert_eq!(normalize_code("12.5"), "12.5");
        assert_eq!(normalize_code("  abc  "), "abc");
    }

    #[test]
    fn test_normalize_code_keeps_wide_codes() {
        assert_eq!(normalize_code("123456"), "123456");
        assert_eq!(normalize_code("123456.0"), "123456");
    }

    #[test]
    fn test_normalize_code_is_idempotent() {
        for input in ["328", "00328.0", "99999", "abc", "12.5", "", "  7  "] {
            let once = normalize_code(input);
            assert_eq!(normalize_code(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_normalize_cell_skips_empty() {
        assert_eq!(normalize_cell(&CellScalar::Empty, SearchMode::FreeText), None);
        assert_eq!(
            normalize_cell(&CellScalar::Text("   ".to_string()), SearchMode::FreeText),
            None
        );
        assert_eq!(
            normalize_cell(&CellScalar::Number(328.0), SearchMode::FixedCode),
            Some("00328".to_string())
        );
    }

    #[test]
    fn test_validate_query_fixed_code() {
        assert_eq!(validate_query("06328", SearchMode::FixedCode), Ok("06328".to_string()));
        assert_eq!(validate_query("328", SearchMode::FixedCode), Ok("00328".to_string()));
        assert_eq!(validate_query("12345.0", SearchMode::FixedCode), Ok("12345".to_string()));
        assert!(matches!(
            validate_query("123456", SearchMode::FixedCode),
            Err(ValidationError::InvalidCode(_))
        ));
        assert!(matches!(
            validate_query("abc", SearchMode::FixedCode),
            Err(ValidationError::InvalidCode(_))
        ));
        assert!(matches!(
            validate_query("", SearchMode::FixedCode),
            Err(ValidationError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_validate_query_free_text() {
        assert_eq!(validate_query(" foo ", SearchMode::FreeText), Ok("foo".to_string()));
        assert_eq!(validate_query("", SearchMode::FreeText), Err(ValidationError::EmptyQuery));
        assert_eq!(validate_query("   ", SearchMode::FreeText), Err(ValidationError::EmptyQuery));
    }
}
