//! FILENAME: engine/src/aggregate.rs
//! PURPOSE: Groups scan hits into per-page summaries.
//! CONTEXT: Takes the ordered hit list the scanner produced and derives
//! the page-indexed grouping, the globally first hit, and the total
//! count. The fixed-code mode instead reports a fractional page estimate
//! (count / page_size); the two derived views are intentionally separate
//! features, not a unified policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scan::Hit;

/// All hits falling on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGroup {
    /// 1-based page bucket.
    pub page: u32,
    /// Number of hits on this page.
    pub count: usize,
    /// Absolute rows of the member hits, in scan order (ascending).
    pub rows: Vec<u32>,
}

/// The complete outcome of one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// All hits sorted by absolute row ascending.
    pub hits: Vec<Hit>,
    /// The topmost hit, or `None` when nothing matched.
    pub first_hit: Option<Hit>,
    /// Per-page groups sorted by page ascending.
    pub page_groups: Vec<PageGroup>,
    /// Total number of hits across all pages.
    pub total_count: usize,
}

impl SearchResult {
    /// An empty result: the normal outcome for zero hits, an empty used
    /// range, or a target column outside the used range.
    pub fn empty() -> Self {
        SearchResult {
            hits: Vec::new(),
            first_hit: None,
            page_groups: Vec::new(),
            total_count: 0,
        }
    }
}

/// Aggregates an ordered hit list into a [`SearchResult`].
///
/// Hits are sorted by absolute row first. The scanner already emits them
/// in ascending order, but "first hit is the topmost" is a documented
/// guarantee, so the sort is explicit rather than assumed.
pub fn aggregate(mut hits: Vec<Hit>) -> SearchResult {
    hits.sort_by_key(|h| h.absolute_row);

    // BTreeMap keeps the group keys sorted ascending for free.
    let mut groups: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for hit in &hits {
        groups.entry(hit.page).or_default().push(hit.absolute_row);
    }

    let page_groups = groups
        .into_iter()
        .map(|(page, rows)| PageGroup {
            page,
            count: rows.len(),
            rows,
        })
        .collect();

    let first_hit = hits.first().copied();
    let total_count = hits.len();

    SearchResult {
        hits,
        first_hit,
        page_groups,
        total_count,
    }
}

/// Renders the fixed-code page estimate: `count / page_size` with up to 4
/// fractional digits, trailing zeros trimmed. This is an approximate
/// page-count estimate, not a page index.
pub fn page_estimate(count: usize, page_size: u32) -> String {
    let value = count as f64 / page_size as f64;
    let formatted = format!("{:.4}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
