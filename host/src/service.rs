//! FILENAME: host/src/service.rs
//! PURPOSE: The search service: one busy-guarded search at a time.
//! CONTEXT: Drives a full search request end to end: validate the query,
//! fetch the used-range snapshot from the worksheet provider, run the
//! engine pipeline, and in free-text mode hand the first-hit locator to
//! the selection sink. A second invocation while one is outstanding is
//! blocked outright (no queue, no cancellation). The busy flag is
//! released on every exit path through a scoped guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use engine::{
    execute, first_hit_address, page_estimate, validate_query, SearchConfig, SearchMode,
    SearchResult, ValidationError,
};
use persistence::{load_settings, SettingsBackend};
use thiserror::Error;

use crate::error::HostError;
use crate::provider::{SelectionSink, WorksheetProvider};

/// Why a search produced no result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchFailure {
    /// Another search is still in flight; this one was never started.
    #[error("a search is already in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Everything one finished search reports back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub result: SearchResult,
    /// First-hit cell address, free-text mode only.
    pub locator: Option<String>,
    /// Fractional page-count estimate, fixed-code mode only.
    pub page_estimate: Option<String>,
    /// How many used-range rows the scan walked.
    pub rows_scanned: usize,
}

/// Owns the busy flag and runs searches against host collaborators.
#[derive(Debug, Default)]
pub struct SearchService {
    busy: AtomicBool,
}

/// Releases the busy flag when the search leaves scope, whatever the
/// exit path (success, validation failure, host failure).
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        Some(BusyGuard { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl SearchService {
    pub fn new() -> Self {
        SearchService::default()
    }

    /// Whether a search is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Loads the persisted settings and runs one search with them.
    /// Settings are read once at search start and never written back by
    /// the search itself.
    pub fn run_search_with_settings(
        &self,
        provider: &dyn WorksheetProvider,
        sink: &mut dyn SelectionSink,
        settings: &dyn SettingsBackend,
        query: &str,
        mode: SearchMode,
    ) -> Result<SearchReport, SearchFailure> {
        let config = load_settings(settings);
        self.run_search(provider, sink, &config, query, mode)
    }

    /// Runs one search end to end.
    ///
    /// The query is validated before the host round trip, so a malformed
    /// query never touches the worksheet. The snapshot fetch is the only
    /// suspension point; everything after it is synchronous in-memory
    /// work on the immutable matrix.
    pub fn run_search(
        &self,
        provider: &dyn WorksheetProvider,
        sink: &mut dyn SelectionSink,
        config: &SearchConfig,
        query: &str,
        mode: SearchMode,
    ) -> Result<SearchReport, SearchFailure> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or(SearchFailure::Busy)?;

        let normalized_query = validate_query(query, mode)?;
        let config = config.sanitized();
        let started = Instant::now();

        let matrix = provider.used_range().map_err(|e| {
            log::warn!("used-range fetch failed: {}", e);
            e
        })?;

        let (result, rows_scanned) = match matrix {
            Some(matrix) => {
                // Re-validation inside execute is a no-op: normalization
                // is idempotent.
                let result = execute(&matrix, &config, &normalized_query, mode)?;
                (result, matrix.row_count())
            }
            None => (SearchResult::empty(), 0),
        };

        log::debug!(
            "scanned {} rows in {} ms, {} hits",
            rows_scanned,
            started.elapsed().as_millis(),
            result.total_count
        );

        let locator = match mode {
            SearchMode::FreeText => {
                let address = first_hit_address(&result, &config);
                if let Some(addr) = &address {
                    sink.select(addr)?;
                }
                address
            }
            SearchMode::FixedCode => None,
        };

        let estimate = match mode {
            SearchMode::FixedCode => Some(page_estimate(result.total_count, config.page_size)),
            SearchMode::FreeText => None,
        };

        Ok(SearchReport {
            result,
            locator,
            page_estimate: estimate,
            rows_scanned,
        })
    }
}
