//! Engine types
//!
//! Driver configuration and the summary returned at the end of a run.

use crate::pagination::StopReason;
use std::time::Duration;

/// Configuration for the pagination driver
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Condition search expression
    pub search: String,
    /// Studies per page
    pub page_size: u32,
    /// Maximum pages to fetch (0 = fetch nothing)
    pub max_pages: u32,
    /// Pause between pages
    pub page_delay: Duration,
    /// Placeholder for incremental runs; passed to the parameter builder only
    pub start_date: Option<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            page_size: 100,
            max_pages: 10,
            page_delay: Duration::from_millis(200),
            start_date: None,
        }
    }
}

impl DriverConfig {
    /// Create a driver config for a search expression
    #[must_use]
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Default::default()
        }
    }

    /// Set page size
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Set the page cap
    #[must_use]
    pub fn with_max_pages(mut self, max: u32) -> Self {
        self.max_pages = max;
        self
    }

    /// Set the inter-page delay
    #[must_use]
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Set the start date placeholder
    #[must_use]
    pub fn with_start_date(mut self, date: Option<String>) -> Self {
        self.start_date = date;
        self
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages fetched and processed
    pub pages_fetched: u32,
    /// Records written to the sink
    pub records_emitted: u64,
    /// Studies dropped for lacking an NCT id
    pub records_skipped: u64,
    /// Why the run ended
    pub stop_reason: StopReason,
    /// Duration in milliseconds
    pub duration_ms: u64,
}
