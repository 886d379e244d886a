//! Execution engine module
//!
//! The pagination driver: walks the cursor-paginated studies endpoint, extracts
//! every study and emits records as each page arrives.
//!
//! # Overview
//!
//! The driver is a two-state machine. While `Running`, each step either stops
//! on the page cap without fetching, or fetches one page, emits its records
//! and stops when the page carries no next cursor. Any fetch or sink error
//! aborts the run; records already emitted stay emitted.

mod types;

pub use types::{DriverConfig, RunSummary};

use crate::error::Result;
use crate::extract::{extract_at, IngestionClock};
use crate::http::PageFetcher;
use crate::output::RecordSink;
use crate::pagination::{
    next_cursor, DriverState, PageRequestParams, PaginationState, StopReason, STUDIES_FIELD,
    TOTAL_COUNT_FIELD,
};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Drives page fetches, extraction and emission for one run
pub struct PaginationDriver<F: PageFetcher> {
    fetcher: F,
    config: DriverConfig,
}

impl<F: PageFetcher> PaginationDriver<F> {
    /// Create a new driver
    pub fn new(fetcher: F, config: DriverConfig) -> Self {
        Self { fetcher, config }
    }

    /// Get the driver configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Get the fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run until the page cap is reached or the upstream runs out of pages
    pub async fn run<S: RecordSink>(&self, sink: &mut S) -> Result<RunSummary> {
        let start = Instant::now();
        let mut pagination = PaginationState::new();
        let mut clock = IngestionClock::new();

        info!(
            "Starting sync: search={:?} page_size={} max_pages={}",
            self.config.search, self.config.page_size, self.config.max_pages
        );

        let stop_reason = loop {
            if let DriverState::Stopped(reason) =
                self.step(&mut pagination, &mut clock, sink).await?
            {
                break reason;
            }
        };

        let summary = RunSummary {
            pages_fetched: pagination.pages,
            records_emitted: pagination.emitted,
            records_skipped: pagination.skipped,
            stop_reason,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Completed sync: {} records in {} pages ({} skipped without NCT id), stopped: {}",
            summary.records_emitted, summary.pages_fetched, summary.records_skipped, stop_reason
        );

        Ok(summary)
    }

    /// One transition of the state machine
    async fn step<S: RecordSink>(
        &self,
        pagination: &mut PaginationState,
        clock: &mut IngestionClock,
        sink: &mut S,
    ) -> Result<DriverState> {
        if pagination.cap_reached(self.config.max_pages) {
            return Ok(DriverState::Stopped(StopReason::PageCapReached));
        }

        let params = PageRequestParams::build(
            &self.config.search,
            self.config.page_size,
            pagination.cursor.as_deref(),
            self.config.start_date.as_deref(),
        );
        let body = self.fetcher.fetch_page(&params).await?;

        if params.is_first_page() {
            if let Some(total) = body.get(TOTAL_COUNT_FIELD).and_then(Value::as_u64) {
                debug!("Upstream reports {total} matching studies");
            }
        }

        let studies = body
            .get(STUDIES_FIELD)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let emitted_before = pagination.emitted;
        for study in studies {
            let record = extract_at(study, clock.now());
            if record.is_emittable() {
                sink.emit(&record)?;
                pagination.add_emitted();
            } else {
                pagination.add_skipped();
            }
        }

        pagination.page_done();
        debug!(
            "Page {}: {} studies, {} emitted",
            pagination.pages,
            studies.len(),
            pagination.emitted - emitted_before
        );

        let Some(cursor) = next_cursor(&body) else {
            return Ok(DriverState::Stopped(StopReason::NoNextCursor));
        };
        pagination.set_cursor(cursor);

        if !self.config.page_delay.is_zero() {
            tokio::time::sleep(self.config.page_delay).await;
        }

        Ok(DriverState::Running)
    }
}
