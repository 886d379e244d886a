//! Pagination state and termination types

use serde_json::Value;
use std::fmt;

/// Response field holding the list of studies
pub const STUDIES_FIELD: &str = "studies";
/// Response field holding the cursor for the next page
pub const NEXT_PAGE_TOKEN_FIELD: &str = "nextPageToken";
/// Response field holding the total match count (when `countTotal=true`)
pub const TOTAL_COUNT_FIELD: &str = "totalCount";

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured page cap was reached before fetching another page
    PageCapReached,
    /// The last page fetched carried no next-page cursor
    NoNextCursor,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageCapReached => write!(f, "page cap reached"),
            Self::NoNextCursor => write!(f, "no next cursor"),
        }
    }
}

/// Driver state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// More pages may be fetched
    #[default]
    Running,
    /// Terminal
    Stopped(StopReason),
}

impl DriverState {
    /// Check if the driver is still running
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Stop reason, if stopped
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self {
            Self::Running => None,
            Self::Stopped(reason) => Some(*reason),
        }
    }
}

/// Loop state for one run
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor for the next page to fetch
    pub cursor: Option<String>,
    /// Pages fetched and fully processed
    pub pages: u32,
    /// Records written to the sink
    pub emitted: u64,
    /// Studies dropped for lacking a primary key
    pub skipped: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the page cap forbids fetching another page
    pub fn cap_reached(&self, max_pages: u32) -> bool {
        self.pages >= max_pages
    }

    /// Record a fully processed page
    pub fn page_done(&mut self) {
        self.pages += 1;
    }

    /// Record one emitted record
    pub fn add_emitted(&mut self) {
        self.emitted += 1;
    }

    /// Record one study dropped for a missing primary key
    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }
}

/// Extract the next-page cursor from a page body
///
/// An empty token is treated the same as a missing one.
pub fn next_cursor(body: &Value) -> Option<String> {
    body.get(NEXT_PAGE_TOKEN_FIELD)
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
