// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # ClinicalTrials.gov connector
//!
//! Pulls studies from the ClinicalTrials.gov v2 API, normalizes each one into a
//! flat record and streams the records out as JSON Lines.
//!
//! ## Features
//!
//! - **Cursor Pagination**: follows `nextPageToken` until exhausted or capped
//! - **Fallback Extraction**: each field tries an ordered list of source paths
//! - **Incremental Emission**: records are written as each page arrives
//! - **Append-only Output**: at-least-once, never buffered for the whole run
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ctgov_connector::config::ConnectorConfig;
//! use ctgov_connector::engine::PaginationDriver;
//! use ctgov_connector::http::HttpClient;
//! use ctgov_connector::output::open_output;
//!
//! #[tokio::main]
//! async fn main() -> ctgov_connector::Result<()> {
//!     let config = ConnectorConfig::new().with_max_pages(2);
//!     config.validate()?;
//!
//!     let client = HttpClient::with_config(config.http_config())?;
//!     let mut sink = open_output(None)?;
//!     let summary = PaginationDriver::new(client, config.driver_config())
//!         .run(&mut sink)
//!         .await?;
//!     eprintln!("{} records", summary.records_emitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                       PaginationDriver                        │
//! │   Running ──(cap reached)──▶ Stopped(PageCapReached)          │
//! │   Running ──(no cursor)────▶ Stopped(NoNextCursor)            │
//! └───────────────────────────────────────────────────────────────┘
//!                                 │
//! ┌──────────────┬────────────────┴───┬──────────────┬────────────┐
//! │  Pagination  │        HTTP        │   Extract    │   Output   │
//! ├──────────────┼────────────────────┼──────────────┼────────────┤
//! │ Params       │ PageFetcher        │ Dot-paths    │ RecordSink │
//! │ Cursor state │ Timeout            │ Fallbacks    │ JSON Lines │
//! └──────────────┴────────────────────┴──────────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Study field extraction
pub mod extract;

/// Request parameters and pagination state
pub mod pagination;

/// Page fetcher and HTTP client
pub mod http;

/// Record sinks
pub mod output;

/// Pagination driver
pub mod engine;

/// Resolved configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use engine::{DriverConfig, PaginationDriver, RunSummary};
pub use extract::{extract, Location, NormalizedRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
