//! HTTP module
//!
//! Provides the page fetcher seam and its reqwest-backed implementation.
//!
//! # Features
//!
//! - **Bounded requests**: every call carries a per-request timeout
//! - **Error classification**: timeouts, non-success statuses and malformed
//!   bodies map to distinct [`Error`](crate::Error) variants
//! - **No retries**: failures propagate to the caller unchanged

mod client;
mod fetcher;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL};
pub use fetcher::PageFetcher;
