//! Page fetcher trait

use crate::error::Result;
use crate::pagination::PageRequestParams;
use async_trait::async_trait;
use serde_json::Value;

/// Fetches one page of studies
///
/// Implementations perform a single request and return the parsed body.
/// Failures are returned as-is; retrying is not the fetcher's job.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page described by `params`
    async fn fetch_page(&self, params: &PageRequestParams) -> Result<Value>;
}
