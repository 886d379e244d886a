//! CLI arguments
//!
//! Every option falls back to an environment variable, then to the defaults in
//! [`crate::config`].

use crate::config::{
    ConnectorConfig, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH, DEFAULT_SLEEP_SECS,
    DEFAULT_TIMEOUT_SECS,
};
use crate::http::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;

/// ClinicalTrials.gov studies to JSON Lines on stdout
#[derive(Parser, Debug, Clone)]
#[command(name = "ctgov-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Condition search expression
    #[arg(long, env = "SEARCH", default_value = DEFAULT_SEARCH)]
    pub search: String,

    /// API page size (max ~100)
    #[arg(long, env = "PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Max pages to fetch
    #[arg(long, env = "MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Delay between pages (seconds)
    #[arg(long = "sleep-s", env = "SLEEP_S", default_value_t = DEFAULT_SLEEP_SECS)]
    pub sleep_s: f64,

    /// ISO date for incremental runs (accepted, not yet applied)
    #[arg(long, env = "START_DATE")]
    pub start_date: Option<String>,

    /// Studies endpoint
    #[arg(long, env = "CTGOV_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[arg(long = "timeout-s", env = "TIMEOUT_S", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_s: u64,

    /// Append records to this file instead of stdout
    #[arg(short, long, env = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve into a validated configuration
    pub fn to_config(&self) -> crate::Result<ConnectorConfig> {
        let config = ConnectorConfig::new()
            .with_base_url(&self.base_url)
            .with_search(&self.search)
            .with_page_size(self.page_size)
            .with_max_pages(self.max_pages)
            .with_sleep_secs(self.sleep_s)
            .with_start_date(self.start_date.clone().filter(|d| !d.is_empty()))
            .with_timeout_secs(self.timeout_s)
            .with_output(self.output.clone());
        config.validate()?;
        Ok(config)
    }
}
