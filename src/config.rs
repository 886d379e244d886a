//! Resolved connector configuration
//!
//! Every knob has a default here; the CLI layers environment variables and
//! flags on top and calls [`ConnectorConfig::validate`] before anything
//! touches the network.

use crate::engine::DriverConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_BASE_URL};
use std::path::PathBuf;
use std::time::Duration;

/// Default condition search expression
pub const DEFAULT_SEARCH: &str = r#"Alzheimer OR Dementia OR "mild cognitive impairment""#;
/// Default number of studies per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Default page cap
pub const DEFAULT_MAX_PAGES: u32 = 10;
/// Default pause between pages, in seconds
pub const DEFAULT_SLEEP_SECS: f64 = 0.2;
/// Default per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    /// Studies endpoint
    pub base_url: String,
    /// Condition search expression (empty = no condition filter)
    pub search: String,
    /// Studies per page
    pub page_size: u32,
    /// Maximum pages to fetch
    pub max_pages: u32,
    /// Pause between pages, in seconds
    pub sleep_secs: f64,
    /// Incremental start date; accepted but not applied
    pub start_date: Option<String>,
    /// Per-request timeout, in seconds
    pub timeout_secs: u64,
    /// Output file; stdout when unset
    pub output: Option<PathBuf>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search: DEFAULT_SEARCH.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            sleep_secs: DEFAULT_SLEEP_SECS,
            start_date: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: None,
        }
    }
}

impl ConnectorConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    #[must_use]
    pub fn with_max_pages(mut self, max: u32) -> Self {
        self.max_pages = max;
        self
    }

    #[must_use]
    pub fn with_sleep_secs(mut self, secs: f64) -> Self {
        self.sleep_secs = secs;
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, date: Option<String>) -> Self {
        self.start_date = date;
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    /// Check values that parse but make no sense
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than zero"));
        }
        if Duration::try_from_secs_f64(self.sleep_secs).is_err() {
            return Err(Error::invalid_value(
                "sleep_s",
                format!(
                    "must be a non-negative, representable number of seconds, got {}",
                    self.sleep_secs
                ),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_s", "must be greater than zero"));
        }
        Ok(())
    }

    /// Pause between pages
    ///
    /// Only meaningful after [`validate`](Self::validate) has passed.
    pub fn page_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.sleep_secs).unwrap_or(Duration::ZERO)
    }

    /// HTTP client settings
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }

    /// Driver settings
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig::new(&self.search)
            .with_page_size(self.page_size)
            .with_max_pages(self.max_pages)
            .with_page_delay(self.page_delay())
            .with_start_date(self.start_date.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConnectorConfig::default();
        assert_eq!(config.base_url, "https://clinicaltrials.gov/api/v2/studies");
        assert_eq!(
            config.search,
            r#"Alzheimer OR Dementia OR "mild cognitive impairment""#
        );
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_pages, 10);
        assert!((config.sleep_secs - 0.2).abs() < f64::EPSILON);
        assert!(config.start_date.is_none());
        assert!(config.output.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_page_delay() {
        let config = ConnectorConfig::new().with_sleep_secs(0.2);
        assert_eq!(config.page_delay(), Duration::from_millis(200));

        let config = ConnectorConfig::new().with_sleep_secs(0.0);
        assert_eq!(config.page_delay(), Duration::ZERO);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = ConnectorConfig::new().with_page_size(0).validate().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("page_size"));

        let err = ConnectorConfig::new().with_sleep_secs(-1.0).validate().unwrap_err();
        assert!(err.to_string().contains("sleep_s"));

        let err = ConnectorConfig::new()
            .with_sleep_secs(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(err.is_config());

        let err = ConnectorConfig::new()
            .with_sleep_secs(1e20)
            .validate()
            .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("sleep_s"));

        let err = ConnectorConfig::new().with_timeout_secs(0).validate().unwrap_err();
        assert!(err.to_string().contains("timeout_s"));

        let err = ConnectorConfig::new()
            .with_base_url("not a url")
            .validate()
            .unwrap_err();
        assert!(err.is_config());

        let err = ConnectorConfig::new()
            .with_base_url("ftp://clinicaltrials.gov/")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_max_pages_zero_is_valid() {
        assert!(ConnectorConfig::new().with_max_pages(0).validate().is_ok());
    }

    #[test]
    fn test_driver_config_mapping() {
        let config = ConnectorConfig::new()
            .with_search("Dementia")
            .with_page_size(20)
            .with_max_pages(3)
            .with_sleep_secs(1.5)
            .with_start_date(Some("2024-01-01".to_string()));

        let driver = config.driver_config();
        assert_eq!(driver.search, "Dementia");
        assert_eq!(driver.page_size, 20);
        assert_eq!(driver.max_pages, 3);
        assert_eq!(driver.page_delay, Duration::from_millis(1500));
        assert_eq!(driver.start_date.as_deref(), Some("2024-01-01"));

        let http = config.with_timeout_secs(5).http_config();
        assert_eq!(http.timeout, Duration::from_secs(5));
    }
}
