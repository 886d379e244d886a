//! CLI runner - resolves configuration and executes one run

use crate::cli::commands::Cli;
use crate::config::ConnectorConfig;
use crate::engine::{PaginationDriver, RunSummary};
use crate::error::Result;
use crate::http::HttpClient;
use crate::output::open_output;
use tracing::info;

/// CLI runner
pub struct Runner {
    config: ConnectorConfig,
}

impl Runner {
    /// Create a runner from parsed arguments
    ///
    /// Fails with a configuration error before any network activity.
    pub fn new(cli: &Cli) -> Result<Self> {
        Ok(Self {
            config: cli.to_config()?,
        })
    }

    /// Create a runner from an already resolved configuration
    pub fn from_config(config: ConnectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the resolved configuration
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Fetch, normalize and emit until the run stops
    pub async fn run(&self) -> Result<RunSummary> {
        let client = HttpClient::with_config(self.config.http_config())?;
        let mut sink = open_output(self.config.output.as_deref())?;

        if let Some(path) = &self.config.output {
            info!("Writing records to {}", path.display());
        }

        let driver = PaginationDriver::new(client, self.config.driver_config());
        driver.run(&mut sink).await
    }
}
