//! Command line flags shared by both demo binaries, and the startup path
//! that turns them into a ready client.

use std::path::PathBuf;

use clap::Args;

use crate::client::ConnectorClient;
use crate::config::DemoConfig;
use crate::error::Result;
use crate::logging;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Connector base URL (defaults to http://localhost:3000)
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (e.g., "connector_demos=debug")
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl CommonArgs {
    /// Load config, install tracing, and build the client.
    pub fn bootstrap(self) -> Result<ConnectorClient> {
        let config = DemoConfig::resolve(self.config.as_deref(), self.base_url)?;

        let filter = logging::resolve_filter(self.log_level);
        logging::init(&filter, &config.logging);

        tracing::debug!(
            base_url = %config.connector.base_url,
            log_format = %config.logging.format,
            "Loaded configuration"
        );

        Ok(ConnectorClient::new(config.connector.base_url)?)
    }
}
