//! Command implementations.

pub mod aggregate;
pub mod config;
pub mod show;
pub mod update;

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration file
    pub config: Config,

    /// Where snapshots are read from and written to
    pub store_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Build a relay client, letting flags override the configuration.
    pub fn client(
        &self,
        url: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> anyhow::Result<relaymap::RelayClient> {
        let url = url
            .or(self.config.relays_url.as_deref())
            .unwrap_or(relaymap::DEFAULT_RELAYS_URL);
        let timeout = timeout_secs.or(self.config.timeout_secs).unwrap_or(30);

        Ok(relaymap::RelayClient::builder()
            .relays_url(url)
            .timeout(Duration::from_secs(timeout))
            .build()?)
    }
}
