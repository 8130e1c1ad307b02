/*
[INPUT]:  Optional YAML configuration file, CEXIO_* environment variables
[OUTPUT]: Client configuration and resolved credentials
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use cexio_adapter::{CexioClient, ClientConfig, Credentials};

const DEFAULT_CEX_BASE_URL: &str = "https://cex.io/api/";
const DEFAULT_GHASH_BASE_URL: &str = "https://cex.io/api/ghash.io/";

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Credentials for private commands; falls back to the environment
    #[serde(default)]
    pub credentials: Option<Credentials>,
    /// HTTP client settings
    #[serde(default)]
    pub client: ClientSection,
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSection {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_cex_base_url")]
    pub cex_base_url: String,
    #[serde(default = "default_ghash_base_url")]
    pub ghash_base_url: String,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            cex_base_url: default_cex_base_url(),
            ghash_base_url: default_ghash_base_url(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_cex_base_url() -> String {
    DEFAULT_CEX_BASE_URL.to_string()
}

fn default_ghash_base_url() -> String {
    DEFAULT_GHASH_BASE_URL.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("parse config yaml")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.client.timeout_secs),
            connect_timeout: Duration::from_secs(self.client.connect_timeout_secs),
        }
    }

    /// Credentials from the file, otherwise from `CEXIO_*` variables
    ///
    /// `None` leaves the client usable for public commands only.
    pub fn resolve_credentials(&self) -> Option<Credentials> {
        if let Some(credentials) = &self.credentials {
            return Some(credentials.clone());
        }
        match Credentials::from_env() {
            Ok(credentials) => Some(credentials),
            Err(err) => {
                debug!(error = %err, "no credentials configured; private commands unavailable");
                None
            }
        }
    }

    /// Build the API client described by this configuration
    pub fn build_client(&self) -> Result<CexioClient> {
        let mut client = CexioClient::with_config_and_base_urls(
            self.client_config(),
            &self.client.cex_base_url,
            &self.client.ghash_base_url,
        )
        .context("build cex.io client")?;
        if let Some(credentials) = self.resolve_credentials() {
            client.set_credentials(credentials);
        }
        Ok(client)
    }
}
