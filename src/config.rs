//! Configuration file for the item-fetcher CLI
//!
//! A small YAML document naming the endpoint and client settings:
//!
//! ```yaml
//! api_url: /api/items
//! base_url: https://shop.example.com
//! limit: 20
//! timeout_secs: 10
//! ```

use crate::error::{Error, Result};
use crate::http::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default page size when neither the file nor the command line sets one
pub const DEFAULT_LIMIT: u32 = 20;

/// Settings loaded from a YAML config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetcherConfig {
    /// Endpoint to query (absolute, or relative to `base_url`)
    #[serde(default)]
    pub api_url: Option<String>,

    /// Base URL for relative endpoints
    #[serde(default)]
    pub base_url: Option<String>,

    /// Page size
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            base_url: None,
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl FetcherConfig {
    /// Load config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse config from a YAML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that deserialization alone cannot enforce
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// The configured endpoint, or an error naming the missing field
    pub fn require_api_url(&self) -> Result<&str> {
        self.api_url
            .as_deref()
            .ok_or_else(|| Error::config("api_url is required (set it in the config file or pass --api-url)"))
    }

    /// Client settings derived from this config
    pub fn client_config(&self) -> ClientConfig {
        let mut builder = ClientConfig::builder().timeout(Duration::from_secs(self.timeout_secs));
        if let Some(base) = &self.base_url {
            builder = builder.base_url(base);
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}
