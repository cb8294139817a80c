//! Loader configuration
//!
//! The [`LoaderConfig`] is fixed at construction time; the loader never
//! mutates it. Configs can be built programmatically via the builder or
//! loaded from a YAML file.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Loader Config
// ============================================================================

/// Immutable configuration for an article source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Base URL of the search endpoint (no trailing format suffix)
    pub base_url: String,

    /// Response format suffix appended to the base URL (e.g. ".json")
    #[serde(default = "default_response_format")]
    pub response_format: String,

    /// API key, passed as the `api-key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Search query, passed as the `q` query parameter
    #[serde(default)]
    pub query: String,

    /// Number of records per emitted batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Upper bound on the number of pages fetched in one run
    #[serde(default = "default_page_limit")]
    pub page_limit: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Optional user agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            response_format: default_response_format(),
            api_key: String::new(),
            query: String::new(),
            batch_size: default_batch_size(),
            page_limit: default_page_limit(),
            timeout_seconds: default_timeout(),
            user_agent: None,
        }
    }
}

fn default_response_format() -> String {
    ".json".to_string()
}

fn default_batch_size() -> usize {
    10
}

fn default_page_limit() -> u64 {
    10
}

fn default_timeout() -> u64 {
    30
}

impl LoaderConfig {
    /// Create a new config builder
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }

    /// Load a config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Load a config from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        url::Url::parse(&self.base_url)?;
        if self.api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.query.is_empty() {
            return Err(Error::missing_field("query"));
        }
        if self.batch_size == 0 {
            return Err(Error::config("batch_size must be at least 1"));
        }
        Ok(())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`LoaderConfig`]
#[derive(Debug, Default)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
}

impl LoaderConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the response format suffix
    pub fn response_format(mut self, format: impl Into<String>) -> Self {
        self.config.response_format = format.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the search query
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.config.query = query.into();
        self
    }

    /// Set the batch size
    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    /// Set the page limit
    pub fn page_limit(mut self, limit: u64) -> Self {
        self.config.page_limit = limit;
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = seconds;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Build the config
    pub fn build(self) -> LoaderConfig {
        self.config
    }
}
