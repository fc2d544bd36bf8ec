//! Client configuration
//!
//! `ClientConfig` is loaded from YAML. Every field has a default, so an empty
//! file (or no file at all) targets a local json-server collection:
//!
//! ```yaml
//! base_url: http://localhost:3000/monsters
//! page_size: 50
//! mode: link            # or: page
//! limit_param: _limit
//! page_param: _page
//! rel_match: contains   # or: exact
//! timeout_secs: 30
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::pagination::{PageQuery, PaginationController, RelMatch};
use crate::types::NavigationMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default collection endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/monsters";

/// Default records per page
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Collection URL; pages are read from it and records are posted to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Navigation strategy
    #[serde(default)]
    pub mode: NavigationMode,

    /// Query parameter for the page size
    #[serde(default = "default_limit_param")]
    pub limit_param: String,

    /// Query parameter for the page number
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Relation matching rule for `link` headers
    #[serde(default)]
    pub rel_match: RelMatch,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_limit_param() -> String {
    crate::pagination::DEFAULT_LIMIT_PARAM.to_string()
}

fn default_page_param() -> String {
    crate::pagination::DEFAULT_PAGE_PARAM.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            mode: NavigationMode::default(),
            limit_param: default_limit_param(),
            page_param: default_page_param(),
            rel_match: RelMatch::default(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            read => read
                .with_context(|| format!("Failed to read config file '{}'", path.display()))?,
        };
        Self::from_yaml_str(&content)
    }

    /// Parse and validate config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field for usable values
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::invalid_value("base_url", "cannot be empty"));
        }
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.limit_param.is_empty() {
            return Err(Error::invalid_value("limit_param", "cannot be empty"));
        }
        if self.page_param.is_empty() {
            return Err(Error::invalid_value("page_param", "cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be at least 1"));
        }

        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .header("Accept", "application/json");
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }

    /// Fresh pagination controller for a new session
    pub fn controller(&self) -> Result<PaginationController> {
        let query = PageQuery::new(Url::parse(&self.base_url)?, self.page_size)
            .with_params(self.limit_param.clone(), self.page_param.clone());
        Ok(PaginationController::from_query(query, self.mode)?.with_rel_match(self.rel_match))
    }
}
