#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder endpoint; the program refuses to run against it.
pub const DEFAULT_API_URL: &str = "https://your-api-url.com/api/users";

/// Status the directory publishes for people who are in the office.
pub const DEFAULT_TARGET_STATUS: &str = "В офисе";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_URL_ENV: &str = "API_URL";
pub const TARGET_STATUS_ENV: &str = "TARGET_STATUS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    pub api_url: String,
    pub target_status: String,
    pub timeout: Duration,
}

impl StatusConfig {
    pub fn new(api_url: impl Into<String>, target_status: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            target_status: target_status.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Builds and validates the configuration.
    ///
    /// An explicit value wins over the environment value, which wins over the
    /// compiled default. Environment values count only when non-empty.
    pub fn resolve(
        api_url_flag: Option<&str>,
        api_url_env: Option<&str>,
        status_flag: Option<&str>,
        status_env: Option<&str>,
    ) -> Result<Self> {
        let api_url = pick(api_url_flag, api_url_env, DEFAULT_API_URL);
        let target_status = pick(status_flag, status_env, DEFAULT_TARGET_STATUS);

        let config = Self::new(api_url, target_status);
        config.validate()?;
        Ok(config)
    }
}

fn pick(flag: Option<&str>, env: Option<&str>, default: &str) -> String {
    match (flag, env) {
        (Some(value), _) => value.to_string(),
        (None, Some(value)) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

impl Validate for StatusConfig {
    fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() || self.api_url == DEFAULT_API_URL {
            return Err(CheckError::usage(format!(
                "API URL is not configured.\n\
                 Change DEFAULT_API_URL in the source or set the {} environment variable.\n\
                 Example: export {}='https://example.com/api/users'",
                API_URL_ENV, API_URL_ENV
            )));
        }

        let url = validate_url(API_URL_ENV, &self.api_url)?;
        if url.scheme() == "http" {
            tracing::warn!("API URL uses plain http: {}", self.api_url);
        }

        validate_non_empty_string("target status", &self.target_status)
    }
}
