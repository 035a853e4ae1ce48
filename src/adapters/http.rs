use crate::config::StatusConfig;
use crate::domain::ports::DirectorySource;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::{redirect, Client, StatusCode};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches the directory with a single GET. TLS certificate and hostname
/// verification stay on; redirects are not followed and there are no retries.
pub struct HttpDirectorySource {
    client: Client,
    url: String,
}

impl HttpDirectorySource {
    pub fn new(config: &StatusConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::none())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl DirectorySource for HttpDirectorySource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Making API request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if status != StatusCode::OK {
            return Err(CheckError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(CheckError::EmptyResponseError);
        }

        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
