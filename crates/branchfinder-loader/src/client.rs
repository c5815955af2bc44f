//! HTTP client for the branch locator feed.

use std::time::Duration;

use branchfinder_core::Branch;
use reqwest::{Client, Url};

use crate::error::LoadError;
use crate::payload::parse_branch_payload;

/// Fetches the branch dataset from one URL.
pub struct BranchClient {
    client: Client,
    url: Url,
}

impl BranchClient {
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidUrl`] if `url` does not parse, or
    /// [`LoadError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, LoadError> {
        let parsed = Url::parse(url).map_err(|e| LoadError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: parsed,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and parse the dataset.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Http`] on network failure.
    /// - [`LoadError::Status`] on a non-2xx response.
    /// - [`LoadError::Deserialize`] / [`LoadError::UnexpectedShape`] when the
    ///   body is not an accepted payload.
    pub async fn fetch_branches(&self) -> Result<Vec<Branch>, LoadError> {
        tracing::debug!(url = %self.url, "fetching branch dataset");
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.text().await?;
        parse_branch_payload(&body)
    }
}
