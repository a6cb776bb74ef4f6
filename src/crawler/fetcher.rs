//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the HTTP client with a descriptive user agent
//! - GET requests with query parameters
//! - Status checking, so callers only ever see successful bodies
//!
//! There is deliberately no retry logic: a failed request is reported once and
//! the crawl controller decides whether to stop or move on.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::HarvestError;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Source of raw page bodies
///
/// Implementations return the body of a successful response, or an error for
/// network failures and non-success statuses.
pub trait Fetcher {
    /// Fetches `url` with the given query parameters appended
    fn fetch(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> impl Future<Output = Result<String, HarvestError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use offer_harvest::config::{CrawlerConfig, UserAgentConfig};
/// use offer_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL)
    let user_agent = format!(
        "{}/{} (+{})",
        user_agent.crawler_name, user_agent.crawler_version, user_agent.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed [`Fetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration
    pub fn from_config(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> Result<Self, HarvestError> {
        Ok(Self::new(build_http_client(user_agent, crawler)?))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, query: &[(String, String)]) -> Result<String, HarvestError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        response.text().await.map_err(|source| HarvestError::Http {
            url: final_url,
            source,
        })
    }
}
