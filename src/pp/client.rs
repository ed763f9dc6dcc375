//! HTTP client for the Power Platform admin APIs

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{PpError, Result};
use crate::pp::ListResponse;

/// Base URLs for the three services the admin surface is spread across
#[derive(Debug, Clone)]
pub struct ServiceUrls {
    /// Business Application Platform (environments, roles, policies)
    pub bap: String,
    /// Power Apps (apps, custom connectors)
    pub powerapps: String,
    /// Power Automate (flows, flow owners)
    pub flow: String,
}

impl Default for ServiceUrls {
    fn default() -> Self {
        Self {
            bap: format!("https://{}", api::BAP_HOST),
            powerapps: format!("https://{}", api::POWERAPPS_HOST),
            flow: format!("https://{}", api::FLOW_HOST),
        }
    }
}

#[cfg(test)]
impl ServiceUrls {
    /// Point all three services at a single mock server
    pub fn mock(base_url: &str) -> Self {
        Self {
            bap: base_url.to_string(),
            powerapps: base_url.to_string(),
            flow: base_url.to_string(),
        }
    }
}

/// Authenticated admin API client
///
/// Holds the primary session token plus the optional governance token.
/// Collectors receive this client explicitly; no session state is global.
pub struct AdminClient {
    client: Client,
    token: String,
    /// Governance token; `None` when the secondary sign-in failed
    governance_token: Option<String>,
    urls: ServiceUrls,
}

impl AdminClient {
    /// Create a new client with pooled connections and sane timeouts
    pub fn new(token: String, governance_token: Option<String>) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            governance_token,
            urls: ServiceUrls::default(),
        }
    }

    /// Create a client with custom service URLs (for testing with mock servers)
    #[cfg(test)]
    pub fn with_urls(token: String, governance_token: Option<String>, urls: ServiceUrls) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());
        Self {
            client,
            token,
            governance_token,
            urls,
        }
    }

    /// Base URLs for building request paths
    pub fn urls(&self) -> &ServiceUrls {
        &self.urls
    }

    /// Whether the governance sign-in succeeded
    ///
    /// When false, DLP policy and role assignment collection is skipped.
    pub fn has_governance_session(&self) -> bool {
        self.governance_token.is_some()
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder, token: &str) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(PpError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch all pages from a continuation-linked list endpoint
    ///
    /// Fetches `first_url`, then follows `nextLink` until it is absent.
    /// Items are concatenated in page order; no parallelism, the link to
    /// each page is only known once the previous one has been read.
    pub async fn fetch_all_pages<T>(&self, first_url: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.fetch_all_pages_with(first_url, error_context, &self.token)
            .await
    }

    /// Fetch all pages using the governance token
    pub async fn fetch_all_pages_governance<T>(
        &self,
        first_url: &str,
        error_context: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let token = self
            .governance_token
            .as_deref()
            .ok_or_else(|| PpError::Config("governance session not established".to_string()))?;
        self.fetch_all_pages_with(first_url, error_context, token)
            .await
    }

    async fn fetch_all_pages_with<T>(
        &self,
        first_url: &str,
        error_context: &str,
        token: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut next_url = Some(first_url.to_string());
        let mut page_num: u32 = 1;

        while let Some(url) = next_url {
            debug!("Fetching page {} from: {}", page_num, url);

            let response = self.with_headers(self.client.get(&url), token).send().await?;

            let page_context = if page_num == 1 {
                error_context.to_string()
            } else {
                format!("{} (page {})", error_context, page_num)
            };
            let resp: ListResponse<T> = self.parse_api_response(response, &page_context).await?;

            debug!("Page {} returned {} items", page_num, resp.value.len());
            all_items.extend(resp.value);
            next_url = resp.next_link;
            page_num += 1;
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }
}

#[cfg(test)]
impl AdminClient {
    /// Create a test client with both sessions against a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_urls(
            "test-token".to_string(),
            Some("test-governance-token".to_string()),
            ServiceUrls::mock(base_url),
        )
    }

    /// Create a test client whose governance sign-in "failed"
    pub fn test_client_without_governance(base_url: &str) -> Self {
        Self::with_urls("test-token".to_string(), None, ServiceUrls::mock(base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_urls() {
        let urls = ServiceUrls::default();
        assert_eq!(urls.bap, "https://api.bap.microsoft.com");
        assert_eq!(urls.powerapps, "https://api.powerapps.com");
        assert_eq!(urls.flow, "https://api.flow.microsoft.com");
    }

    #[test]
    fn test_mock_urls_point_at_one_server() {
        let urls = ServiceUrls::mock("http://127.0.0.1:9999");
        assert_eq!(urls.bap, urls.powerapps);
        assert_eq!(urls.bap, urls.flow);
    }

    #[test]
    fn test_governance_session_flag() {
        let client = AdminClient::test_client("http://127.0.0.1:9999");
        assert!(client.has_governance_session());

        let client = AdminClient::test_client_without_governance("http://127.0.0.1:9999");
        assert!(!client.has_governance_session());
    }
}
