//! DLP policy API operations

use crate::config::api;
use crate::error::Result;
use crate::pp::AdminClient;

use super::models::DlpPolicy;

impl AdminClient {
    /// List data loss prevention policies for the tenant
    ///
    /// Tenant-wide, fetched once outside the per-environment loop. Uses
    /// the governance session.
    pub async fn get_dlp_policies(&self) -> Result<Vec<DlpPolicy>> {
        let url = format!(
            "{}/providers/Microsoft.BusinessAppPlatform/scopes/admin/apiPolicies?api-version={}",
            self.urls().bap,
            api::API_VERSION
        );
        self.fetch_all_pages_governance(&url, "DLP policies").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PpError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_dlp_policies_success() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path(
                "/providers/Microsoft.BusinessAppPlatform/scopes/admin/apiPolicies",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [
                    {
                        "name": "policy-1",
                        "properties": {
                            "displayName": "Tenant baseline",
                            "definition": {"defaultApiGroup": "General"}
                        }
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let policies = client.get_dlp_policies().await.unwrap();
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].display_name(), "Tenant baseline");
        assert_eq!(policies[0].mode(), "General");
    }

    #[tokio::test]
    async fn test_get_dlp_policies_without_governance_session() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client_without_governance(&mock_server.uri());

        let result = client.get_dlp_policies().await;
        assert!(result.is_err());
        match result.unwrap_err() {
            PpError::Config(msg) => assert!(msg.contains("governance")),
            _ => panic!("Expected PpError::Config"),
        }
    }

    #[tokio::test]
    async fn test_get_dlp_policies_api_error() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path(
                "/providers/Microsoft.BusinessAppPlatform/scopes/admin/apiPolicies",
            ))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client.get_dlp_policies().await;
        assert!(result.is_err());
        match result.unwrap_err() {
            PpError::Api { status, .. } => assert_eq!(status, 500),
            _ => panic!("Expected PpError::Api"),
        }
    }
}
