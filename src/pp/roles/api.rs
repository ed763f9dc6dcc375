//! Role assignment API operations

use crate::config::api;
use crate::error::Result;
use crate::pp::AdminClient;

use super::models::RoleAssignment;

impl AdminClient {
    /// List role assignments for an environment
    ///
    /// Uses the governance session; fails with a configuration error when
    /// that sign-in did not succeed.
    pub async fn get_role_assignments(&self, environment: &str) -> Result<Vec<RoleAssignment>> {
        let url = format!(
            "{}/providers/Microsoft.BusinessAppPlatform/scopes/admin/environments/{}/roleAssignments?api-version={}",
            self.urls().bap,
            environment,
            api::API_VERSION
        );
        let context = format!("role assignments for environment '{}'", environment);
        self.fetch_all_pages_governance(&url, &context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PpError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_role_assignments_success() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path(
                "/providers/Microsoft.BusinessAppPlatform/scopes/admin/environments/env-1/roleAssignments",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [
                    {
                        "name": "ra-1",
                        "properties": {
                            "roleDefinition": {"displayName": "Environment Admin"},
                            "principal": {"displayName": "Alice A.", "type": "User"}
                        }
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let assignments = client.get_role_assignments("env-1").await.unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].role_name(), "Environment Admin");
    }

    #[tokio::test]
    async fn test_get_role_assignments_without_governance_session() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client_without_governance(&mock_server.uri());

        let result = client.get_role_assignments("env-1").await;
        assert!(result.is_err());
        match result.unwrap_err() {
            PpError::Config(msg) => assert!(msg.contains("governance")),
            _ => panic!("Expected PpError::Config"),
        }
    }

    #[tokio::test]
    async fn test_get_role_assignments_api_error() {
        let mock_server = MockServer::start().await;
        let client = AdminClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path(
                "/providers/Microsoft.BusinessAppPlatform/scopes/admin/environments/env-2/roleAssignments",
            ))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let result = client.get_role_assignments("env-2").await;
        assert!(result.is_err());
        match result.unwrap_err() {
            PpError::Api { status, .. } => assert_eq!(status, 403),
            _ => panic!("Expected PpError::Api"),
        }
    }
}
