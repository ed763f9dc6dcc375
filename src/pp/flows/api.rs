//! Flow API operations

use crate::config::api;
use crate::error::Result;
use crate::pp::AdminClient;

use super::models::{Flow, FlowOwner};

impl AdminClient {
    /// List all flows in an environment (admin scope)
    pub async fn get_flows(&self, environment: &str) -> Result<Vec<Flow>> {
        let url = format!(
            "{}/providers/Microsoft.ProcessSimple/scopes/admin/environments/{}/flows?api-version={}",
            self.urls().flow,
            environment,
            api::API_VERSION
        );
        let context = format!("flows for environment '{}'", environment);
        self.fetch_all_pages(&url, &context).await
    }

    /// List the owners of a single flow (admin scope)
    ///
    /// Issued per flow; callers treat a failure here as non-fatal.
    pub async fn get_flow_owners(&self, environment: &str, flow: &str) -> Result<Vec<FlowOwner>> {
        let url = format!(
            "{}/providers/Microsoft.ProcessSimple/scopes/admin/environments/{}/flows/{}/owners?api-version={}",
            self.urls().flow,
            environment,
            flow,
            api::API_VERSION
        );
        let context = format!("owners for flow '{}'", flow);
        self.fetch_all_pages(&url, &context).await
    }
}
