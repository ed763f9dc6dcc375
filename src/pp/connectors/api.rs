//! Custom connector API operations

use crate::config::api;
use crate::error::Result;
use crate::pp::AdminClient;

use super::models::CustomConnector;

impl AdminClient {
    /// List custom connectors registered in an environment (admin scope)
    ///
    /// The apis endpoint is tenant-wide; the environment is selected with
    /// an OData `$filter`.
    pub async fn get_custom_connectors(&self, environment: &str) -> Result<Vec<CustomConnector>> {
        let filter_expr = format!("environment eq '{}'", environment);
        let filter = urlencoding::encode(&filter_expr);
        let url = format!(
            "{}/providers/Microsoft.PowerApps/scopes/admin/apis?api-version={}&$filter={}",
            self.urls().powerapps,
            api::API_VERSION,
            filter
        );
        let context = format!("custom connectors for environment '{}'", environment);
        self.fetch_all_pages(&url, &context).await
    }
}
