//! App API operations

use crate::config::api;
use crate::error::Result;
use crate::pp::AdminClient;

use super::models::App;

impl AdminClient {
    /// List all apps in an environment (admin scope)
    pub async fn get_apps(&self, environment: &str) -> Result<Vec<App>> {
        let url = format!(
            "{}/providers/Microsoft.PowerApps/scopes/admin/environments/{}/apps?api-version={}",
            self.urls().powerapps,
            environment,
            api::API_VERSION
        );
        let context = format!("apps for environment '{}'", environment);
        self.fetch_all_pages(&url, &context).await
    }
}
