//! Environment API operations

use crate::config::api;
use crate::error::Result;
use crate::pp::AdminClient;

use super::models::Environment;

impl AdminClient {
    /// List all environments in the tenant (admin scope)
    ///
    /// Drives the outer collection loop; an empty result is not an error.
    pub async fn get_environments(&self) -> Result<Vec<Environment>> {
        let url = format!(
            "{}/providers/Microsoft.BusinessAppPlatform/scopes/admin/environments?api-version={}",
            self.urls().bap,
            api::API_VERSION
        );
        self.fetch_all_pages(&url, "environments").await
    }
}
