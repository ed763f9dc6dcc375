//! Environment data models

use serde::Deserialize;

/// Environment from the admin API
///
/// `name` is the environment identifier (e.g. `Default-<tenant guid>`);
/// `id` is the full resource path.
#[derive(Deserialize, Debug, Clone)]
pub struct Environment {
    pub name: String,
    pub id: Option<String>,
    pub location: Option<String>,
    pub properties: Option<EnvironmentProperties>,
}

/// Environment attributes from the admin API
#[derive(Deserialize, Debug, Clone)]
pub struct EnvironmentProperties {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "createdTime")]
    pub created_time: Option<String>,
    #[serde(rename = "environmentSku")]
    pub environment_sku: Option<String>,
    #[serde(rename = "isDefault")]
    pub is_default: Option<bool>,
    #[serde(rename = "environmentType")]
    pub environment_type: Option<String>,
}

impl Environment {
    /// Get display name from properties
    pub fn display_name(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.display_name.as_deref())
            .unwrap_or("")
    }

    /// Get the Azure region the environment lives in
    pub fn region(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// Get SKU from properties
    pub fn sku(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.environment_sku.as_deref())
            .unwrap_or("")
    }

    /// Whether this is the tenant default environment
    pub fn is_default(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.is_default)
            .unwrap_or(false)
    }

    /// Get created time from properties
    pub fn created_time(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.created_time.as_deref())
            .unwrap_or("")
    }

    /// Get environment type from properties
    pub fn environment_type(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.environment_type.as_deref())
            .unwrap_or("")
    }
}
