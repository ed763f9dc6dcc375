//! Flow data models

use serde::Deserialize;
use serde_json::Value;

/// Flow from the admin API
///
/// `properties` stays raw JSON for the same reason as apps: the shared
/// connector extractor walks it without a schema.
#[derive(Deserialize, Debug, Clone)]
pub struct Flow {
    pub name: String,
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Value,
}

impl Flow {
    /// Human-readable name; falls back to the identifier
    pub fn display_name(&self) -> &str {
        self.properties
            .get("displayName")
            .and_then(Value::as_str)
            .unwrap_or(&self.name)
    }
}

/// One entry from a flow's owners listing
#[derive(Deserialize, Debug, Clone)]
pub struct FlowOwner {
    pub name: Option<String>,
    pub properties: Option<FlowOwnerProperties>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FlowOwnerProperties {
    pub principal: Option<OwnerPrincipal>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OwnerPrincipal {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl FlowOwner {
    /// Owner display name, falling back to the email address
    pub fn display_name(&self) -> &str {
        let principal = self
            .properties
            .as_ref()
            .and_then(|p| p.principal.as_ref());
        principal
            .and_then(|p| p.display_name.as_deref())
            .or_else(|| principal.and_then(|p| p.email.as_deref()))
            .unwrap_or("")
    }
}
