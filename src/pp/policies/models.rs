//! DLP policy data models

use serde::Deserialize;

/// Data loss prevention policy from the admin API
#[derive(Deserialize, Debug, Clone)]
pub struct DlpPolicy {
    pub name: Option<String>,
    pub id: Option<String>,
    pub properties: Option<DlpPolicyProperties>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DlpPolicyProperties {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "createdTime")]
    pub created_time: Option<String>,
    #[serde(rename = "lastModifiedTime")]
    pub last_modified_time: Option<String>,
    pub definition: Option<DlpDefinition>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DlpDefinition {
    /// Group that connectors not named by the policy fall into
    #[serde(rename = "defaultApiGroup")]
    pub default_api_group: Option<String>,
}

impl DlpPolicy {
    /// Get display name from properties
    pub fn display_name(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.display_name.as_deref())
            .unwrap_or("")
    }

    /// Policy identifier
    pub fn policy_id(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Get created time from properties
    pub fn created_time(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.created_time.as_deref())
            .unwrap_or("")
    }

    /// Get last modified time from properties
    pub fn last_modified_time(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.last_modified_time.as_deref())
            .unwrap_or("")
    }

    /// Policy mode: the default connector group ("General" or "Blocked")
    pub fn mode(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.definition.as_ref())
            .and_then(|d| d.default_api_group.as_deref())
            .unwrap_or("")
    }
}
