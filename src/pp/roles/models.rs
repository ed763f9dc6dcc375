//! Role assignment data models

use serde::Deserialize;

/// Role assignment from the admin API
#[derive(Deserialize, Debug, Clone)]
pub struct RoleAssignment {
    pub name: Option<String>,
    pub id: Option<String>,
    pub properties: Option<RoleAssignmentProperties>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RoleAssignmentProperties {
    #[serde(rename = "roleDefinition")]
    pub role_definition: Option<RoleDefinition>,
    pub principal: Option<RolePrincipal>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RoleDefinition {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RolePrincipal {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub principal_type: Option<String>,
}

impl RoleAssignment {
    /// Role name, preferring the definition display name
    pub fn role_name(&self) -> &str {
        let definition = self
            .properties
            .as_ref()
            .and_then(|p| p.role_definition.as_ref());
        definition
            .and_then(|d| d.display_name.as_deref())
            .or_else(|| definition.and_then(|d| d.name.as_deref()))
            .unwrap_or("")
    }

    /// Principal type (User, Group, Tenant, ...)
    pub fn principal_type(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.principal.as_ref())
            .and_then(|p| p.principal_type.as_deref())
            .unwrap_or("")
    }

    /// Principal display name, falling back to the email address
    pub fn principal_name(&self) -> &str {
        let principal = self.properties.as_ref().and_then(|p| p.principal.as_ref());
        principal
            .and_then(|p| p.display_name.as_deref())
            .or_else(|| principal.and_then(|p| p.email.as_deref()))
            .unwrap_or("")
    }
}
