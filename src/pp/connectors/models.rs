//! Custom connector data models

use serde::Deserialize;

/// Custom connector (an "api" resource) from the admin API
#[derive(Deserialize, Debug, Clone)]
pub struct CustomConnector {
    pub name: String,
    pub id: Option<String>,
    pub properties: Option<CustomConnectorProperties>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CustomConnectorProperties {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

impl CustomConnector {
    /// Human-readable name; falls back to the identifier
    pub fn display_name(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.display_name.as_deref())
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_connector_deserialization() {
        let json = r#"{
            "name": "shared_contoso-billing",
            "id": "/providers/Microsoft.PowerApps/apis/shared_contoso-billing",
            "properties": {"displayName": "Contoso Billing"}
        }"#;

        let connector: CustomConnector = serde_json::from_str(json).unwrap();
        assert_eq!(connector.display_name(), "Contoso Billing");
    }

    #[test]
    fn test_custom_connector_name_fallback() {
        let json = r#"{"name": "shared_bare"}"#;
        let connector: CustomConnector = serde_json::from_str(json).unwrap();
        assert_eq!(connector.display_name(), "shared_bare");
    }
}
