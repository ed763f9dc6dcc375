//! App data models

use serde::Deserialize;
use serde_json::Value;

/// App from the admin API
///
/// `properties` is kept as raw JSON: owner resolution and connector
/// extraction traverse it dynamically (the shape carries no schema
/// guarantee), and both tolerate anything missing.
#[derive(Deserialize, Debug, Clone)]
pub struct App {
    pub name: String,
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Value,
}

impl App {
    /// Human-readable name; falls back to the identifier
    pub fn display_name(&self) -> &str {
        self.properties
            .get("displayName")
            .and_then(Value::as_str)
            .unwrap_or(&self.name)
    }
}
