//! Flattened report rows, one struct per worksheet

use chrono::DateTime;

use crate::pp::{DlpPolicy, Environment};

/// A row type bound to one worksheet of the report
pub trait SheetRow {
    /// Worksheet name
    const SHEET_NAME: &'static str;
    /// Header row, written once per sheet
    const HEADERS: &'static [&'static str];
    /// Cell values, in header order
    fn cells(&self) -> Vec<String>;
}

/// Reformat an RFC 3339 timestamp for the sheet; unparseable input
/// passes through verbatim.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[derive(Debug, Clone)]
pub struct AppRow {
    pub environment: String,
    pub name: String,
    pub id: String,
    pub owner: String,
    pub connector_count: usize,
    pub connectors: String,
}

impl SheetRow for AppRow {
    const SHEET_NAME: &'static str = "Apps";
    const HEADERS: &'static [&'static str] = &[
        "Environment",
        "Name",
        "AppId",
        "Owner",
        "ConnectorCount",
        "Connectors",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.environment.clone(),
            self.name.clone(),
            self.id.clone(),
            self.owner.clone(),
            self.connector_count.to_string(),
            self.connectors.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct FlowRow {
    pub environment: String,
    pub name: String,
    pub id: String,
    pub owners: String,
    pub connector_count: usize,
    pub connectors: String,
}

impl SheetRow for FlowRow {
    const SHEET_NAME: &'static str = "Flows";
    const HEADERS: &'static [&'static str] = &[
        "Environment",
        "Name",
        "FlowId",
        "Owners",
        "ConnectorCount",
        "Connectors",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.environment.clone(),
            self.name.clone(),
            self.id.clone(),
            self.owners.clone(),
            self.connector_count.to_string(),
            self.connectors.clone(),
        ]
    }
}

/// One connector usage record, denormalized across apps, flows, and
/// custom connectors
#[derive(Debug, Clone)]
pub struct ConnectorRow {
    pub environment: String,
    pub parent_type: String,
    pub parent_name: String,
    pub connector: String,
}

impl SheetRow for ConnectorRow {
    const SHEET_NAME: &'static str = "Connectors";
    const HEADERS: &'static [&'static str] =
        &["Environment", "ParentType", "ParentName", "Connector"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.environment.clone(),
            self.parent_type.clone(),
            self.parent_name.clone(),
            self.connector.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct PolicyRow {
    pub name: String,
    pub id: String,
    pub created_time: String,
    pub last_modified_time: String,
    pub mode: String,
}

impl PolicyRow {
    pub fn from_policy(policy: &DlpPolicy) -> Self {
        Self {
            name: policy.display_name().to_string(),
            id: policy.policy_id().to_string(),
            created_time: format_timestamp(policy.created_time()),
            last_modified_time: format_timestamp(policy.last_modified_time()),
            mode: policy.mode().to_string(),
        }
    }
}

impl SheetRow for PolicyRow {
    const SHEET_NAME: &'static str = "DLPPolicies";
    const HEADERS: &'static [&'static str] =
        &["Name", "PolicyId", "CreatedTime", "LastModifiedTime", "Mode"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.id.clone(),
            self.created_time.clone(),
            self.last_modified_time.clone(),
            self.mode.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct EnvironmentRow {
    pub id: String,
    pub display_name: String,
    pub region: String,
    pub sku: String,
    pub is_default: bool,
    pub created_time: String,
    pub environment_type: String,
}

impl EnvironmentRow {
    pub fn from_environment(environment: &Environment) -> Self {
        Self {
            id: environment.name.clone(),
            display_name: environment.display_name().to_string(),
            region: environment.region().to_string(),
            sku: environment.sku().to_string(),
            is_default: environment.is_default(),
            created_time: format_timestamp(environment.created_time()),
            environment_type: environment.environment_type().to_string(),
        }
    }
}

impl SheetRow for EnvironmentRow {
    const SHEET_NAME: &'static str = "Environments";
    const HEADERS: &'static [&'static str] = &[
        "EnvironmentId",
        "DisplayName",
        "Region",
        "Sku",
        "IsDefault",
        "CreatedTime",
        "Type",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.region.clone(),
            self.sku.clone(),
            if self.is_default { "Yes" } else { "No" }.to_string(),
            self.created_time.clone(),
            self.environment_type.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct RoleRow {
    pub environment: String,
    pub role: String,
    pub principal_type: String,
    pub principal_name: String,
}

impl SheetRow for RoleRow {
    const SHEET_NAME: &'static str = "SecurityRoles";
    const HEADERS: &'static [&'static str] =
        &["Environment", "Role", "PrincipalType", "PrincipalName"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.environment.clone(),
            self.role.clone(),
            self.principal_type.clone(),
            self.principal_name.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_rfc3339() {
        assert_eq!(
            format_timestamp("2023-04-01T10:30:45Z"),
            "2023-04-01 10:30:45"
        );
    }

    #[test]
    fn test_format_timestamp_passthrough() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_app_row_cells_match_headers() {
        let row = AppRow {
            environment: "env-1".to_string(),
            name: "Expense Tracker".to_string(),
            id: "app-1".to_string(),
            owner: "Alice A.".to_string(),
            connector_count: 2,
            connectors: "Office 365 Outlook; SharePoint".to_string(),
        };
        let cells = row.cells();
        assert_eq!(cells.len(), AppRow::HEADERS.len());
        assert_eq!(cells[4], "2");
    }

    #[test]
    fn test_environment_row_default_flag() {
        let row = EnvironmentRow {
            id: "env-1".to_string(),
            display_name: "Contoso".to_string(),
            region: "europe".to_string(),
            sku: "Default".to_string(),
            is_default: true,
            created_time: "2023-04-01 10:00:00".to_string(),
            environment_type: "Production".to_string(),
        };
        let cells = row.cells();
        assert_eq!(cells.len(), EnvironmentRow::HEADERS.len());
        assert_eq!(cells[4], "Yes");
    }

    #[test]
    fn test_all_sheet_names_distinct() {
        let names = [
            AppRow::SHEET_NAME,
            FlowRow::SHEET_NAME,
            ConnectorRow::SHEET_NAME,
            PolicyRow::SHEET_NAME,
            EnvironmentRow::SHEET_NAME,
            RoleRow::SHEET_NAME,
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_connector_row_cells() {
        let row = ConnectorRow {
            environment: "env-1".to_string(),
            parent_type: "CustomConnector".to_string(),
            parent_name: "Contoso Billing".to_string(),
            connector: "Contoso Billing".to_string(),
        };
        assert_eq!(row.cells().len(), ConnectorRow::HEADERS.len());
    }
}
