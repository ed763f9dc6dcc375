//! Sequential tenant inventory collection
//!
//! One pass: enumerate environments, then per environment collect apps,
//! flows, custom connectors, and role assignments; DLP policies are
//! fetched once, tenant-wide. Collectors marked non-fatal log a warning
//! and contribute zero rows on failure — the report never carries error
//! markers.

pub mod extract;
pub mod rows;

use indicatif::ProgressBar;
use log::{debug, info, warn};

use crate::error::Result;
use crate::pp::AdminClient;

use self::rows::{AppRow, ConnectorRow, EnvironmentRow, FlowRow, PolicyRow, RoleRow};

/// Separator for joined connector and owner lists
const LIST_SEPARATOR: &str = "; ";

/// The six row collections backing the report sheets
///
/// Rows keep API enumeration order; nothing is sorted.
#[derive(Debug, Default)]
pub struct Inventory {
    pub apps: Vec<AppRow>,
    pub flows: Vec<FlowRow>,
    pub connectors: Vec<ConnectorRow>,
    pub policies: Vec<PolicyRow>,
    pub environments: Vec<EnvironmentRow>,
    pub roles: Vec<RoleRow>,
}

/// Collect the full tenant inventory
///
/// Environment enumeration and app/flow listing failures propagate;
/// everything else is best-effort.
pub async fn collect(client: &AdminClient, spinner: &Option<ProgressBar>) -> Result<Inventory> {
    let mut inventory = Inventory::default();

    set_status(spinner, "Enumerating environments...");
    let environments = client.get_environments().await?;
    info!("Found {} environment(s)", environments.len());

    for environment in &environments {
        set_status(
            spinner,
            &format!("Collecting environment '{}'...", environment.display_name()),
        );
        inventory
            .environments
            .push(EnvironmentRow::from_environment(environment));

        collect_apps(client, &environment.name, &mut inventory).await?;
        collect_flows(client, &environment.name, &mut inventory).await?;
        collect_custom_connectors(client, &environment.name, &mut inventory).await;
        collect_role_assignments(client, &environment.name, &mut inventory).await;
    }

    set_status(spinner, "Collecting DLP policies...");
    collect_dlp_policies(client, &mut inventory).await;

    info!(
        "Collected {} apps, {} flows, {} connector usages, {} policies, {} role assignments",
        inventory.apps.len(),
        inventory.flows.len(),
        inventory.connectors.len(),
        inventory.policies.len(),
        inventory.roles.len()
    );
    Ok(inventory)
}

fn set_status(spinner: &Option<ProgressBar>, message: &str) {
    if let Some(s) = spinner {
        s.set_message(message.to_string());
    }
}

async fn collect_apps(
    client: &AdminClient,
    environment: &str,
    inventory: &mut Inventory,
) -> Result<()> {
    let apps = client.get_apps(environment).await?;
    debug!("Environment '{}': {} app(s)", environment, apps.len());

    for app in apps {
        let connectors = extract::connector_names(&app.properties);
        for connector in &connectors {
            inventory.connectors.push(ConnectorRow {
                environment: environment.to_string(),
                parent_type: "App".to_string(),
                parent_name: app.display_name().to_string(),
                connector: connector.clone(),
            });
        }
        inventory.apps.push(AppRow {
            environment: environment.to_string(),
            name: app.display_name().to_string(),
            owner: extract::resolve_owner(&app.properties),
            connector_count: connectors.len(),
            connectors: connectors.join(LIST_SEPARATOR),
            id: app.name,
        });
    }
    Ok(())
}

async fn collect_flows(
    client: &AdminClient,
    environment: &str,
    inventory: &mut Inventory,
) -> Result<()> {
    let flows = client.get_flows(environment).await?;
    debug!("Environment '{}': {} flow(s)", environment, flows.len());

    for flow in flows {
        // Owners come from a separate per-flow lookup; a failure there
        // leaves the column empty and is not an error.
        let owners = match client.get_flow_owners(environment, &flow.name).await {
            Ok(owners) => owners
                .iter()
                .map(|o| o.display_name())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
            Err(e) => {
                warn!("Failed to fetch owners for flow '{}': {}", flow.name, e);
                String::new()
            }
        };

        let connectors = extract::connector_names(&flow.properties);
        for connector in &connectors {
            inventory.connectors.push(ConnectorRow {
                environment: environment.to_string(),
                parent_type: "Flow".to_string(),
                parent_name: flow.display_name().to_string(),
                connector: connector.clone(),
            });
        }
        inventory.flows.push(FlowRow {
            environment: environment.to_string(),
            name: flow.display_name().to_string(),
            owners,
            connector_count: connectors.len(),
            connectors: connectors.join(LIST_SEPARATOR),
            id: flow.name,
        });
    }
    Ok(())
}

async fn collect_custom_connectors(
    client: &AdminClient,
    environment: &str,
    inventory: &mut Inventory,
) {
    match client.get_custom_connectors(environment).await {
        Ok(connectors) => {
            for connector in connectors {
                // Parent name equals the connector name; custom connectors
                // carry no app/flow distinction.
                let name = connector.display_name().to_string();
                inventory.connectors.push(ConnectorRow {
                    environment: environment.to_string(),
                    parent_type: "CustomConnector".to_string(),
                    parent_name: name.clone(),
                    connector: name,
                });
            }
        }
        Err(e) => warn!(
            "Failed to fetch custom connectors for environment '{}': {}",
            environment, e
        ),
    }
}

async fn collect_role_assignments(
    client: &AdminClient,
    environment: &str,
    inventory: &mut Inventory,
) {
    if !client.has_governance_session() {
        debug!(
            "Skipping role assignments for environment '{}': no governance session",
            environment
        );
        return;
    }

    match client.get_role_assignments(environment).await {
        Ok(assignments) => {
            for assignment in &assignments {
                inventory.roles.push(RoleRow {
                    environment: environment.to_string(),
                    role: assignment.role_name().to_string(),
                    principal_type: assignment.principal_type().to_string(),
                    principal_name: assignment.principal_name().to_string(),
                });
            }
        }
        Err(e) => warn!(
            "Failed to fetch role assignments for environment '{}': {}",
            environment, e
        ),
    }
}

async fn collect_dlp_policies(client: &AdminClient, inventory: &mut Inventory) {
    if !client.has_governance_session() {
        debug!("Skipping DLP policies: no governance session");
        return;
    }

    match client.get_dlp_policies().await {
        Ok(policies) => {
            for policy in &policies {
                inventory.policies.push(PolicyRow::from_policy(policy));
            }
        }
        Err(e) => warn!("Failed to fetch DLP policies: {}", e),
    }
}
