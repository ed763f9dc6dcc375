//! ppinv - Main entry point

use clap::Parser;
use log::{info, warn};
use std::path::Path;

use ppinv::config::auth;
use ppinv::ui::{create_spinner, finish_spinner, prompt_password};
use ppinv::{collect, print_summary, write_report, AdminClient, Authenticator, Cli, Credentials};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ppinv v{}", env!("CARGO_PKG_VERSION"));

    let credentials = match (cli.username, cli.password) {
        (Some(username), Some(password)) => Some(Credentials { username, password }),
        (Some(username), None) => {
            let password = prompt_password(&username)?;
            Some(Credentials { username, password })
        }
        (None, Some(_)) => {
            warn!("--password without --username is ignored; using device-code sign-in");
            None
        }
        (None, None) => None,
    };

    // Primary session: environments, apps, flows, connectors. Fatal on failure.
    let authenticator = Authenticator::new();
    let token = authenticator
        .sign_in(credentials.as_ref(), auth::POWERAPPS_RESOURCE)
        .await?;
    info!("Primary sign-in succeeded");

    // Governance session: DLP policies and role assignments. Best-effort.
    let governance_token = match authenticator
        .sign_in(credentials.as_ref(), auth::GOVERNANCE_RESOURCE)
        .await
    {
        Ok(token) => Some(token),
        Err(e) => {
            warn!(
                "Governance sign-in failed: {}. DLP policy and role assignment sheets will be empty.",
                e
            );
            None
        }
    };

    let client = AdminClient::new(token, governance_token);

    let spinner = create_spinner("Collecting tenant inventory...", cli.quiet);
    let inventory = collect(&client, &spinner).await?;
    finish_spinner(spinner, "Inventory collected");

    write_report(&inventory, Path::new(&cli.report_path))?;
    info!("Report written to {}", cli.report_path);

    if !cli.quiet {
        print_summary(&inventory);
        println!("Report written to {}", cli.report_path);
    }

    Ok(())
}
