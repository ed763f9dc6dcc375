//! ppinv - Power Platform tenant inventory exporter
//!
//! Signs in to the Power Platform admin APIs, enumerates tenant
//! resources, and writes a six-sheet Excel workbook for governance
//! review.
//!
//! # Features
//!
//! - Lists environments, apps, flows, custom connectors, role
//!   assignments, and DLP policies (admin scope)
//! - Resolves app owners and flow owners, and extracts the connectors
//!   each app/flow depends on
//! - Credential or device-code sign-in
//! - Automatic continuation-link pagination
//!
//! # Example
//!
//! ```bash
//! # Interactive (device-code) sign-in, default report path
//! ppinv
//!
//! # Non-interactive sign-in, custom report path
//! ppinv -u admin@contoso.com -p <PASSWORD> -r contoso-inventory.xlsx
//!
//! # Verbose logging, no spinner
//! ppinv -l debug -q
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod pp;
pub mod report;
pub mod ui;

pub use cli::Cli;
pub use error::{PpError, Result};
pub use inventory::{collect, Inventory};
pub use pp::{AdminClient, Authenticator, Credentials, Environment};
pub use report::{print_summary, write_report};
