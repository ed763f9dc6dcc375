//! Power Platform admin API client module
//!
//! This module provides the authenticated client and the per-resource
//! listing operations used to build the tenant inventory.

pub mod apps;
mod auth;
mod client;
pub mod connectors;
pub mod environments;
pub mod flows;
pub mod policies;
pub mod roles;

use serde::Deserialize;

pub use apps::App;
pub use auth::{Authenticator, Credentials};
pub use client::{AdminClient, ServiceUrls};
pub use connectors::CustomConnector;
pub use environments::Environment;
pub use flows::{Flow, FlowOwner};
pub use policies::DlpPolicy;
pub use roles::RoleAssignment;

/// Generic list response wrapper for admin endpoints
///
/// The admin APIs page with a continuation link rather than numbered
/// pages; `next_link` is absent on the last page.
#[derive(Deserialize, Debug)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "nextLink", alias = "@odata.nextLink", default)]
    pub next_link: Option<String>,
}
