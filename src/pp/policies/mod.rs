//! DLP policy listing (tenant-wide)

mod api;
mod models;

pub use models::{DlpDefinition, DlpPolicy, DlpPolicyProperties};
