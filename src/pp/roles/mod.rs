//! Environment role assignment listing

mod api;
mod models;

pub use models::{RoleAssignment, RoleAssignmentProperties, RoleDefinition, RolePrincipal};
