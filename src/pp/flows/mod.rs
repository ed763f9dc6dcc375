//! Flow listing and flow owner lookup (admin scope)

mod api;
mod models;

pub use models::{Flow, FlowOwner, FlowOwnerProperties, OwnerPrincipal};
