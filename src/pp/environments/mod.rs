//! Environment listing (admin scope)

mod api;
mod models;

pub use models::{Environment, EnvironmentProperties};
