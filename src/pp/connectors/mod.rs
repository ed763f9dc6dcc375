//! Custom connector listing (admin scope)

mod api;
mod models;

pub use models::{CustomConnector, CustomConnectorProperties};
