//! Console UI helpers

mod prompt;
mod spinner;

pub use prompt::prompt_password;
pub use spinner::{create_spinner, finish_spinner};
