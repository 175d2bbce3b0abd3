//! Configuration: which commands exist and how the router behaves.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::Config;
