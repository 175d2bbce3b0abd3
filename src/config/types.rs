use serde::{Deserialize, Serialize};

use crate::command::CommandSpec;
use crate::router::RouterConfig;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the command selected when nothing else matches.
    pub default_command: String,
    #[serde(default)]
    pub router: RouterConfig,
    /// Registered commands, in routing order.
    pub commands: Vec<CommandSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_command: "help".to_string(),
            router: RouterConfig::default(),
            commands: vec![CommandSpec::new("help")
                .with_shortcut("-h")
                .with_description("Show available commands")],
        }
    }
}
