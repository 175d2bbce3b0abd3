//! Command descriptors and the registry that owns them.

mod registry;

pub use registry::{CommandRegistry, RegistryError};

use serde::{Deserialize, Serialize};

/// What the router needs to know about a command.
pub trait Command {
    /// Unique, case-sensitive command name.
    fn name(&self) -> &str;

    /// Flag-like alias that selects the command (e.g. `-b`).
    fn shortcut(&self) -> Option<&str> {
        None
    }
}

impl<T: Command + ?Sized> Command for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn shortcut(&self) -> Option<&str> {
        (**self).shortcut()
    }
}

impl<T: Command + ?Sized> Command for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn shortcut(&self) -> Option<&str> {
        (**self).shortcut()
    }
}

/// A plain command descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    #[serde(default)]
    pub shortcut: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shortcut: None,
            description: String::new(),
        }
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Command for CommandSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }
}
