//! Command registry: single source of truth for routable commands.

use std::collections::HashSet;

use thiserror::Error;

use crate::command::{Command, CommandSpec};
use crate::router::{Router, RouterConfig};

/// Ways a command list can break the router's uniqueness assumptions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Command name must not be empty")]
    EmptyName,

    #[error("Command '{name}' is registered more than once")]
    DuplicateName { name: String },

    #[error("Shortcut '{shortcut}' is used by both '{first}' and '{second}'")]
    DuplicateShortcut {
        shortcut: String,
        first: String,
        second: String,
    },

    #[error("Shortcut '{shortcut}' of command '{name}' must start with '-'")]
    InvalidShortcut { name: String, shortcut: String },

    #[error("Default command '{name}' is not registered")]
    MissingDefault { name: String },
}

impl RegistryError {
    pub fn error_type(&self) -> &'static str {
        match self {
            RegistryError::EmptyName => "empty_name",
            RegistryError::DuplicateName { .. } => "duplicate_name",
            RegistryError::DuplicateShortcut { .. } => "duplicate_shortcut",
            RegistryError::InvalidShortcut { .. } => "invalid_shortcut",
            RegistryError::MissingDefault { .. } => "missing_default",
        }
    }
}

/// Validated, ordered list of commands plus the default one.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    default_index: usize,
}

impl CommandRegistry {
    /// Validate `commands` and pick `default_command` out of them.
    ///
    /// Checks:
    /// - Every name is non-empty and unique
    /// - Every shortcut starts with `-` and is unique
    /// - The default command is one of `commands`
    pub fn new(commands: Vec<CommandSpec>, default_command: &str) -> Result<Self, RegistryError> {
        validate(&commands)?;

        let default_index = commands
            .iter()
            .position(|c| c.name == default_command)
            .ok_or_else(|| RegistryError::MissingDefault {
                name: default_command.to_string(),
            })?;

        Ok(Self {
            commands,
            default_index,
        })
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn default_command(&self) -> &CommandSpec {
        &self.commands[self.default_index]
    }

    /// Router over this registry.
    pub fn router(&self, config: RouterConfig) -> Router<'_, CommandSpec> {
        Router::new(&self.commands, self.default_command(), config)
    }
}

fn validate(commands: &[CommandSpec]) -> Result<(), RegistryError> {
    let mut names = HashSet::new();
    let mut shortcuts: Vec<(&str, &str)> = Vec::new();

    for command in commands {
        if command.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if !names.insert(command.name.as_str()) {
            return Err(RegistryError::DuplicateName {
                name: command.name.clone(),
            });
        }

        let Some(shortcut) = command.shortcut() else {
            continue;
        };
        if !shortcut.starts_with('-') {
            return Err(RegistryError::InvalidShortcut {
                name: command.name.clone(),
                shortcut: shortcut.to_string(),
            });
        }
        if let Some((_, owner)) = shortcuts.iter().find(|(s, _)| *s == shortcut) {
            return Err(RegistryError::DuplicateShortcut {
                shortcut: shortcut.to_string(),
                first: owner.to_string(),
                second: command.name.clone(),
            });
        }
        shortcuts.push((shortcut, command.name.as_str()));
    }

    Ok(())
}
