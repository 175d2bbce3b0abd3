//! Command router: picks the one command an invocation asks for.
//!
//! The router looks at a single token: the first one nobody has claimed yet
//! (the candidate). In order:
//!
//! 1. No candidate → default command.
//! 2. Candidate starts with `-` → command with that shortcut, if shortcut
//!    routing is on and one matches; otherwise the default command, with the
//!    flag left for it to parse.
//! 3. Anything else → command with that exact name, or [`RouteError::RoutingFailed`].
//!    An unknown name never falls back to the default command.
//!
//! At most the candidate is classified; every other token stays unassigned.

mod error;

pub use error::RouteError;

use serde::{Deserialize, Serialize};

use crate::args::{TokenRole, TokenStore};
use crate::command::Command;

/// Prefix that marks a candidate as a flag rather than a command name.
pub const FLAG_PREFIX: char = '-';

/// Router behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Route flag-like candidates through command shortcuts (default: true).
    #[serde(default = "default_enable_shortcut_routing")]
    pub enable_shortcut_routing: bool,
}

fn default_enable_shortcut_routing() -> bool {
    true
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            enable_shortcut_routing: default_enable_shortcut_routing(),
        }
    }
}

/// Selects a command from `commands` for a token store.
///
/// Holds only borrowed, read-only state, so one router can serve any number
/// of stores.
#[derive(Debug)]
pub struct Router<'a, C> {
    commands: &'a [C],
    default_command: &'a C,
    config: RouterConfig,
}

impl<'a, C: Command> Router<'a, C> {
    /// `commands` is scanned in order; the first match wins.
    pub fn new(commands: &'a [C], default_command: &'a C, config: RouterConfig) -> Self {
        Self {
            commands,
            default_command,
            config,
        }
    }

    /// Pick the command for `store`, classifying the token that selected it.
    ///
    /// On error the store is left untouched.
    pub fn route(&self, store: &mut TokenStore) -> Result<&'a C, RouteError> {
        let Some((index, candidate)) = store.first_unassigned() else {
            tracing::debug!(command = self.default_command.name(), "no candidate, using default");
            return Ok(self.default_command);
        };

        if candidate.starts_with(FLAG_PREFIX) {
            if !self.config.enable_shortcut_routing {
                tracing::debug!(
                    candidate,
                    command = self.default_command.name(),
                    "shortcut routing disabled, using default"
                );
                return Ok(self.default_command);
            }

            return match self.find_by_shortcut(candidate) {
                Some(command) => {
                    tracing::debug!(candidate, command = command.name(), "routed by shortcut");
                    store.classify_at(index, TokenRole::CommandName);
                    Ok(command)
                }
                None => {
                    tracing::debug!(
                        candidate,
                        command = self.default_command.name(),
                        "unknown shortcut, passing flag to default"
                    );
                    Ok(self.default_command)
                }
            };
        }

        match self.find_by_name(candidate) {
            Some(command) => {
                tracing::debug!(command = command.name(), "routed by name");
                store.classify_at(index, TokenRole::CommandName);
                Ok(command)
            }
            None => {
                tracing::debug!(candidate, "no command with this name");
                Err(RouteError::RoutingFailed {
                    candidate: candidate.to_string(),
                })
            }
        }
    }

    fn find_by_shortcut(&self, shortcut: &str) -> Option<&'a C> {
        self.commands
            .iter()
            .find(|c| c.shortcut() == Some(shortcut))
    }

    fn find_by_name(&self, name: &str) -> Option<&'a C> {
        self.commands.iter().find(|c| c.name() == name)
    }
}
