//! Argument classification and command routing for command-line tools.
//!
//! Build a [`TokenStore`](args::TokenStore) from the raw arguments, hand it
//! to a [`Router`](router::Router) over the registered commands, and pass
//! the store's unassigned tokens on to whichever command comes back.

pub mod args;
pub mod command;
pub mod config;
pub mod logging;
pub mod router;
