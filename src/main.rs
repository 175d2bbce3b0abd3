use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use clirouter::args::{join, TokenStore};
use clirouter::config::Config;
use clirouter::logging::init_tracing;

/// Route a command line to one of the configured commands.
#[derive(Parser, Debug)]
#[command(name = "clirouter", version)]
struct Cli {
    /// Config file (default: ~/.config/clirouter/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable routing by command shortcuts
    #[arg(long)]
    no_shortcuts: bool,

    /// Print the routing result as JSON
    #[arg(long)]
    json: bool,

    /// Command line to route instead of ARGV (double quotes group words)
    #[arg(long, value_name = "STRING", conflicts_with = "argv")]
    line: Option<String>,

    /// Arguments to route; the first one is the program name
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    argv: Vec<String>,
}

#[derive(Serialize)]
struct Routed<'a> {
    command: &'a str,
    description: &'a str,
    remaining: Vec<String>,
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    let registry = config.registry()?;

    let mut router_config = config.router;
    if cli.no_shortcuts {
        router_config.enable_shortcut_routing = false;
    }

    let mut store = match cli.line {
        Some(line) => TokenStore::parse(&line),
        None if cli.argv.is_empty() => TokenStore::from_tokens(
            std::env::args_os()
                .take(1)
                .map(|a| a.to_string_lossy().into_owned()),
        ),
        None => TokenStore::from_tokens(cli.argv),
    };
    tracing::debug!("Routing: {}", store);

    let command = match registry.router(router_config).route(&mut store) {
        Ok(command) => command,
        Err(e) => {
            if cli.json {
                let body = serde_json::json!({
                    "error": {
                        "type": e.error_type(),
                        "message": e.to_string(),
                        "candidate": e.candidate(),
                    }
                });
                println!("{}", body);
            }
            return Err(e.into());
        }
    };
    let remaining = store.unassigned_tokens();

    if cli.json {
        let routed = Routed {
            command: &command.name,
            description: &command.description,
            remaining,
        };
        println!("{}", serde_json::to_string(&routed)?);
    } else {
        println!("command: {}", command.name);
        if !command.description.is_empty() {
            println!("description: {}", command.description);
        }
        println!("remaining: {}", join(&remaining));
    }

    Ok(())
}
