use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use plugin_page::config::HostConfig;
use plugin_page::hooks::{self, HookContext};
use plugin_page::logging::init_tracing;
use plugin_page::page::{Event, Page};
use plugin_page::sample::SamplePage;
use plugin_page::storage::JsonFileStore;
use plugin_page::tools;

/// Drive the sample plugin the way a host would: JSON in, JSON out.
#[derive(Debug, Parser)]
#[command(name = "plugin-page", version)]
struct Cli {
    /// Host config file (TOML). Defaults to the platform config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the state document location.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the first page of a session.
    Build {
        /// Host context payload (JSON object).
        #[arg(long)]
        payload: Option<String>,
    },
    /// Read an event record from stdin and render the next page.
    Event,
    /// Read a hook context from stdin and run the named hook.
    Hook { name: String },
    /// Read tool arguments from stdin and run the named tool.
    Tool { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => HostConfig::load_from(path)?,
        None => HostConfig::load()?,
    };
    init_tracing(&config.logging.filter);

    let store_path = cli.store.clone().unwrap_or(config.storage.path);
    let output = run(cli.command, store_path)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(command: Command, store_path: PathBuf) -> Result<Value> {
    let page = SamplePage::new(JsonFileStore::new(store_path));

    let output = match command {
        Command::Build { payload } => {
            let payload = match payload {
                Some(raw) => parse_json(&raw).context("Invalid --payload")?,
                None => Value::Object(Default::default()),
            };
            serde_json::to_value(page.build(&payload))?
        }
        Command::Event => {
            let event: Event = serde_json::from_value(read_stdin_json()?)?;
            serde_json::to_value(page.on_event(&event))?
        }
        Command::Hook { name } => {
            let ctx: HookContext = serde_json::from_value(read_stdin_json()?)
                .context("Hook context must be a JSON object")?;
            hooks::dispatch(&name, &ctx)?
        }
        Command::Tool { name } => tools::dispatch(&name, &read_stdin_json()?)?,
    };
    Ok(output)
}

fn read_stdin_json() -> Result<Value> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read stdin")?;
    parse_json(&raw).context("Invalid JSON on stdin")
}

/// Blank input is an empty object.
fn parse_json(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_str(raw)?)
}
