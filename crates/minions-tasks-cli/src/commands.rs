//! Subcommand definitions and execution.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use minions_tasks_core::tasks::NAMESPACE;
use minions_tasks_core::{
    create_client_with_policy, custom_types, ClientOptions, EntityDef, SchemaCatalog,
    VersionPolicy, VERSION,
};
use serde_json::Value;

use crate::formatter::Formatter;

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show project info
    Info,

    /// Inspect MinionType schemas
    Types {
        #[command(subcommand)]
        command: TypesCommand,
    },

    /// Check catalog integrity (built-in catalog unless --file is given)
    Check {
        /// JSON catalog file to check instead of the built-in catalog
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the client configuration for the given options
    Client {
        /// Option as key=value; the value is parsed as JSON when possible
        #[arg(short = 'o', long = "option", value_parser = parse_option)]
        options: Vec<(String, Value)>,

        /// Always report the package version, ignoring a `version` option
        #[arg(long)]
        pin_version: bool,
    },
}

/// `types` subcommands.
#[derive(Subcommand, Debug)]
pub enum TypesCommand {
    /// List all available MinionTypes
    #[command(alias = "ls")]
    List,

    /// Show detailed schema for a MinionType
    Show {
        /// Type slug (e.g. `task`)
        slug: String,
    },

    /// Export the catalog as JSON
    Export,
}

/// Execute a command against the catalog and return its output.
pub fn execute(
    command: &Command,
    catalog: &SchemaCatalog,
    formatter: &dyn Formatter,
) -> Result<String, Box<dyn Error>> {
    match command {
        Command::Info => Ok(formatter.format_message(&info(catalog))),

        Command::Types { command } => match command {
            TypesCommand::List => Ok(formatter.format_type_list(catalog.entities())),
            TypesCommand::Show { slug } => {
                let entity = catalog.require_slug(slug).map_err(|e| {
                    format!(
                        "{} (available: {})",
                        e,
                        catalog.slugs().collect::<Vec<_>>().join(", ")
                    )
                })?;
                Ok(formatter.format_type_detail(entity))
            }
            TypesCommand::Export => Ok(catalog.to_json()?),
        },

        Command::Check { file } => {
            let checked = match file {
                Some(path) => load_catalog(path)?,
                None => check_entities(NAMESPACE, custom_types())?,
            };
            Ok(formatter.format_message(&format!(
                "catalog `{}` ok: {} type(s), {} field(s)",
                checked.namespace(),
                checked.len(),
                checked.total_fields()
            )))
        }

        Command::Client {
            options,
            pin_version,
        } => {
            let policy = if *pin_version {
                VersionPolicy::Pinned
            } else {
                VersionPolicy::CallerOverrides
            };
            let options: ClientOptions = options.iter().cloned().collect();
            Ok(create_client_with_policy(options, policy).to_json()?)
        }
    }
}

fn info(catalog: &SchemaCatalog) -> String {
    format!(
        "Minions Tasks\n\
         Task and work management across agents, humans, and workflows\n\
         \n  Version:   {}\n  Namespace: {}\n  Types:     {}",
        VERSION,
        catalog.namespace(),
        catalog.len()
    )
}

/// Validate entity definitions and assemble them into a catalog.
fn check_entities(
    namespace: &str,
    entities: Vec<EntityDef>,
) -> Result<SchemaCatalog, Box<dyn Error>> {
    tracing::debug!(namespace, entities = entities.len(), "checking catalog integrity");
    Ok(SchemaCatalog::new(namespace, entities)?)
}

/// Read and validate a JSON catalog file.
fn load_catalog(path: &Path) -> Result<SchemaCatalog, Box<dyn Error>> {
    tracing::debug!(path = %path.display(), "loading catalog file");
    let content = std::fs::read_to_string(path)?;
    Ok(SchemaCatalog::from_json(&content)?)
}

/// Parse a `key=value` option.
fn parse_option(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty option key in `{s}`"));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
