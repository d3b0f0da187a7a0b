//! Minions Tasks Command-Line Interface
//!
//! Browse, export, and check the task schema catalog.

mod commands;
mod formatter;

use clap::Parser;
use commands::Command;
use formatter::OutputFormat;

/// Minions Tasks Command-Line Interface
#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(
    version,
    about = "Task and work management across agents, humans, and workflows"
)]
pub struct Args {
    /// Output format
    #[arg(long, global = true, default_value = "table", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("minions_tasks_cli=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = minions_tasks_core::try_build_catalog()?;
    let formatter = formatter::create_formatter(args.format);

    tracing::debug!(command = ?args.command, format = %args.format, "executing command");
    let output = commands::execute(&args.command, &catalog, &*formatter)?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TypesCommand;

    #[test]
    fn test_parse_types_show() {
        let args = Args::parse_from(["tasks", "types", "show", "task", "--format", "json"]);

        assert_eq!(args.format, OutputFormat::Json);
        assert!(matches!(
            args.command,
            Command::Types {
                command: TypesCommand::Show { ref slug }
            } if slug == "task"
        ));
    }

    #[test]
    fn test_parse_ls_alias_and_default_format() {
        let args = Args::parse_from(["tasks", "types", "ls"]);

        assert_eq!(args.format, OutputFormat::Table);
        assert!(matches!(
            args.command,
            Command::Types {
                command: TypesCommand::List
            }
        ));
    }

    #[test]
    fn test_parse_client_options() {
        let args = Args::parse_from(["tasks", "client", "-o", "owner=x", "--option", "limit=5"]);

        match args.command {
            Command::Client {
                options,
                pin_version,
            } => {
                assert!(!pin_version);
                assert_eq!(options.len(), 2);
                assert_eq!(options[1], ("limit".to_string(), serde_json::json!(5)));
            }
            other => panic!("expected client command, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
