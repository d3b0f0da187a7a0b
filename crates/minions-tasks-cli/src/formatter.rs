//! Output formatters for catalog listings.

use clap::ValueEnum;
use comfy_table::{Cell, Table};
use minions_tasks_core::EntityDef;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format a summary of every entity type.
    fn format_type_list(&self, types: &[EntityDef]) -> String;

    /// Format one entity type with its ordered fields.
    fn format_type_detail(&self, entity: &EntityDef) -> String;

    /// Format a simple message.
    fn format_message(&self, message: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_type_list(&self, types: &[EntityDef]) -> String {
        let mut table = Table::new();
        table.set_header(vec!["", "Name", "Slug", "Description", "Fields"]);

        for entity in types {
            table.add_row(vec![
                Cell::new(&entity.icon),
                Cell::new(&entity.name),
                Cell::new(&entity.slug),
                Cell::new(&entity.description),
                Cell::new(format!(
                    "{}: {}",
                    entity.field_count(),
                    entity.field_names().collect::<Vec<_>>().join(", ")
                )),
            ]);
        }

        format!("{}\n{} type(s)", table, types.len())
    }

    fn format_type_detail(&self, entity: &EntityDef) -> String {
        let mut table = Table::new();
        table.set_header(vec!["Field", "Type", "Label"]);

        for field in &entity.schema {
            table.add_row(vec![
                Cell::new(&field.name),
                Cell::new(field.field_type),
                Cell::new(&field.label),
            ]);
        }

        format!(
            "{}  {}\n{}\nID: {}  Slug: {}\n\n{}",
            entity.icon, entity.name, entity.description, entity.id, entity.slug, table
        )
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_type_list(&self, types: &[EntityDef]) -> String {
        serde_json::to_string_pretty(types).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_type_detail(&self, entity: &EntityDef) -> String {
        serde_json::to_string_pretty(entity).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_message(&self, message: &str) -> String {
        serde_json::json!({
            "message": message
        })
        .to_string()
    }
}

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_type_list(&self, types: &[EntityDef]) -> String {
        let mut output = String::from("id,name,slug,description,fields\n");
        for entity in types {
            output.push_str(&format!(
                "\"{}\",\"{}\",\"{}\",\"{}\",{}\n",
                escape_csv(&entity.id),
                escape_csv(&entity.name),
                escape_csv(&entity.slug),
                escape_csv(&entity.description),
                entity.field_count()
            ));
        }
        output
    }

    fn format_type_detail(&self, entity: &EntityDef) -> String {
        let mut output = String::from("name,type,label\n");
        for field in &entity.schema {
            output.push_str(&format!(
                "\"{}\",\"{}\",\"{}\"\n",
                escape_csv(&field.name),
                field.field_type,
                escape_csv(&field.label)
            ));
        }
        output
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Escape a string for CSV.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}
