//! Entity type definitions.

use super::field::FieldDef;
use serde::{Deserialize, Serialize};

/// An entity type definition (one kind of minion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    /// Globally unique, namespaced key (e.g. `tasks-task`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL-safe short name, unique across the catalog.
    pub slug: String,
    /// Human-readable summary.
    pub description: String,
    /// A single display glyph.
    pub icon: String,
    /// Ordered field definitions.
    pub schema: Vec<FieldDef>,
}

impl EntityDef {
    /// Create a new entity definition with no fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            icon: String::new(),
            schema: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Add a field to the schema.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.schema.push(field);
        self
    }

    /// Add multiple fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.schema.extend(fields);
        self
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.schema.iter().find(|f| f.name == name)
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.schema.iter().map(|f| f.name.as_str())
    }

    /// Number of fields in the schema.
    pub fn field_count(&self) -> usize {
        self.schema.len()
    }
}
