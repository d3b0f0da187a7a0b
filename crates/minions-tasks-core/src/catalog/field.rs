//! Field definitions for entity types.

use super::types::FieldType;
use serde::{Deserialize, Serialize};

/// A field definition within an entity type's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name (unique within its entity type).
    pub name: String,
    /// Field data type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Display label.
    pub label: String,
}

impl FieldDef {
    /// Create a new field definition.
    pub fn new(name: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: label.into(),
        }
    }

    /// Create a field labeled with its own name.
    pub fn named(name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            field_type,
        }
    }

    /// Create a string field labeled with its name.
    pub fn string(name: impl Into<String>) -> Self {
        Self::named(name, FieldType::String)
    }

    /// Create a select field labeled with its name.
    pub fn select(name: impl Into<String>) -> Self {
        Self::named(name, FieldType::Select)
    }

    /// Create a boolean field labeled with its name.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::named(name, FieldType::Boolean)
    }
}
