//! Field type vocabulary understood by the host registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Field types supported by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    /// Free-form text.
    String,
    /// One value out of a host-defined option list.
    Select,
    /// True or false.
    Boolean,
}

impl FieldType {
    /// Every supported field type, in vocabulary order.
    pub const ALL: [FieldType; 3] = [FieldType::String, FieldType::Select, FieldType::Boolean];

    /// The wire token for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Select => "select",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(FieldType::String),
            "select" => Ok(FieldType::Select),
            "boolean" => Ok(FieldType::Boolean),
            other => Err(Error::UnsupportedFieldType(other.to_string())),
        }
    }
}

impl TryFrom<String> for FieldType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}
