//! Core error types.

use std::fmt;

use thiserror::Error;

/// Catalog errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog failed integrity validation.
    #[error("catalog integrity violated: {}", join_violations(.0))]
    Integrity(Vec<IntegrityViolation>),

    /// A field type token outside the supported vocabulary.
    #[error("unsupported field type `{0}`")]
    UnsupportedFieldType(String),

    /// No entity type with the given slug or id.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// JSON encoding or decoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single catalog-integrity violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// Two entity types share an id.
    DuplicateId(String),
    /// Two entity types share a slug.
    DuplicateSlug(String),
    /// Two fields of one entity type share a name.
    DuplicateField {
        /// Id of the entity type.
        entity: String,
        /// The repeated field name.
        field: String,
    },
    /// A required attribute is blank.
    EmptyAttribute {
        /// Id of the entity type (may itself be blank).
        entity: String,
        /// Which attribute is blank.
        attribute: &'static str,
    },
    /// Slug is not lowercase alphanumerics separated by single hyphens.
    InvalidSlug(String),
    /// Id is not prefixed by the catalog namespace.
    IdOutsideNamespace {
        /// The offending id.
        id: String,
        /// The catalog namespace.
        namespace: String,
    },
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityViolation::DuplicateId(id) => write!(f, "duplicate entity id `{id}`"),
            IntegrityViolation::DuplicateSlug(slug) => write!(f, "duplicate slug `{slug}`"),
            IntegrityViolation::DuplicateField { entity, field } => {
                write!(f, "duplicate field `{field}` in `{entity}`")
            }
            IntegrityViolation::EmptyAttribute { entity, attribute } => {
                write!(f, "empty {attribute} in `{entity}`")
            }
            IntegrityViolation::InvalidSlug(slug) => write!(f, "invalid slug `{slug}`"),
            IntegrityViolation::IdOutsideNamespace { id, namespace } => {
                write!(f, "id `{id}` is outside namespace `{namespace}`")
            }
        }
    }
}

fn join_violations(violations: &[IntegrityViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_error_lists_every_violation() {
        let err = Error::Integrity(vec![
            IntegrityViolation::DuplicateSlug("task".into()),
            IntegrityViolation::InvalidSlug("Task List".into()),
        ]);

        assert_eq!(
            err.to_string(),
            "catalog integrity violated: duplicate slug `task`; invalid slug `Task List`"
        );
    }
}
