//! Schema catalog - the ordered set of entity types exposed to the host registry.

use super::validate::validate_entities;
use super::EntityDef;
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// An ordered, integrity-checked collection of entity type definitions.
///
/// Once built the catalog is never mutated; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaCatalog {
    /// Prefix every entity id carries (`<namespace>-...`).
    namespace: String,
    /// Entity definitions in declaration order.
    entities: Vec<EntityDef>,
}

/// Serialized form accepted by [`SchemaCatalog::from_json`].
#[derive(Deserialize)]
struct RawCatalog {
    namespace: String,
    entities: Vec<EntityDef>,
}

impl SchemaCatalog {
    /// Build a catalog, failing if any integrity rule is violated.
    ///
    /// All violations are reported together in [`Error::Integrity`].
    pub fn new(namespace: impl Into<String>, entities: Vec<EntityDef>) -> Result<Self, Error> {
        let namespace = namespace.into();
        let violations = validate_entities(&namespace, &entities);
        if !violations.is_empty() {
            return Err(Error::Integrity(violations));
        }

        Ok(Self {
            namespace,
            entities,
        })
    }

    /// The catalog namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Entity definitions in declaration order.
    pub fn entities(&self) -> &[EntityDef] {
        &self.entities
    }

    /// Iterate entity definitions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, EntityDef> {
        self.entities.iter()
    }

    /// Number of entity types.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the catalog has no entity types.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Get an entity type by slug.
    pub fn by_slug(&self, slug: &str) -> Option<&EntityDef> {
        self.entities.iter().find(|e| e.slug == slug)
    }

    /// Get an entity type by id.
    pub fn by_id(&self, id: &str) -> Option<&EntityDef> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get an entity type by slug, or [`Error::UnknownType`].
    pub fn require_slug(&self, slug: &str) -> Result<&EntityDef, Error> {
        self.by_slug(slug)
            .ok_or_else(|| Error::UnknownType(slug.to_string()))
    }

    /// All slugs in declaration order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.slug.as_str())
    }

    /// Total number of fields across all entity types.
    pub fn total_fields(&self) -> usize {
        self.entities.iter().map(EntityDef::field_count).sum()
    }

    /// Serialize the catalog to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a catalog from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.namespace, raw.entities)
    }
}

impl<'a> IntoIterator for &'a SchemaCatalog {
    type Item = &'a EntityDef;
    type IntoIter = std::slice::Iter<'a, EntityDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
