//! Catalog integrity validation.
//!
//! Runs every check and collects all violations so a malformed catalog is
//! reported in one pass.

use std::collections::HashSet;

use super::EntityDef;
use crate::error::IntegrityViolation;

/// Validate a set of entity definitions owned by `namespace`.
///
/// Returns every violation found, in declaration order. An empty vector means
/// the catalog is well formed.
pub fn validate_entities(namespace: &str, entities: &[EntityDef]) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    if is_blank(namespace) {
        violations.push(IntegrityViolation::EmptyAttribute {
            entity: String::new(),
            attribute: "namespace",
        });
    }

    for entity in entities {
        validate_attributes(namespace, entity, &mut violations);

        if !is_blank(&entity.id) && !ids.insert(entity.id.as_str()) {
            violations.push(IntegrityViolation::DuplicateId(entity.id.clone()));
        }
        if !is_blank(&entity.slug) && !slugs.insert(entity.slug.as_str()) {
            violations.push(IntegrityViolation::DuplicateSlug(entity.slug.clone()));
        }

        validate_fields(entity, &mut violations);
    }

    for violation in &violations {
        tracing::warn!(%violation, "catalog integrity violation");
    }

    violations
}

// Blank attributes, slug shape, and id namespace.
fn validate_attributes(namespace: &str, entity: &EntityDef, out: &mut Vec<IntegrityViolation>) {
    for (attribute, value) in [
        ("id", &entity.id),
        ("name", &entity.name),
        ("slug", &entity.slug),
    ] {
        if is_blank(value) {
            out.push(IntegrityViolation::EmptyAttribute {
                entity: entity.id.clone(),
                attribute,
            });
        }
    }

    if !is_blank(&entity.slug) && !is_valid_slug(&entity.slug) {
        out.push(IntegrityViolation::InvalidSlug(entity.slug.clone()));
    }

    if !is_blank(namespace) && !is_blank(&entity.id) && !in_namespace(namespace, &entity.id) {
        out.push(IntegrityViolation::IdOutsideNamespace {
            id: entity.id.clone(),
            namespace: namespace.to_string(),
        });
    }
}

fn validate_fields(entity: &EntityDef, out: &mut Vec<IntegrityViolation>) {
    let mut names = HashSet::new();

    for field in &entity.schema {
        if is_blank(&field.name) {
            out.push(IntegrityViolation::EmptyAttribute {
                entity: entity.id.clone(),
                attribute: "field name",
            });
            continue;
        }
        if !names.insert(field.name.as_str()) {
            out.push(IntegrityViolation::DuplicateField {
                entity: entity.id.clone(),
                field: field.name.clone(),
            });
        }
    }
}

/// Lowercase ASCII alphanumeric words joined by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|word| {
            !word.is_empty()
                && word
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn in_namespace(namespace: &str, id: &str) -> bool {
    id.strip_prefix(namespace)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|rest| !rest.is_empty())
}
