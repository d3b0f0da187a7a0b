//! Schema catalog model.
//!
//! Entity type definitions, their fields, and integrity validation.

mod entity;
mod field;
mod schema;
mod types;
pub mod validate;

pub use entity::EntityDef;
pub use field::FieldDef;
pub use schema::SchemaCatalog;
pub use types::FieldType;
