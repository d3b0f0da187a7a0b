//! Minions Tasks Core - task-management entity schemas.
//!
//! This crate declares the task, task list, dependency, recurring task,
//! assignment, checkpoint, history, comment, and outcome entity types for a
//! minion type registry, plus the client configuration factory.
//!
//! # Quick Start
//!
//! ```
//! use minions_tasks_core::{build_catalog, FieldType};
//!
//! let catalog = build_catalog();
//! let task = catalog.by_slug("task").unwrap();
//! assert_eq!(task.get_field("status").unwrap().field_type, FieldType::Select);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod tasks;

pub use catalog::{EntityDef, FieldDef, FieldType, SchemaCatalog};
pub use config::{
    create_client, create_client_with_policy, ClientConfig, ClientOptions, VersionPolicy, VERSION,
};
pub use error::{Error, IntegrityViolation};
pub use tasks::{build_catalog, custom_types, try_build_catalog};
