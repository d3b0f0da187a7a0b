//! Integration tests for the built-in task catalog.

use std::collections::HashSet;

use minions_tasks_core::config::VERSION_KEY;
use minions_tasks_core::{
    build_catalog, create_client, ClientOptions, Error, FieldType, IntegrityViolation,
    SchemaCatalog, VERSION,
};
use serde_json::json;

#[test]
fn test_ids_and_slugs_are_unique() {
    let catalog = build_catalog();

    let ids: HashSet<_> = catalog.iter().map(|e| e.id.as_str()).collect();
    let slugs: HashSet<_> = catalog.slugs().collect();

    assert_eq!(ids.len(), catalog.len());
    assert_eq!(slugs.len(), catalog.len());
}

#[test]
fn test_field_names_are_unique_per_entity() {
    for entity in &build_catalog() {
        let names: HashSet<_> = entity.field_names().collect();
        assert_eq!(names.len(), entity.field_count(), "in {}", entity.id);
    }
}

#[test]
fn test_build_is_deterministic() {
    let first = build_catalog();
    let second = build_catalog();

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.field_names().collect::<Vec<_>>(), b.field_names().collect::<Vec<_>>());
    }
}

#[test]
fn test_field_types_stay_in_vocabulary() {
    let supported: HashSet<_> = ["string", "select", "boolean"].into_iter().collect();

    for entity in &build_catalog() {
        for field in &entity.schema {
            assert!(supported.contains(field.field_type.as_str()), "{}.{}", entity.id, field.name);
        }
    }
}

#[test]
fn test_task_status_is_select() {
    let catalog = build_catalog();
    let task = catalog.by_slug("task").expect("task type");

    let status = task.get_field("status").expect("status field");
    assert_eq!(status.field_type, FieldType::Select);
    assert_eq!(status.label, "status");
}

#[test]
fn test_relationship_fields_reference_task_ids() {
    let catalog = build_catalog();

    let dependency = catalog.by_id("tasks-task-dependency").unwrap();
    assert!(dependency.get_field("taskId").is_some());
    assert!(dependency.get_field("dependsOnTaskId").is_some());

    assert!(catalog.by_slug("task-list").unwrap().get_field("taskIds").is_some());

    let recurring = catalog.by_slug("recurring-task").unwrap();
    assert!(recurring.get_field("templateTaskId").is_some());
    assert!(recurring.get_field("spawnedTaskIds").is_some());

    for slug in [
        "task-assignment",
        "task-checkpoint",
        "task-history-entry",
        "task-comment",
        "task-outcome",
    ] {
        let entity = catalog.by_slug(slug).unwrap();
        assert_eq!(entity.schema[0].name, "taskId", "{slug} references its task first");
    }
}

#[test]
fn test_export_matches_host_shape() {
    let catalog = build_catalog();
    let exported: serde_json::Value = serde_json::from_str(&catalog.to_json().unwrap()).unwrap();

    assert_eq!(exported["namespace"], "tasks");
    let dependency = &exported["entities"][2];
    assert_eq!(
        *dependency,
        json!({
            "id": "tasks-task-dependency",
            "name": "Task dependency",
            "slug": "task-dependency",
            "description": "A blocking or relational dependency between two tasks.",
            "icon": "🔗",
            "schema": [
                { "name": "taskId", "type": "string", "label": "taskId" },
                { "name": "dependsOnTaskId", "type": "string", "label": "dependsOnTaskId" },
                { "name": "type", "type": "select", "label": "type" }
            ]
        })
    );

    assert_eq!(SchemaCatalog::from_json(&catalog.to_json().unwrap()).unwrap(), catalog);
}

#[test]
fn test_malformed_import_reports_all_violations() {
    let json = r#"{
        "namespace": "tasks",
        "entities": [
            { "id": "tasks-task", "name": "Task", "slug": "task", "description": "", "icon": "",
              "schema": [
                { "name": "title", "type": "string", "label": "title" },
                { "name": "title", "type": "string", "label": "Title" }
              ] },
            { "id": "tasks-task", "name": "Copy", "slug": "Task Copy", "description": "", "icon": "",
              "schema": [] }
        ]
    }"#;

    match SchemaCatalog::from_json(json) {
        Err(Error::Integrity(violations)) => assert_eq!(
            violations,
            vec![
                IntegrityViolation::DuplicateField {
                    entity: "tasks-task".into(),
                    field: "title".into(),
                },
                IntegrityViolation::InvalidSlug("Task Copy".into()),
                IntegrityViolation::DuplicateId("tasks-task".into()),
            ]
        ),
        other => panic!("expected integrity error, got {other:?}"),
    }
}

#[test]
fn test_create_client_without_options() {
    let config = create_client(ClientOptions::new());

    assert_eq!(config.len(), 1);
    assert_eq!(config.get(VERSION_KEY), Some(&json!(VERSION)));
}

#[test]
fn test_create_client_with_owner_and_limit() {
    let config = create_client(ClientOptions::new().with("owner", "x").with("limit", 5));

    assert_eq!(
        config.to_value(),
        json!({ "version": VERSION, "owner": "x", "limit": 5 })
    );
}

#[test]
fn test_catalog_is_shareable_across_threads() {
    let catalog = build_catalog();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| catalog.by_slug("task-outcome").map(|e| e.field_count())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(5));
        }
    });
}
