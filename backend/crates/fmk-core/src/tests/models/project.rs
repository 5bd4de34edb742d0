use crate::{Milestones, Project};

use googletest::prelude::*;

fn sample_project() -> Project {
    Project {
        id: 7,
        date_started: "2024-02-01".to_string(),
        completed_date: None,
        project_name: "Log Cabin".to_string(),
        milestones: Milestones {
            cut: true,
            ..Milestones::default()
        },
        important: false,
        archived: false,
        deleted: false,
        position: 0,
    }
}

#[test]
fn test_project_is_active_only_when_neither_archived_nor_deleted() {
    let mut project = sample_project();
    assert!(project.is_active());

    project.archived = true;
    assert!(!project.is_active());

    project.archived = false;
    project.deleted = true;
    assert!(!project.is_active());
}

#[test]
fn test_project_serializes_flat_camel_case() {
    let json = serde_json::to_value(sample_project()).unwrap();

    assert_that!(json["id"], eq(&serde_json::json!(7)));
    assert_that!(json["dateStarted"], eq(&serde_json::json!("2024-02-01")));
    assert_that!(json["projectName"], eq(&serde_json::json!("Log Cabin")));
    assert_that!(json["cut"], eq(&serde_json::json!(true)));
    assert_that!(json["backPrepped"], eq(&serde_json::json!(false)));
    assert_that!(json["completedDate"], eq(&serde_json::Value::Null));
    assert_that!(json.get("milestones"), none());
}
