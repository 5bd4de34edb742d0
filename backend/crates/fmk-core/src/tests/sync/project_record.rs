use crate::{Milestones, Project, ProjectRecord};

use googletest::prelude::*;

fn archived_and_deleted_project() -> Project {
    Project {
        id: 12,
        date_started: "2023-05-01".to_string(),
        completed_date: Some("2023-09-30".to_string()),
        project_name: "Storm at Sea".to_string(),
        milestones: Milestones {
            fabric_chosen: true,
            quilted: true,
            ..Milestones::default()
        },
        important: true,
        archived: true,
        deleted: true,
        position: 4,
    }
}

#[test]
fn given_project_when_exported_then_flags_are_written_as_integers() {
    let record = ProjectRecord::from(archived_and_deleted_project());

    let json = serde_json::to_value(&record).unwrap();

    assert_that!(json["id"], eq(&serde_json::json!(12)));
    assert_that!(json["date_started"], eq(&serde_json::json!("2023-05-01")));
    assert_that!(json["fabric_chosen"], eq(&serde_json::json!(1)));
    assert_that!(json["cut"], eq(&serde_json::json!(0)));
    assert_that!(json["archived"], eq(&serde_json::json!(1)));
    assert_that!(json["deleted"], eq(&serde_json::json!(1)));
    assert_that!(json["position"], eq(&serde_json::json!(4)));
}

#[test]
fn given_record_when_converted_back_then_project_is_unchanged() {
    let project = archived_and_deleted_project();

    let back = Project::from(ProjectRecord::from(project.clone()));

    assert_that!(back, eq(&project));
}

#[test]
fn given_minimal_record_when_deserializing_then_flags_default_false() {
    let json = r#"{"id": 1, "date_started": "2024-01-01", "project_name": "A"}"#;

    let record: ProjectRecord = serde_json::from_str(json).unwrap();

    assert_that!(record.archived, eq(false));
    assert_that!(record.deleted, eq(false));
    assert_that!(record.position, eq(0));
    assert_that!(record.validate(), ok(anything()));
}

#[test]
fn given_record_without_name_when_validating_then_err() {
    let json = r#"{"id": 1, "date_started": "2024-01-01", "project_name": ""}"#;

    let record: ProjectRecord = serde_json::from_str(json).unwrap();

    assert_that!(record.validate(), err(anything()));
}

#[test]
fn given_record_with_zero_id_when_validating_then_err() {
    let json = r#"{"id": 0, "date_started": "2024-01-01", "project_name": "A"}"#;

    let record: ProjectRecord = serde_json::from_str(json).unwrap();

    assert_that!(record.validate(), err(anything()));
}
