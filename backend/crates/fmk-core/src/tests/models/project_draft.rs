use crate::{CoreError, ProjectDraft};

use googletest::prelude::*;

#[test]
fn given_name_and_start_date_when_validating_then_ok() {
    let draft = ProjectDraft::new("2024-01-01", "Quilt A");

    assert_that!(draft.validate(), ok(anything()));
}

#[test]
fn given_blank_start_date_when_validating_then_fails_on_date_started() {
    let draft = ProjectDraft::new("   ", "Quilt A");

    let err = draft.validate().unwrap_err();

    assert_that!(err.field(), some(eq("dateStarted")));
    assert_that!(err.message(), eq("Start date is required."));
    assert!(matches!(err, CoreError::Validation { .. }));
}

#[test]
fn given_empty_name_when_validating_then_fails_on_project_name() {
    let draft = ProjectDraft::new("2024-01-01", "");

    let err = draft.validate().unwrap_err();

    assert_that!(err.field(), some(eq("projectName")));
}

#[test]
fn given_blank_completed_date_when_normalized_then_none() {
    let draft = ProjectDraft::new(" 2024-01-01 ", " Quilt A ").with_completed_date("  ");

    let draft = draft.normalized();

    assert_that!(draft.date_started, eq("2024-01-01"));
    assert_that!(draft.project_name, eq("Quilt A"));
    assert_that!(draft.completed_date, none());
}

#[test]
fn given_integer_flags_when_deserializing_then_maps_to_bools() {
    let json = r#"{
        "dateStarted": "2024-01-01",
        "projectName": "Quilt A",
        "fabricChosen": 1,
        "cut": 0,
        "quilted": true,
        "bound": null,
        "important": 1
    }"#;

    let draft: ProjectDraft = serde_json::from_str(json).unwrap();

    assert_that!(draft.id, none());
    assert_that!(draft.milestones.fabric_chosen, eq(true));
    assert_that!(draft.milestones.cut, eq(false));
    assert_that!(draft.milestones.quilted, eq(true));
    assert_that!(draft.milestones.bound, eq(false));
    assert_that!(draft.milestones.photographed, eq(false));
    assert_that!(draft.important, eq(true));
}

#[test]
fn given_id_when_deserializing_then_draft_targets_existing_row() {
    let json = r#"{"id": 3, "dateStarted": "2024-01-01", "projectName": "Quilt A"}"#;

    let draft: ProjectDraft = serde_json::from_str(json).unwrap();

    assert_that!(draft.id, some(eq(3)));
}

#[test]
fn given_numeric_string_id_when_deserialized_then_id_is_parsed() {
    let json = r#"{"id":"5","dateStarted":"2024-01-01","projectName":"Quilt A"}"#;

    let draft: ProjectDraft = serde_json::from_str(json).unwrap();

    assert_that!(draft.id, some(eq(5)));
}

#[test]
fn given_blank_or_null_id_when_deserialized_then_draft_is_new() {
    let blank: ProjectDraft =
        serde_json::from_str(r#"{"id":"","dateStarted":"2024-01-01","projectName":"A"}"#)
            .unwrap();
    let null: ProjectDraft =
        serde_json::from_str(r#"{"id":null,"dateStarted":"2024-01-01","projectName":"A"}"#)
            .unwrap();

    assert_that!(blank.id, none());
    assert_that!(null.id, none());
}

#[test]
fn given_non_numeric_id_when_deserialized_then_fails() {
    let result = serde_json::from_str::<ProjectDraft>(
        r#"{"id":"abc","dateStarted":"2024-01-01","projectName":"A"}"#,
    );

    assert!(result.is_err());
}
