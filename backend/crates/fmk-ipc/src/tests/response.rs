use crate::{
    View, build_canceled_response, build_date_range_response, build_error_response,
    build_ok_response, build_restored_response, build_rows_response, build_saved_response,
    build_view_response, encode_response,
};

use fmk_core::DateRangeCounts;

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::{Value, json};

fn to_value(response: &crate::Response) -> Value {
    serde_json::from_str(&encode_response(response)).unwrap()
}

#[test]
fn test_ok_envelope_has_only_success() {
    assert_that!(to_value(&build_ok_response()), eq(&json!({"success": true})));
}

#[test]
fn test_saved_envelope_carries_id() {
    assert_that!(
        to_value(&build_saved_response(7)),
        eq(&json!({"success": true, "id": 7}))
    );
}

#[test]
fn test_restored_envelope_carries_archived() {
    assert_that!(
        to_value(&build_restored_response(true)),
        eq(&json!({"success": true, "archived": true}))
    );
}

#[test]
fn test_date_range_envelope_uses_camel_case() {
    let counts = DateRangeCounts {
        open_projects: 3,
        completed_projects: 5,
    };

    assert_that!(
        to_value(&build_date_range_response(counts)),
        eq(&json!({"success": true, "openProjects": 3, "completedProjects": 5}))
    );
}

#[test]
fn test_canceled_envelope_is_not_success() {
    assert_that!(
        to_value(&build_canceled_response("Export canceled.")),
        eq(&json!({"success": false, "canceled": true, "message": "Export canceled."}))
    );
}

#[test]
fn test_view_envelope_uses_lowercase_name() {
    assert_that!(
        to_value(&build_view_response(View::Reports)),
        eq(&json!({"success": true, "view": "reports"}))
    );
}

#[test]
fn test_error_envelope() {
    let response = build_error_response("Project name is required.".to_string());

    assert_that!(response.is_success(), eq(false));
    assert_that!(
        to_value(&response),
        eq(&json!({"success": false, "error": "Project name is required."}))
    );
}

#[test]
fn test_rows_response_is_bare_array() {
    assert_that!(to_value(&build_rows_response(Vec::new())), eq(&json!([])));
}
