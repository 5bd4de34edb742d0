use crate::{DateRangeParams, IpcError, MessageValidator};

use fmk_core::ProjectDraft;

use googletest::assert_that;
use googletest::prelude::{eq, some};

fn range(start: &str, end: &str) -> DateRangeParams {
    DateRangeParams {
        start_date: start.to_string(),
        end_date: end.to_string(),
    }
}

#[test]
fn test_validate_id_rejects_zero_and_negative() {
    assert!(MessageValidator::validate_id(1).is_ok());
    assert!(MessageValidator::validate_id(0).is_err());
    assert!(MessageValidator::validate_id(-7).is_err());
}

#[test]
fn test_validate_draft_valid() {
    let draft = ProjectDraft::new("2024-01-01", "Quilt A").with_completed_date("2024-02-01");
    assert!(MessageValidator::validate_draft(&draft).is_ok());
}

#[test]
fn test_validate_draft_blank_completed_date_is_allowed() {
    let draft = ProjectDraft::new("2024-01-01", "Quilt A").with_completed_date("  ");
    assert!(MessageValidator::validate_draft(&draft).is_ok());
}

#[test]
fn test_validate_draft_missing_name() {
    let draft = ProjectDraft::new("2024-01-01", "");
    let result = MessageValidator::validate_draft(&draft);

    let err = result.unwrap_err();
    assert_that!(err.user_message(), eq("Project name is required."));
    assert_that!(err.field(), some(eq("projectName")));
}

#[test]
fn test_validate_draft_missing_start_date() {
    let draft = ProjectDraft::new(" ", "Quilt A");
    let err = MessageValidator::validate_draft(&draft).unwrap_err();

    assert_that!(err.user_message(), eq("Start date is required."));
}

#[test]
fn test_validate_draft_bad_start_date() {
    let draft = ProjectDraft::new("01/02/2024", "Quilt A");
    let err = MessageValidator::validate_draft(&draft).unwrap_err();

    assert!(matches!(err, IpcError::Validation { .. }));
    assert_that!(err.field(), some(eq("dateStarted")));
}

#[test]
fn test_validate_draft_bad_completed_date() {
    let draft = ProjectDraft::new("2024-01-01", "Quilt A").with_completed_date("2024-13-01");
    let err = MessageValidator::validate_draft(&draft).unwrap_err();

    assert_that!(err.field(), some(eq("completedDate")));
}

#[test]
fn test_validate_draft_non_positive_id() {
    let draft = ProjectDraft::new("2024-01-01", "Quilt A").with_id(0);
    let err = MessageValidator::validate_draft(&draft).unwrap_err();

    assert_that!(err.field(), some(eq("id")));
}

#[test]
fn test_validate_date_range() {
    assert!(MessageValidator::validate_date_range(&range("2024-01-01", "2024-12-31")).is_ok());
    assert!(MessageValidator::validate_date_range(&range("2024-05-05", "2024-05-05")).is_ok());
    assert!(MessageValidator::validate_date_range(&range("2024-12-31", "2024-01-01")).is_err());
    assert!(MessageValidator::validate_date_range(&range("", "2024-01-01")).is_err());
    assert!(MessageValidator::validate_date_range(&range("2024-01-01", "soon")).is_err());
}

#[test]
fn test_validate_date_range_reversed_names_start_date() {
    let err = MessageValidator::validate_date_range(&range("2024-12-31", "2024-01-01"))
        .unwrap_err();

    assert_that!(err.field(), some(eq("startDate")));
}
