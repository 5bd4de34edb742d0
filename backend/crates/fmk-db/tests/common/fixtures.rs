use fmk_core::{Milestones, ProjectDraft, ProjectRecord};

/// Creates a new-project draft with sensible defaults
pub fn create_test_draft(name: &str) -> ProjectDraft {
    ProjectDraft::new("2024-01-01", name)
}

/// Creates a draft with a start and completion date
pub fn create_dated_draft(name: &str, started: &str, completed: &str) -> ProjectDraft {
    ProjectDraft::new(started, name).with_completed_date(completed)
}

/// Creates an export record with explicit lifecycle flags
pub fn create_test_record(id: i64, name: &str, archived: bool, deleted: bool) -> ProjectRecord {
    ProjectRecord {
        id,
        date_started: "2023-06-01".to_string(),
        completed_date: Some("2023-12-01".to_string()),
        project_name: name.to_string(),
        fabric_chosen: true,
        cut: true,
        pieced: false,
        assembled: false,
        back_prepped: false,
        basted: false,
        quilted: false,
        bound: false,
        photographed: false,
        archived,
        deleted,
        position: 0,
        important: false,
    }
}

/// Milestones with everything done
pub fn all_milestones() -> Milestones {
    Milestones {
        fabric_chosen: true,
        cut: true,
        pieced: true,
        assembled: true,
        back_prepped: true,
        basted: true,
        quilted: true,
        bound: true,
        photographed: true,
    }
}
