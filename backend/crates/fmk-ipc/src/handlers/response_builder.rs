use crate::{Envelope, Response, View};

use fmk_core::{DateRangeCounts, Project};

/// Build a bare list response
pub fn build_rows_response(rows: Vec<Project>) -> Response {
    Response::Rows(rows)
}

/// Build `{success: true}`
pub fn build_ok_response() -> Response {
    Response::Envelope(Envelope {
        success: true,
        ..Envelope::default()
    })
}

/// Build `{success: true, id}` for a save
pub fn build_saved_response(id: i64) -> Response {
    Response::Envelope(Envelope {
        success: true,
        id: Some(id),
        ..Envelope::default()
    })
}

/// Build `{success: true, archived}` for a restore
pub fn build_restored_response(archived: bool) -> Response {
    Response::Envelope(Envelope {
        success: true,
        archived: Some(archived),
        ..Envelope::default()
    })
}

pub fn build_purged_response(purged: u64) -> Response {
    Response::Envelope(Envelope {
        success: true,
        purged: Some(purged),
        ..Envelope::default()
    })
}

pub fn build_count_response(total: i64) -> Response {
    Response::Envelope(Envelope {
        success: true,
        total: Some(total),
        ..Envelope::default()
    })
}

pub fn build_date_range_response(counts: DateRangeCounts) -> Response {
    Response::Envelope(Envelope {
        success: true,
        open_projects: Some(counts.open_projects),
        completed_projects: Some(counts.completed_projects),
        ..Envelope::default()
    })
}

pub fn build_exported_response(file_path: &str) -> Response {
    Response::Envelope(Envelope {
        success: true,
        file_path: Some(file_path.to_string()),
        message: Some("Data exported successfully!".to_string()),
        ..Envelope::default()
    })
}

pub fn build_imported_response(imported: usize) -> Response {
    Response::Envelope(Envelope {
        success: true,
        imported: Some(imported),
        message: Some("Data imported successfully!".to_string()),
        ..Envelope::default()
    })
}

/// The user closed the file dialog. Not an error, but nothing happened.
pub fn build_canceled_response(message: &str) -> Response {
    Response::Envelope(Envelope {
        success: false,
        canceled: Some(true),
        message: Some(message.to_string()),
        ..Envelope::default()
    })
}

pub fn build_view_response(view: View) -> Response {
    Response::Envelope(Envelope {
        success: true,
        view: Some(view),
        ..Envelope::default()
    })
}

/// Build `{success: false, error}`
pub fn build_error_response(error: String) -> Response {
    Response::Envelope(Envelope {
        success: false,
        error: Some(error),
        ..Envelope::default()
    })
}
