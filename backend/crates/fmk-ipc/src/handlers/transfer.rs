//! Backup export and import.
//!
//! The file is a JSON array of [`ProjectRecord`]s. The host picks the path
//! with its own file dialog and sends it along; a request without a path
//! means the dialog was cancelled.

use crate::{
    FileParams, HandlerContext, IpcError, Response, Result as IpcResult,
    build_canceled_response, build_exported_response, build_imported_response,
    log_handler_entry,
};

use fmk_core::ProjectRecord;

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use log::info;

pub const EXPORT_CANCELED: &str = "Export canceled.";
pub const IMPORT_CANCELED: &str = "Import canceled.";

/// Handle exportData
pub async fn handle_export_data(params: FileParams, ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "ExportData");

    let Some(file_path) = params.chosen_path() else {
        return Ok(build_canceled_response(EXPORT_CANCELED));
    };

    let records = ctx.repository().export_all().await?;

    let json = if ctx.export.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };

    tokio::fs::write(file_path, json)
        .await
        .map_err(|e| io_error(file_path, e))?;

    info!(
        "{} Exported {} projects to {}",
        ctx.log_prefix(),
        records.len(),
        file_path
    );

    Ok(build_exported_response(file_path))
}

/// Handle importData. All rows go in, or none do.
pub async fn handle_import_data(params: FileParams, ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "ImportData");

    let Some(file_path) = params.chosen_path() else {
        return Ok(build_canceled_response(IMPORT_CANCELED));
    };

    let contents = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|e| io_error(file_path, e))?;

    let records: Vec<ProjectRecord> = serde_json::from_str(&contents)?;

    let imported = ctx.repository().import_all(&records).await?;

    info!(
        "{} Imported {} projects from {}",
        ctx.log_prefix(),
        imported,
        file_path
    );

    Ok(build_imported_response(imported))
}

#[track_caller]
fn io_error(path: &str, source: std::io::Error) -> IpcError {
    IpcError::Io {
        path: Path::new(path).to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}
