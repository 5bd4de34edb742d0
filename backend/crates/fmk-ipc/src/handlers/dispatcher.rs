use crate::handlers::projects::{
    handle_archive_row, handle_delete_row, handle_get_active_rows, handle_get_archived_rows,
    handle_get_deleted_rows, handle_mark_important, handle_purge_deleted_row,
    handle_purge_deleted_rows, handle_restore_deleted_row, handle_save_row,
};
use crate::handlers::reports::{
    handle_get_projects_by_date_range, handle_get_total_completed_projects,
    handle_get_total_open_projects, handle_open_view,
};
use crate::handlers::transfer::{handle_export_data, handle_import_data};
use crate::{
    HandlerContext, Request, Response, Result as IpcResult, View, build_error_response,
    build_rows_response, log_handler_exit,
};

use log::warn;

/// Dispatch a request to its handler.
///
/// Never fails: list operations degrade to an empty list and everything
/// else to an error envelope.
pub async fn dispatch(request: Request, ctx: HandlerContext) -> Response {
    let handler_name = request.name();
    let returns_rows = request.returns_rows();

    let result = dispatch_inner(request, &ctx).await;

    log_handler_exit!(ctx.request_ctx, handler_name, result);

    match result {
        Ok(response) => response,
        Err(e) if returns_rows => {
            warn!(
                "{} {} failed, answering with an empty list: {}",
                ctx.log_prefix(),
                handler_name,
                e
            );
            build_rows_response(Vec::new())
        }
        Err(e) => build_error_response(e.user_message()),
    }
}

async fn dispatch_inner(request: Request, ctx: &HandlerContext) -> IpcResult<Response> {
    match request {
        // Lists
        Request::GetActiveRows => handle_get_active_rows(ctx).await,
        Request::GetArchivedRows(params) => handle_get_archived_rows(params, ctx).await,
        Request::GetDeletedRows(params) => handle_get_deleted_rows(params, ctx).await,

        // Lifecycle
        Request::SaveRow(draft) => handle_save_row(draft, ctx).await,
        Request::ArchiveRow(params) => handle_archive_row(params, ctx).await,
        Request::DeleteRow(params) => handle_delete_row(params, ctx).await,
        Request::RestoreDeletedRow(params) => handle_restore_deleted_row(params, ctx).await,
        Request::PurgeDeletedRow(params) => handle_purge_deleted_row(params, ctx).await,
        Request::PurgeDeletedRows => handle_purge_deleted_rows(ctx).await,
        Request::MarkImportant(params) => handle_mark_important(params, ctx).await,

        // Reports
        Request::GetTotalOpenProjects => handle_get_total_open_projects(ctx).await,
        Request::GetTotalCompletedProjects => handle_get_total_completed_projects(ctx).await,
        Request::GetProjectsByDateRange(params) => {
            handle_get_projects_by_date_range(params, ctx).await
        }

        // Backup
        Request::ExportData(params) => handle_export_data(params, ctx).await,
        Request::ImportData(params) => handle_import_data(params, ctx).await,

        // Windows
        Request::OpenReports => handle_open_view(View::Reports, ctx),
        Request::OpenSettings => handle_open_view(View::Settings, ctx),
    }
}
