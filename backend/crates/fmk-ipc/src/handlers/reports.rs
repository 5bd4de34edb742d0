//! Handlers behind the reports window, plus the window-opening signals.

use crate::{
    DateRangeParams, HandlerContext, MessageValidator, Response, Result as IpcResult, View,
    build_count_response, build_date_range_response, build_view_response, log_handler_entry,
};

/// Handle getTotalOpenProjects
pub async fn handle_get_total_open_projects(ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "GetTotalOpenProjects");

    let total = ctx.repository().count_active().await?;

    Ok(build_count_response(total))
}

/// Handle getTotalCompletedProjects
pub async fn handle_get_total_completed_projects(ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "GetTotalCompletedProjects");

    let total = ctx.repository().count_completed().await?;

    Ok(build_count_response(total))
}

/// Handle getProjectsByDateRange (inclusive bounds)
pub async fn handle_get_projects_by_date_range(
    params: DateRangeParams,
    ctx: &HandlerContext,
) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "GetProjectsByDateRange");

    MessageValidator::validate_date_range(&params)?;

    let counts = ctx
        .repository()
        .count_by_date_range(params.start_date.trim(), params.end_date.trim())
        .await?;

    Ok(build_date_range_response(counts))
}

/// Handle openReports and openSettings. The host opens the window.
pub fn handle_open_view(view: View, ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "OpenView");

    Ok(build_view_response(view))
}
