//! Handlers for the project lists and lifecycle commands.

use crate::{
    ArchiveParams, HandlerContext, IdParams, ImportantParams, ListParams, MessageValidator,
    Response, Result as IpcResult, build_ok_response, build_purged_response, build_restored_response,
    build_rows_response, build_saved_response, log_handler_entry,
};

use fmk_core::ProjectDraft;

use log::debug;

/// Handle getActiveRows
pub async fn handle_get_active_rows(ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "GetActiveRows");

    let rows = ctx.repository().find_active().await?;

    Ok(build_rows_response(rows))
}

/// Handle getArchivedRows
pub async fn handle_get_archived_rows(
    params: ListParams,
    ctx: &HandlerContext,
) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "GetArchivedRows");

    let order = params.order();
    debug!(
        "{} Listing archived by {} {}",
        ctx.log_prefix(),
        order.column,
        order.direction.as_sql()
    );

    let rows = ctx.repository().find_archived(order).await?;

    Ok(build_rows_response(rows))
}

/// Handle getDeletedRows
pub async fn handle_get_deleted_rows(
    params: ListParams,
    ctx: &HandlerContext,
) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "GetDeletedRows");

    let rows = ctx.repository().find_deleted(params.order()).await?;

    Ok(build_rows_response(rows))
}

/// Handle saveRow: insert without an id, overwrite with one
pub async fn handle_save_row(draft: ProjectDraft, ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "SaveRow");

    MessageValidator::validate_draft(&draft)?;

    let id = ctx.repository().save(&draft).await?;

    Ok(build_saved_response(id))
}

/// Handle archiveRow (archive or unarchive)
pub async fn handle_archive_row(
    params: ArchiveParams,
    ctx: &HandlerContext,
) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "ArchiveRow");

    MessageValidator::validate_id(params.id)?;

    ctx.repository()
        .set_archived(params.id, params.is_archived)
        .await?;

    Ok(build_ok_response())
}

/// Handle deleteRow (soft delete)
pub async fn handle_delete_row(params: IdParams, ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "DeleteRow");

    MessageValidator::validate_id(params.id)?;

    ctx.repository().soft_delete(params.id).await?;

    Ok(build_ok_response())
}

/// Handle restoreDeletedRow. The response says which view the row is back in.
pub async fn handle_restore_deleted_row(
    params: IdParams,
    ctx: &HandlerContext,
) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "RestoreDeletedRow");

    MessageValidator::validate_id(params.id)?;

    let archived = ctx.repository().restore(params.id).await?;

    Ok(build_restored_response(archived))
}

/// Handle purgeDeletedRow. Purging a row that is already gone succeeds.
pub async fn handle_purge_deleted_row(
    params: IdParams,
    ctx: &HandlerContext,
) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "PurgeDeletedRow");

    MessageValidator::validate_id(params.id)?;

    let removed = ctx.repository().purge(params.id).await?;
    if removed == 0 {
        debug!("{} Project {} was already purged", ctx.log_prefix(), params.id);
    }

    Ok(build_ok_response())
}

/// Handle purgeDeletedRows (empty the trash)
pub async fn handle_purge_deleted_rows(ctx: &HandlerContext) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "PurgeDeletedRows");

    let purged = ctx.repository().purge_all_deleted().await?;

    Ok(build_purged_response(purged))
}

/// Handle markImportant
pub async fn handle_mark_important(
    params: ImportantParams,
    ctx: &HandlerContext,
) -> IpcResult<Response> {
    log_handler_entry!(ctx.request_ctx, "MarkImportant");

    MessageValidator::validate_id(params.id)?;

    ctx.repository()
        .set_important(params.id, params.is_important)
        .await?;

    Ok(build_ok_response())
}
