use crate::RequestContext;

use fmk_config::ExportConfig;
use fmk_db::ProjectRepository;

use sqlx::SqlitePool;

/// Context passed to all handlers containing request metadata and resources.
#[derive(Clone)]
pub struct HandlerContext {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Backup file settings
    pub export: ExportConfig,
    /// Request context for tracing
    pub request_ctx: RequestContext,
}

impl HandlerContext {
    pub fn new(pool: SqlitePool, export: ExportConfig, operation: &'static str) -> Self {
        Self {
            pool,
            export,
            request_ctx: RequestContext::new(operation),
        }
    }

    pub fn repository(&self) -> ProjectRepository {
        ProjectRepository::new(self.pool.clone())
    }

    /// Get log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        self.request_ctx.log_prefix()
    }
}

impl std::fmt::Debug for HandlerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerContext")
            .field("operation", &self.request_ctx.operation)
            .field("correlation_id", &self.request_ctx.correlation_id)
            .finish()
    }
}
