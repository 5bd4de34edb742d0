//! Entry point for the host: one request in, one response out.

use crate::{HandlerContext, Request, Response, build_error_response, dispatch};

use fmk_config::ExportConfig;

use log::{error, warn};
use sqlx::SqlitePool;

/// Sent if a response cannot be encoded.
const ENCODE_FAILURE_LINE: &str =
    r#"{"success":false,"error":"The response could not be encoded."}"#;

#[derive(Clone)]
pub struct Router {
    pool: SqlitePool,
    export: ExportConfig,
}

impl Router {
    pub fn new(pool: SqlitePool, export: ExportConfig) -> Self {
        Self { pool, export }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Handle a typed request.
    pub async fn handle(&self, request: Request) -> Response {
        let ctx = HandlerContext::new(self.pool.clone(), self.export.clone(), request.name());
        dispatch(request, ctx).await
    }

    /// Handle one JSON request line and return one JSON response line
    /// (without the trailing newline).
    pub async fn handle_raw(&self, line: &str) -> String {
        let response = match Request::parse(line) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!("Rejected request: {e}");
                build_error_response(e.user_message())
            }
        };

        encode_response(&response)
    }
}

/// Serialize a response to a single line of JSON.
pub fn encode_response(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        error!("Failed to encode response: {e}");
        ENCODE_FAILURE_LINE.to_string()
    })
}
