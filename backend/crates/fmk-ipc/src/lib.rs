pub mod error;
pub mod handlers;
pub mod message_validator;
pub mod request;
pub mod request_context;
pub mod request_logging;
pub mod response;
pub mod router;

pub use error::{IpcError, Result};
pub use handlers::context::HandlerContext;
pub use handlers::dispatcher::dispatch;
pub use handlers::response_builder::{
    build_canceled_response, build_count_response, build_date_range_response,
    build_error_response, build_exported_response, build_imported_response, build_ok_response,
    build_purged_response, build_restored_response, build_rows_response, build_saved_response,
    build_view_response,
};
pub use message_validator::MessageValidator;
pub use request::{
    ArchiveParams, DateRangeParams, FileParams, IdParams, ImportantParams, ListParams, Request,
};
pub use request_context::RequestContext;
pub use response::{Envelope, Response, View};
pub use router::{Router, encode_response};

#[cfg(test)]
mod tests;
