pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite_pool::{create_memory_pool, create_pool};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
