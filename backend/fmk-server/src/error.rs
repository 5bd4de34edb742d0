use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] fmk_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] fmk_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{operation} failed: {message}")]
    Command {
        operation: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
