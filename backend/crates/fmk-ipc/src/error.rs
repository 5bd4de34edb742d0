use fmk_core::CoreError;
use fmk_db::DbError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

const DUPLICATE_ID_MESSAGE: &str = "A project with that id already exists; nothing was imported.";

#[derive(Error, Debug)]
pub enum IpcError {
    #[error("Invalid message: {message} {location}")]
    InvalidMessage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Serialization error: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl IpcError {
    /// Text for the `error` field of an envelope.
    ///
    /// Never carries a source location or storage internals.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidMessage { message, .. } => message.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::NotFound { message, .. } => message.clone(),
            Self::Conflict { message, .. } => message.clone(),
            Self::Database { .. } => {
                "The project database could not complete the request.".to_string()
            }
            Self::Io { path, source, .. } => {
                format!("Could not access {}: {}", path.display(), source.kind())
            }
            Self::Serialization { source, .. } => {
                format!("The file does not contain valid project data: {source}")
            }
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    #[track_caller]
    pub fn invalid_message<S: Into<String>>(message: S) -> Self {
        Self::InvalidMessage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for IpcError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            message: source.message(),
            field: source.field().map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for IpcError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match source {
            DbError::Validation { source, .. } => Self::Validation {
                message: source.message(),
                field: source.field().map(str::to_string),
                location,
            },
            DbError::NotFound { id, .. } => Self::NotFound {
                message: format!("Project {id} not found."),
                location,
            },
            // Only an import supplies its own ids.
            DbError::Sqlx {
                source: sqlx::Error::Database(db),
                ..
            } if db.is_unique_violation() => Self::Conflict {
                message: DUPLICATE_ID_MESSAGE.to_string(),
                location,
            },
            source => Self::Database { source, location },
        }
    }
}

impl From<serde_json::Error> for IpcError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IpcError>;
