use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid sort column: {value} {location}")]
    InvalidSortColumn {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort direction: {value} {location}")]
    InvalidSortDirection {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Message without the source location, suitable for showing to a user.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidSortColumn { value, .. } => format!("Invalid sort column: {value}"),
            Self::InvalidSortDirection { value, .. } => format!("Invalid sort direction: {value}"),
        }
    }

    /// Field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
