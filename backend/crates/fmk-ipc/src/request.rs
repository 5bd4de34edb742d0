//! Incoming requests.
//!
//! A request line is `{"operation": "<name>", "payload": {...}}`. The
//! operation name picks the variant, and the payload is decoded into that
//! variant's parameter type. Operations without parameters ignore any
//! payload they are sent.

use crate::{IpcError, Result as IpcResult};

use fmk_core::{ListOrder, ProjectDraft, serde_flag, serde_id};

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw request before the payload is typed.
#[derive(Debug, Deserialize)]
struct RawRequest {
    operation: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct IdParams {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: i64,
}

/// Sort parameters of the archived and deleted views. Never rejected:
/// anything off the allow-list falls back to the default order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListParams {
    #[serde(deserialize_with = "sort_param")]
    pub sort_by: Option<String>,
    #[serde(deserialize_with = "sort_param")]
    pub sort_order: Option<String>,
}

impl ListParams {
    pub fn order(&self) -> ListOrder {
        ListOrder::from_params(self.sort_by.as_deref(), self.sort_order.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveParams {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: i64,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub is_archived: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantParams {
    #[serde(deserialize_with = "serde_id::deserialize")]
    pub id: i64,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub is_important: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    pub start_date: String,
    pub end_date: String,
}

/// Target of an export or import. No path means the user closed the file
/// dialog without choosing one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileParams {
    pub file_path: Option<String>,
}

impl FileParams {
    pub fn chosen_path(&self) -> Option<&str> {
        self.file_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    GetActiveRows,
    SaveRow(ProjectDraft),
    GetArchivedRows(ListParams),
    ArchiveRow(ArchiveParams),
    DeleteRow(IdParams),
    GetDeletedRows(ListParams),
    RestoreDeletedRow(IdParams),
    PurgeDeletedRow(IdParams),
    PurgeDeletedRows,
    MarkImportant(ImportantParams),
    GetTotalOpenProjects,
    GetTotalCompletedProjects,
    GetProjectsByDateRange(DateRangeParams),
    ExportData(FileParams),
    ImportData(FileParams),
    OpenReports,
    OpenSettings,
}

impl Request {
    /// Decode one request line.
    #[track_caller]
    pub fn parse(line: &str) -> IpcResult<Self> {
        let raw: RawRequest = serde_json::from_str(line)
            .map_err(|e| IpcError::invalid_message(format!("Malformed request: {e}")))?;

        Self::from_parts(&raw.operation, raw.payload)
    }

    /// Build a request from an operation name and its JSON payload.
    #[track_caller]
    pub fn from_parts(operation: &str, payload: Value) -> IpcResult<Self> {
        let request = match operation {
            "getActiveRows" => Self::GetActiveRows,
            "saveRow" => Self::SaveRow(required(operation, payload)?),
            "getArchivedRows" => Self::GetArchivedRows(list_params(operation, payload)),
            "archiveRow" => Self::ArchiveRow(required(operation, payload)?),
            "deleteRow" => Self::DeleteRow(required(operation, payload)?),
            "getDeletedRows" => Self::GetDeletedRows(list_params(operation, payload)),
            "restoreDeletedRow" => Self::RestoreDeletedRow(required(operation, payload)?),
            "purgeDeletedRow" => Self::PurgeDeletedRow(required(operation, payload)?),
            "purgeDeletedRows" => Self::PurgeDeletedRows,
            "markImportant" => Self::MarkImportant(required(operation, payload)?),
            "getTotalOpenProjects" => Self::GetTotalOpenProjects,
            "getTotalCompletedProjects" => Self::GetTotalCompletedProjects,
            "getProjectsByDateRange" => Self::GetProjectsByDateRange(required(operation, payload)?),
            "exportData" => Self::ExportData(optional(operation, payload)?),
            "importData" => Self::ImportData(optional(operation, payload)?),
            "openReports" => Self::OpenReports,
            "openSettings" => Self::OpenSettings,
            other => {
                return Err(IpcError::invalid_message(format!(
                    "Unknown operation: {other}"
                )));
            }
        };

        Ok(request)
    }

    /// Wire name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetActiveRows => "getActiveRows",
            Self::SaveRow(_) => "saveRow",
            Self::GetArchivedRows(_) => "getArchivedRows",
            Self::ArchiveRow(_) => "archiveRow",
            Self::DeleteRow(_) => "deleteRow",
            Self::GetDeletedRows(_) => "getDeletedRows",
            Self::RestoreDeletedRow(_) => "restoreDeletedRow",
            Self::PurgeDeletedRow(_) => "purgeDeletedRow",
            Self::PurgeDeletedRows => "purgeDeletedRows",
            Self::MarkImportant(_) => "markImportant",
            Self::GetTotalOpenProjects => "getTotalOpenProjects",
            Self::GetTotalCompletedProjects => "getTotalCompletedProjects",
            Self::GetProjectsByDateRange(_) => "getProjectsByDateRange",
            Self::ExportData(_) => "exportData",
            Self::ImportData(_) => "importData",
            Self::OpenReports => "openReports",
            Self::OpenSettings => "openSettings",
        }
    }

    /// List operations answer with a bare array, even on failure.
    pub fn returns_rows(&self) -> bool {
        matches!(
            self,
            Self::GetActiveRows | Self::GetArchivedRows(_) | Self::GetDeletedRows(_)
        )
    }
}

#[track_caller]
fn required<T: DeserializeOwned>(operation: &str, payload: Value) -> IpcResult<T> {
    if payload.is_null() {
        return Err(IpcError::invalid_message(format!(
            "Missing payload for {operation}"
        )));
    }

    serde_json::from_value(payload)
        .map_err(|e| IpcError::invalid_message(format!("Invalid payload for {operation}: {e}")))
}

#[track_caller]
fn optional<T: DeserializeOwned + Default>(operation: &str, payload: Value) -> IpcResult<T> {
    if payload.is_null() {
        return Ok(T::default());
    }

    required(operation, payload)
}

/// A payload that is not a sort object gets the default order.
fn list_params(operation: &str, payload: Value) -> ListParams {
    optional(operation, payload).unwrap_or_else(|e| {
        warn!("{}; using the default order", e.user_message());
        ListParams::default()
    })
}

/// Non-string values keep their JSON text, which is never on the allow-list.
fn sort_param<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(value) => Some(value),
        other => Some(other.to_string()),
    })
}
