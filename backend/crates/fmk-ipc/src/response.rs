//! Outgoing responses.
//!
//! List operations answer with a bare JSON array of projects. Every other
//! operation answers with an [`Envelope`]: `success` plus whichever fields
//! that operation fills in.

use fmk_core::Project;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Rows(Vec<Project>),
    Envelope(Envelope),
}

impl Response {
    pub fn is_success(&self) -> bool {
        match self {
            Self::Rows(_) => true,
            Self::Envelope(envelope) => envelope.success,
        }
    }

    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Self::Envelope(envelope) => Some(envelope),
            Self::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> Option<&[Project]> {
        match self {
            Self::Rows(rows) => Some(rows),
            Self::Envelope(_) => None,
        }
    }
}

/// Window the host should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Reports,
    Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purged: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_projects: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_projects: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
