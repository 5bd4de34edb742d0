//! Payload of a save: every user-editable field plus an optional id.

use crate::{Milestones, Result as CoreResult, require_non_empty, serde_flag, serde_id};

use serde::{Deserialize, Serialize};

/// Insert when `id` is absent, full overwrite of the editable fields when
/// present. Lifecycle flags and `position` are not part of a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[serde(default, deserialize_with = "serde_id::deserialize_option")]
    pub id: Option<i64>,
    #[serde(default)]
    pub date_started: String,
    #[serde(default)]
    pub completed_date: Option<String>,
    #[serde(default)]
    pub project_name: String,
    #[serde(flatten)]
    pub milestones: Milestones,
    #[serde(default, deserialize_with = "serde_flag::deserialize")]
    pub important: bool,
}

impl ProjectDraft {
    pub fn new(date_started: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            date_started: date_started.into(),
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_completed_date(mut self, completed_date: impl Into<String>) -> Self {
        self.completed_date = Some(completed_date.into());
        self
    }

    /// Both the start date and the name are required.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_empty(&self.date_started, "dateStarted", "Start date is required.")?;
        require_non_empty(&self.project_name, "projectName", "Project name is required.")?;
        Ok(())
    }

    /// Trim text fields; a blank completion date becomes `None`.
    pub fn normalized(mut self) -> Self {
        self.date_started = self.date_started.trim().to_string();
        self.project_name = self.project_name.trim().to_string();
        self.completed_date = self
            .completed_date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self
    }
}
