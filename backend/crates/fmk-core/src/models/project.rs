//! Project entity as stored and as returned to the UI.

use crate::Milestones;

use serde::{Deserialize, Serialize};

/// A quilting project.
///
/// `archived` and `deleted` are independent: a project may be both, in
/// which case it only shows up in the deleted view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub date_started: String,
    pub completed_date: Option<String>,
    pub project_name: String,
    #[serde(flatten)]
    pub milestones: Milestones,
    pub important: bool,
    pub archived: bool,
    pub deleted: bool,
    /// Reserved for manual ordering; persisted but never used to sort.
    pub position: i64,
}

impl Project {
    /// Shown in the main list: neither archived nor deleted.
    pub fn is_active(&self) -> bool {
        !self.archived && !self.deleted
    }
}
