use serde::{Deserialize, Serialize};

/// Report figures for a `[start, end]` date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeCounts {
    /// Active projects started inside the range.
    pub open_projects: i64,
    /// Archived, non-deleted projects completed inside the range.
    pub completed_projects: i64,
}
