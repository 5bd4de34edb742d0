use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Columns the archived and deleted views may be sorted by.
///
/// This list is the only thing that ever reaches query text from a request,
/// so a variant must map to a fixed column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    DateStarted,
    #[default]
    CompletedDate,
    ProjectName,
    FabricChosen,
    Cut,
    Pieced,
    Assembled,
    BackPrepped,
    Basted,
    Quilted,
    Bound,
    Photographed,
}

impl SortColumn {
    pub const ALL: [SortColumn; 12] = [
        Self::DateStarted,
        Self::CompletedDate,
        Self::ProjectName,
        Self::FabricChosen,
        Self::Cut,
        Self::Pieced,
        Self::Assembled,
        Self::BackPrepped,
        Self::Basted,
        Self::Quilted,
        Self::Bound,
        Self::Photographed,
    ];

    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateStarted => "dateStarted",
            Self::CompletedDate => "completedDate",
            Self::ProjectName => "projectName",
            Self::FabricChosen => "fabricChosen",
            Self::Cut => "cut",
            Self::Pieced => "pieced",
            Self::Assembled => "assembled",
            Self::BackPrepped => "backPrepped",
            Self::Basted => "basted",
            Self::Quilted => "quilted",
            Self::Bound => "bound",
            Self::Photographed => "photographed",
        }
    }

    /// Column name in the `projects` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::DateStarted => "date_started",
            Self::CompletedDate => "completed_date",
            Self::ProjectName => "project_name",
            Self::FabricChosen => "fabric_chosen",
            Self::Cut => "cut",
            Self::Pieced => "pieced",
            Self::Assembled => "assembled",
            Self::BackPrepped => "back_prepped",
            Self::Basted => "basted",
            Self::Quilted => "quilted",
            Self::Bound => "bound",
            Self::Photographed => "photographed",
        }
    }
}

impl FromStr for SortColumn {
    type Err = CoreError;

    /// Accepts the wire name or the column name.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s || c.column() == s)
            .ok_or_else(|| CoreError::InvalidSortColumn {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
