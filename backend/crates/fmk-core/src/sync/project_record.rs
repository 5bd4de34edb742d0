//! Flat export/import layout, one record per table row.

use crate::{CoreError, Milestones, Project, Result as CoreResult, require_non_empty, serde_flag};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A project exactly as it sits in the `projects` table.
///
/// Keys are the column names and flags are written as `0/1`, so a backup
/// file mirrors the table. Reading accepts booleans as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: i64,
    pub date_started: String,
    #[serde(default)]
    pub completed_date: Option<String>,
    pub project_name: String,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub fabric_chosen: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub cut: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub pieced: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub assembled: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub back_prepped: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub basted: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub quilted: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub bound: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub photographed: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub archived: bool,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub deleted: bool,
    #[serde(default)]
    pub position: i64,
    #[serde(
        default,
        serialize_with = "serde_flag::serialize_as_int",
        deserialize_with = "serde_flag::deserialize"
    )]
    pub important: bool,
}

impl ProjectRecord {
    /// A record must carry a positive id, a start date and a name.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.id <= 0 {
            return Err(CoreError::Validation {
                message: format!("Record id must be positive, got {}", self.id),
                field: Some("id".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        require_non_empty(
            &self.date_started,
            "date_started",
            &format!("Record {} has no start date.", self.id),
        )?;
        require_non_empty(
            &self.project_name,
            "project_name",
            &format!("Record {} has no project name.", self.id),
        )?;
        Ok(())
    }
}

impl From<Project> for ProjectRecord {
    fn from(p: Project) -> Self {
        let Milestones {
            fabric_chosen,
            cut,
            pieced,
            assembled,
            back_prepped,
            basted,
            quilted,
            bound,
            photographed,
        } = p.milestones;

        Self {
            id: p.id,
            date_started: p.date_started,
            completed_date: p.completed_date,
            project_name: p.project_name,
            fabric_chosen,
            cut,
            pieced,
            assembled,
            back_prepped,
            basted,
            quilted,
            bound,
            photographed,
            archived: p.archived,
            deleted: p.deleted,
            position: p.position,
            important: p.important,
        }
    }
}

impl From<ProjectRecord> for Project {
    fn from(r: ProjectRecord) -> Self {
        Self {
            id: r.id,
            date_started: r.date_started,
            completed_date: r.completed_date,
            project_name: r.project_name,
            milestones: Milestones {
                fabric_chosen: r.fabric_chosen,
                cut: r.cut,
                pieced: r.pieced,
                assembled: r.assembled,
                back_prepped: r.back_prepped,
                basted: r.basted,
                quilted: r.quilted,
                bound: r.bound,
                photographed: r.photographed,
            },
            important: r.important,
            archived: r.archived,
            deleted: r.deleted,
            position: r.position,
        }
    }
}
