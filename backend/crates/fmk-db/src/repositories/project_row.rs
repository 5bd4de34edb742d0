use fmk_core::{Milestones, Project};

use sqlx::FromRow;

/// Column list shared by every query that returns whole projects.
pub(crate) const PROJECT_COLUMNS: &str = "id, date_started, completed_date, project_name, \
     fabric_chosen, cut, pieced, assembled, back_prepped, basted, quilted, bound, photographed, \
     important, archived, deleted, position";

#[derive(Debug, FromRow)]
pub(crate) struct ProjectRow {
    pub id: i64,
    pub date_started: String,
    pub completed_date: Option<String>,
    pub project_name: String,
    pub fabric_chosen: bool,
    pub cut: bool,
    pub pieced: bool,
    pub assembled: bool,
    pub back_prepped: bool,
    pub basted: bool,
    pub quilted: bool,
    pub bound: bool,
    pub photographed: bool,
    pub important: bool,
    pub archived: bool,
    pub deleted: bool,
    pub position: i64,
}

impl From<ProjectRow> for Project {
    fn from(r: ProjectRow) -> Self {
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
