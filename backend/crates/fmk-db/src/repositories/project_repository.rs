//! Project repository: every query and command against the `projects` table.
//!
//! ## Lifecycle flags
//!
//! `archived` and `deleted` are two independent columns. The views are:
//!
//! - active: `archived = 0 AND deleted = 0`
//! - archived: `archived = 1 AND deleted = 0`
//! - deleted: `deleted = 1`, whatever the archived flag says
//!
//! A row that is archived and deleted therefore only shows in the deleted
//! view, and goes back to the archived view when restored.
//!
//! The archived and deleted views are sorted by a [`ListOrder`]. Its column
//! and direction come from fixed enum fragments, so they are the only values
//! formatted into query text. Everything else is bound.

use crate::repositories::project_row::{PROJECT_COLUMNS, ProjectRow};
use crate::{DbError, Result as DbErrorResult};

use fmk_core::{DateRangeCounts, ListOrder, Project, ProjectDraft, ProjectRecord};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use sqlx::{Sqlite, SqlitePool, Transaction};

const ACTIVE_FILTER: &str = "archived = 0 AND deleted = 0";
const ARCHIVED_FILTER: &str = "archived = 1 AND deleted = 0";
const DELETED_FILTER: &str = "deleted = 1";

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Projects that are neither archived nor deleted, in id order.
    pub async fn find_active(&self) -> DbErrorResult<Vec<Project>> {
        let sql =
            format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE {ACTIVE_FILTER} ORDER BY id");

        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    pub async fn find_archived(&self, order: ListOrder) -> DbErrorResult<Vec<Project>> {
        self.find_ordered(ARCHIVED_FILTER, order).await
    }

    pub async fn find_deleted(&self, order: ListOrder) -> DbErrorResult<Vec<Project>> {
        self.find_ordered(DELETED_FILTER, order).await
    }

    async fn find_ordered(&self, filter: &str, order: ListOrder) -> DbErrorResult<Vec<Project>> {
        let sql = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE {filter} ORDER BY {} {}, id ASC",
            order.column.column(),
            order.direction.as_sql(),
        );

        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?");

        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Project::from))
    }

    /// Insert a new project when the draft has no id, otherwise overwrite the
    /// editable fields of that row. Returns the row id.
    ///
    /// Nothing is written if the draft is missing its name or start date.
    pub async fn save(&self, draft: &ProjectDraft) -> DbErrorResult<i64> {
        draft.validate()?;
        let draft = draft.clone().normalized();

        match draft.id {
            Some(id) => self.update(id, &draft).await,
            None => self.insert(&draft).await,
        }
    }

    async fn insert(&self, draft: &ProjectDraft) -> DbErrorResult<i64> {
        let m = &draft.milestones;

        let result = sqlx::query(
            r#"
                INSERT INTO projects (
                    date_started, completed_date, project_name,
                    fabric_chosen, cut, pieced, assembled, back_prepped,
                    basted, quilted, bound, photographed, important
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.date_started)
        .bind(&draft.completed_date)
        .bind(&draft.project_name)
        .bind(m.fabric_chosen)
        .bind(m.cut)
        .bind(m.pieced)
        .bind(m.assembled)
        .bind(m.back_prepped)
        .bind(m.basted)
        .bind(m.quilted)
        .bind(m.bound)
        .bind(m.photographed)
        .bind(draft.important)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted project {id}");

        Ok(id)
    }

    async fn update(&self, id: i64, draft: &ProjectDraft) -> DbErrorResult<i64> {
        let m = &draft.milestones;

        let result = sqlx::query(
            r#"
                UPDATE projects
                SET date_started = ?, completed_date = ?, project_name = ?,
                    fabric_chosen = ?, cut = ?, pieced = ?, assembled = ?,
                    back_prepped = ?, basted = ?, quilted = ?, bound = ?,
                    photographed = ?, important = ?
                WHERE id = ?
            "#,
        )
        .bind(&draft.date_started)
        .bind(&draft.completed_date)
        .bind(&draft.project_name)
        .bind(m.fabric_chosen)
        .bind(m.cut)
        .bind(m.pieced)
        .bind(m.assembled)
        .bind(m.back_prepped)
        .bind(m.basted)
        .bind(m.quilted)
        .bind(m.bound)
        .bind(m.photographed)
        .bind(draft.important)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(id)
    }

    /// Set the archived flag. Leaves `deleted` alone.
    pub async fn set_archived(&self, id: i64, archived: bool) -> DbErrorResult<()> {
        sqlx::query("UPDATE projects SET archived = ? WHERE id = ?")
            .bind(archived)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn soft_delete(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("UPDATE projects SET deleted = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Clear the deleted flag and report the row's archived flag, so the
    /// caller knows which view the project went back to. An unknown id
    /// reports `false`.
    pub async fn restore(&self, id: i64) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE projects SET deleted = 0 WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let archived =
            sqlx::query_scalar::<_, bool>("SELECT archived FROM projects WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(archived.unwrap_or(false))
    }

    /// Permanently remove one row. Returns the number of rows removed (0 or 1).
    pub async fn purge(&self, id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Permanently remove every soft-deleted row.
    pub async fn purge_all_deleted(&self) -> DbErrorResult<u64> {
        let sql = format!("DELETE FROM projects WHERE {DELETED_FILTER}");

        let result = sqlx::query(&sql).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    pub async fn set_important(&self, id: i64, important: bool) -> DbErrorResult<()> {
        sqlx::query("UPDATE projects SET important = ? WHERE id = ?")
            .bind(important)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count_active(&self) -> DbErrorResult<i64> {
        self.count_where(ACTIVE_FILTER).await
    }

    /// Archived projects that are not also deleted.
    pub async fn count_completed(&self) -> DbErrorResult<i64> {
        self.count_where(ARCHIVED_FILTER).await
    }

    async fn count_where(&self, filter: &str) -> DbErrorResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM projects WHERE {filter}");

        let total = sqlx::query_scalar::<_, i64>(&sql).fetch_one(&self.pool).await?;

        Ok(total)
    }

    /// Active projects started in `[start, end]` and completed projects
    /// finished in `[start, end]`. Bounds are inclusive `YYYY-MM-DD` strings.
    pub async fn count_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> DbErrorResult<DateRangeCounts> {
        let open_sql = format!(
            "SELECT COUNT(*) FROM projects WHERE {ACTIVE_FILTER} AND date_started BETWEEN ? AND ?"
        );
        let completed_sql = format!(
            "SELECT COUNT(*) FROM projects WHERE {ARCHIVED_FILTER} AND completed_date BETWEEN ? AND ?"
        );

        let open_projects = sqlx::query_scalar::<_, i64>(&open_sql)
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await?;

        let completed_projects = sqlx::query_scalar::<_, i64>(&completed_sql)
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await?;

        Ok(DateRangeCounts {
            open_projects,
            completed_projects,
        })
    }

    /// Every row, every column, in id order.
    pub async fn export_all(&self) -> DbErrorResult<Vec<ProjectRecord>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY id");

        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| ProjectRecord::from(Project::from(r)))
            .collect())
    }

    /// Insert records with their original ids and flags.
    ///
    /// All or nothing: the batch runs in one transaction, and the first
    /// invalid record or failed insert rolls every row back.
    pub async fn import_all(&self, records: &[ProjectRecord]) -> DbErrorResult<usize> {
        for record in records {
            record.validate()?;
        }

        let mut tx = self.pool.begin().await?;

        for record in records {
            Self::insert_record(&mut tx, record).await?;
        }

        tx.commit().await?;

        debug!("Imported {} project records", records.len());

        Ok(records.len())
    }

    async fn insert_record(
        tx: &mut Transaction<'_, Sqlite>,
        record: &ProjectRecord,
    ) -> DbErrorResult<()> {
        let completed_date = record
            .completed_date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, date_started, completed_date, project_name,
                    fabric_chosen, cut, pieced, assembled, back_prepped,
                    basted, quilted, bound, photographed,
                    archived, deleted, position, important
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id)
        .bind(record.date_started.trim())
        .bind(completed_date)
        .bind(&record.project_name)
        .bind(record.fabric_chosen)
        .bind(record.cut)
        .bind(record.pieced)
        .bind(record.assembled)
        .bind(record.back_prepped)
        .bind(record.basted)
        .bind(record.quilted)
        .bind(record.bound)
        .bind(record.photographed)
        .bind(record.archived)
        .bind(record.deleted)
        .bind(record.position)
        .bind(record.important)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
