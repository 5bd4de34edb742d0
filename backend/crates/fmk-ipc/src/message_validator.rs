use crate::{DateRangeParams, IpcError, Result as IpcErrorResult};

use fmk_core::{ProjectDraft, parse_calendar_date};

/// Validates request parameters before any store call
pub struct MessageValidator;

impl MessageValidator {
    /// Ids are assigned by SQLite starting at 1.
    #[track_caller]
    pub fn validate_id(id: i64) -> IpcErrorResult<()> {
        if id <= 0 {
            return Err(IpcError::validation(
                format!("id must be a positive integer, got {id}"),
                "id",
            ));
        }

        Ok(())
    }

    /// Required fields, date formats, and the id when editing.
    #[track_caller]
    pub fn validate_draft(draft: &ProjectDraft) -> IpcErrorResult<()> {
        if let Some(id) = draft.id {
            Self::validate_id(id)?;
        }

        draft.validate()?;
        parse_calendar_date(&draft.date_started, "dateStarted")?;

        if let Some(completed) = draft.completed_date.as_deref()
            && !completed.trim().is_empty()
        {
            parse_calendar_date(completed, "completedDate")?;
        }

        Ok(())
    }

    /// Both bounds must be dates and the range must not be reversed.
    #[track_caller]
    pub fn validate_date_range(params: &DateRangeParams) -> IpcErrorResult<()> {
        let start = parse_calendar_date(&params.start_date, "startDate")?;
        let end = parse_calendar_date(&params.end_date, "endDate")?;

        if start > end {
            return Err(IpcError::validation(
                format!(
                    "startDate ({}) must not be after endDate ({})",
                    params.start_date.trim(),
                    params.end_date.trim()
                ),
                "startDate",
            ));
        }

        Ok(())
    }
}
