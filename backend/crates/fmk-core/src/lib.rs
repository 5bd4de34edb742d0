pub mod error;
pub mod models;
pub mod serde_flag;
pub mod serde_id;
pub mod sync;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::list_order::ListOrder;
pub use models::milestones::Milestones;
pub use models::project::Project;
pub use models::project_draft::ProjectDraft;
pub use models::sort_column::SortColumn;
pub use models::sort_direction::SortDirection;
pub use sync::date_range_counts::DateRangeCounts;
pub use sync::project_record::ProjectRecord;
pub use validation::{parse_calendar_date, require_non_empty};
