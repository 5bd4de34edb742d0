pub mod list_order;
pub mod milestones;
pub mod project;
pub mod project_draft;
pub mod sort_column;
pub mod sort_direction;
