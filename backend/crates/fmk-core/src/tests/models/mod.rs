mod list_order;
mod project;
mod project_draft;
mod sort_column;
