pub mod project_repository;
pub mod project_row;
