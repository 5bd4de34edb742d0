pub mod date_range_counts;
pub mod project_record;
