use crate::{SortColumn, SortDirection};

use std::str::FromStr;

#[test]
fn test_sort_column_accepts_wire_and_column_names() {
    assert_eq!(
        SortColumn::from_str("backPrepped").unwrap(),
        SortColumn::BackPrepped
    );
    assert_eq!(
        SortColumn::from_str("back_prepped").unwrap(),
        SortColumn::BackPrepped
    );
    assert_eq!(
        SortColumn::from_str("completedDate").unwrap(),
        SortColumn::CompletedDate
    );
}

#[test]
fn test_sort_column_rejects_columns_off_the_list() {
    assert!(SortColumn::from_str("id").is_err());
    assert!(SortColumn::from_str("archived").is_err());
    assert!(SortColumn::from_str("position").is_err());
    assert!(SortColumn::from_str("project_name; DROP TABLE projects").is_err());
}

#[test]
fn test_every_sort_column_round_trips_through_its_wire_name() {
    for column in SortColumn::ALL {
        assert_eq!(SortColumn::from_str(column.as_str()).unwrap(), column);
    }
}

#[test]
fn test_sort_direction_from_str() {
    assert_eq!(
        SortDirection::from_str("ASC").unwrap(),
        SortDirection::Ascending
    );
    assert_eq!(
        SortDirection::from_str("desc").unwrap(),
        SortDirection::Descending
    );
    assert_eq!(
        SortDirection::from_str("ascending").unwrap(),
        SortDirection::Ascending
    );
    assert!(SortDirection::from_str("sideways").is_err());
}

#[test]
fn test_sort_direction_default_is_descending() {
    assert_eq!(SortDirection::default(), SortDirection::Descending);
    assert_eq!(SortDirection::default().as_sql(), "DESC");
}
