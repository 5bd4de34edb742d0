//! Ordering of the archived and deleted views.

use crate::{SortColumn, SortDirection};

use serde::{Deserialize, Serialize};

/// Sort column and direction for one list call.
///
/// The caller owns the "current sort" and passes it on every request.
/// Defaults to most recently completed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl ListOrder {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Build an order from raw request parameters.
    ///
    /// A missing parameter takes its default. If either parameter is present
    /// but not on the allow-list, both fall back to the default.
    pub fn from_params(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let column = sort_by.map_or(Ok(SortColumn::default()), |s| s.parse::<SortColumn>());
        let direction =
            sort_order.map_or(Ok(SortDirection::default()), |s| s.parse::<SortDirection>());

        match (column, direction) {
            (Ok(column), Ok(direction)) => Self { column, direction },
            _ => Self::default(),
        }
    }
}
