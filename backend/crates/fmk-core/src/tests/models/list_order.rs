use crate::{ListOrder, SortColumn, SortDirection};

use googletest::assert_that;
use googletest::prelude::eq;
use proptest::prelude::{any, prop_assert_eq, prop_assume, proptest};

#[test]
fn given_valid_params_when_building_order_then_uses_them() {
    let order = ListOrder::from_params(Some("projectName"), Some("ASC"));

    assert_that!(order.column, eq(SortColumn::ProjectName));
    assert_that!(order.direction, eq(SortDirection::Ascending));
}

#[test]
fn given_no_params_when_building_order_then_completed_date_descending() {
    let order = ListOrder::from_params(None, None);

    assert_that!(
        order,
        eq(ListOrder::new(
            SortColumn::CompletedDate,
            SortDirection::Descending
        ))
    );
}

#[test]
fn given_only_column_when_building_order_then_direction_defaults() {
    let order = ListOrder::from_params(Some("cut"), None);

    assert_that!(order.column, eq(SortColumn::Cut));
    assert_that!(order.direction, eq(SortDirection::Descending));
}

#[test]
fn given_invalid_direction_when_building_order_then_both_fall_back() {
    let order = ListOrder::from_params(Some("projectName"), Some("UPWARDS"));

    assert_that!(order, eq(ListOrder::default()));
}

#[test]
fn given_invalid_column_when_building_order_then_both_fall_back() {
    let order = ListOrder::from_params(Some("id"), Some("ASC"));

    assert_that!(order, eq(ListOrder::default()));
}

proptest! {
    #[test]
    fn any_column_off_the_list_falls_back_to_default(
        column in "[a-zA-Z_ ;'-]{0,24}",
        ascending in any::<bool>(),
    ) {
        prop_assume!(column.parse::<SortColumn>().is_err());
        let direction = if ascending { "ASC" } else { "DESC" };

        let order = ListOrder::from_params(Some(&column), Some(direction));

        prop_assert_eq!(order, ListOrder::default());
    }
}
