//! Property-based tests for table sorting using proptest.

use proptest::prelude::*;
use quicktasks::widgets::table::{
    compare_missing_last, content, sorted_indices, Column, Sortable, SortOrder, Sorting, Width,
};

fn order_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
}

fn sorting_strategy() -> impl Strategy<Value = Sorting> {
    prop_oneof![
        Just(Sorting::Unsorted),
        (0usize..4, order_strategy()).prop_map(|(column, order)| Sorting::sort_by(column, order)),
    ]
}

fn key_column<'a>() -> Column<'a, Option<i32>> {
    Column::new(
        "Key",
        Width::fraction(1.0),
        content::optional_text(|key: &Option<i32>| *key),
    )
    .sortable(Sortable::by_optional_key(|key: &Option<i32>| *key))
}

proptest! {
    /// Three clicks on the same header return to where it started.
    #[test]
    fn toggling_has_period_three(sorting in sorting_strategy(), column in 0usize..4) {
        let once = sorting.toggled(column);
        prop_assert_ne!(once, sorting);
        if sorting == Sorting::Unsorted || sorting.order_for(column).is_some() {
            prop_assert_eq!(once.toggled(column).toggled(column), sorting);
        } else {
            prop_assert_eq!(once, Sorting::sort_by(column, SortOrder::Ascending));
        }
    }

    /// Sorting reorders rows but never adds or drops one.
    #[test]
    fn sorting_is_a_permutation(
        keys in prop::collection::vec(prop::option::of(-50i32..50), 0..40),
        order in order_strategy(),
    ) {
        let columns = vec![key_column()];
        let mut indices = sorted_indices(&keys, &columns, Sorting::sort_by(0, order));
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..keys.len()).collect::<Vec<_>>());
    }

    /// Missing keys trail present ones, which are ordered by direction.
    #[test]
    fn missing_keys_trail(
        keys in prop::collection::vec(prop::option::of(-50i32..50), 0..40),
        order in order_strategy(),
    ) {
        let columns = vec![key_column()];
        let sorted: Vec<Option<i32>> = sorted_indices(&keys, &columns, Sorting::sort_by(0, order))
            .into_iter()
            .map(|index| keys[index])
            .collect();

        let present = sorted.iter().take_while(|key| key.is_some()).count();
        prop_assert!(sorted[present..].iter().all(Option::is_none));
        for pair in sorted[..present].windows(2) {
            prop_assert_ne!(
                compare_missing_last(pair[0], pair[1], order),
                std::cmp::Ordering::Greater
            );
        }
    }

    /// Rows with equal keys keep their input order.
    #[test]
    fn sorting_is_stable(
        keys in prop::collection::vec(prop::option::of(0i32..3), 0..30),
        order in order_strategy(),
    ) {
        let columns = vec![key_column()];
        let indices = sorted_indices(&keys, &columns, Sorting::sort_by(0, order));
        for pair in indices.windows(2) {
            if keys[pair[0]] == keys[pair[1]] {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}
