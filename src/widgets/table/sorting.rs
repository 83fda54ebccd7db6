use std::cmp::Ordering;

use super::column::{Column, Sortable};

/// Direction of an active sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Flip `ordering` for descending sorts, leave it alone otherwise.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Indicator painted next to the header of the active sort column.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Ascending => "⬆",
            Self::Descending => "⬇",
        }
    }
}

/// Sort state of a table.
///
/// The table only ever reads this value. Header interaction produces the
/// next state through [`Sorting::toggled`] and hands it back to the owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sorting {
    #[default]
    Unsorted,
    SortBy { column: usize, order: SortOrder },
}

impl Sorting {
    #[inline]
    pub fn sort_by(column: usize, order: SortOrder) -> Self {
        Self::SortBy { column, order }
    }

    /// State after a header interaction on `column`.
    ///
    /// `Unsorted -> Ascending -> Descending -> Unsorted` on the same column,
    /// switching to another column always restarts at ascending.
    pub fn toggled(self, column: usize) -> Self {
        match self {
            Self::SortBy {
                column: current,
                order: SortOrder::Ascending,
            } if current == column => Self::sort_by(column, SortOrder::Descending),
            Self::SortBy {
                column: current,
                order: SortOrder::Descending,
            } if current == column => Self::Unsorted,
            _ => Self::sort_by(column, SortOrder::Ascending),
        }
    }

    /// The order applied to `column`, if it is the one being sorted by.
    pub fn order_for(self, column: usize) -> Option<SortOrder> {
        match self {
            Self::SortBy { column: c, order } if c == column => Some(order),
            _ => None,
        }
    }
}

/// Compare two optional keys so that missing values always sort last.
///
/// Only the comparison between two present values follows `order`; a
/// missing value is placed after every present one in both directions.
pub fn compare_missing_last<K: Ord>(a: Option<K>, b: Option<K>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => order.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The sortable capability and direction `sorting` selects, if it selects
/// an existing column whose capability is present and enabled.
///
/// Visibility plays no part: a hidden column still sorts.
pub(crate) fn active_sort<'c, 'a, T>(
    columns: &'c [Column<'a, T>],
    sorting: Sorting,
) -> Option<(&'c Sortable<'a, T>, SortOrder)> {
    let Sorting::SortBy { column, order } = sorting else {
        return None;
    };

    let Some(target) = columns.get(column) else {
        log::debug!(
            "sorting references column {column} but the table has {} columns, rendering unsorted",
            columns.len()
        );
        return None;
    };

    match target.sort_capability() {
        Some(sortable) if sortable.is_enabled() => Some((sortable, order)),
        _ => None,
    }
}

/// Row order for `items` under `sorting`, as indices into `items`.
///
/// The sort is stable, so rows comparing equal keep their input order.
pub fn sorted_indices<T>(items: &[T], columns: &[Column<'_, T>], sorting: Sorting) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    if let Some((sortable, direction)) = active_sort(columns, sorting) {
        order.sort_by(|&a, &b| sortable.compare(&items[a], &items[b], direction));
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_three_states() {
        let first = Sorting::Unsorted.toggled(2);
        let second = first.toggled(2);
        let third = second.toggled(2);

        assert_eq!(first, Sorting::sort_by(2, SortOrder::Ascending));
        assert_eq!(second, Sorting::sort_by(2, SortOrder::Descending));
        assert_eq!(third, Sorting::Unsorted);
        assert_eq!(third.toggled(2), first);
    }

    #[test]
    fn switching_columns_restarts_ascending() {
        let sorting = Sorting::sort_by(0, SortOrder::Descending);
        assert_eq!(sorting.toggled(3), Sorting::sort_by(3, SortOrder::Ascending));

        let sorting = Sorting::sort_by(0, SortOrder::Ascending);
        assert_eq!(sorting.toggled(1), Sorting::sort_by(1, SortOrder::Ascending));
    }

    #[test]
    fn order_for_only_reports_the_active_column() {
        let sorting = Sorting::sort_by(1, SortOrder::Descending);
        assert_eq!(sorting.order_for(1), Some(SortOrder::Descending));
        assert_eq!(sorting.order_for(0), None);
        assert_eq!(Sorting::Unsorted.order_for(1), None);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        use SortOrder::*;

        assert_eq!(compare_missing_last(Some(1), None, Ascending), Ordering::Less);
        assert_eq!(compare_missing_last(Some(1), None, Descending), Ordering::Less);
        assert_eq!(compare_missing_last(None, Some(1), Descending), Ordering::Greater);
        assert_eq!(compare_missing_last::<i32>(None, None, Descending), Ordering::Equal);
        assert_eq!(compare_missing_last(Some(1), Some(2), Descending), Ordering::Greater);
    }
}
