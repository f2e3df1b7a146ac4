//! Local, client-only column sorting over the buffered rows.

use std::cmp::Ordering;

use rowkeeper_model::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click transition. Only a second click on the column already
    /// sorted ascending flips to descending; every other click sorts
    /// ascending.
    pub fn next(current: Option<SortState>, clicked: SortColumn) -> SortState {
        let direction = match current {
            Some(SortState {
                column,
                direction: SortDirection::Ascending,
            }) if column == clicked => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        SortState {
            column: clicked,
            direction,
        }
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let ordering = match self.column {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Value => a.value.cmp(&b.value),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Stable sort of a copy of `rows`.
    pub fn sorted(&self, rows: &[Item]) -> Vec<Item> {
        let mut sorted = rows.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rows: &[Item]) -> Vec<i64> {
        rows.iter().map(|item| item.id.get()).collect()
    }

    #[test]
    fn click_cycle() {
        let first = SortState::next(None, SortColumn::Id);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = SortState::next(Some(first), SortColumn::Id);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortState::next(Some(second), SortColumn::Id);
        assert_eq!(third.direction, SortDirection::Ascending);

        let other = SortState::next(Some(second), SortColumn::Value);
        assert_eq!(
            other,
            SortState {
                column: SortColumn::Value,
                direction: SortDirection::Ascending
            }
        );
    }

    #[test]
    fn value_sort_is_lexicographic() {
        let rows = vec![Item::new(2, "Item 2"), Item::new(10, "Item 10"), Item::new(1, "Item 1")];
        let state = SortState {
            column: SortColumn::Value,
            direction: SortDirection::Ascending,
        };
        assert_eq!(ids(&state.sorted(&rows)), vec![1, 10, 2]);
    }

    #[test]
    fn id_sort_is_numeric_and_descending_reverses() {
        let rows = vec![Item::new(2, "b"), Item::new(10, "a"), Item::new(1, "c")];
        let state = SortState {
            column: SortColumn::Id,
            direction: SortDirection::Descending,
        };
        assert_eq!(ids(&state.sorted(&rows)), vec![10, 2, 1]);
    }

    #[test]
    fn equal_keys_keep_buffer_order() {
        let rows = vec![Item::new(3, "same"), Item::new(1, "same"), Item::new(2, "same")];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let state = SortState {
                column: SortColumn::Value,
                direction,
            };
            assert_eq!(ids(&state.sorted(&rows)), vec![3, 1, 2]);
        }
    }
}
