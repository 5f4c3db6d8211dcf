//! Derived View
//!
//! Filter -> sort -> page slice over the table rows, cached by key.
//! The row order is recomputed only when the data generation, the filter
//! generation or the sort spec change; paging only re-slices.

use std::ops::Range;
use std::rc::Rc;

use super::cell::CellValue;
use super::state::{SortDirection, SortSpec, TableState};

/// Optional in-table row predicate
pub type RowFilter<R> = Rc<dyn Fn(&R) -> bool>;

/// Inputs that determine the row order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderKey {
    pub data_generation: u64,
    pub filter_generation: u64,
    pub sort: Option<SortSpec>,
}

/// Cached ordered indices plus the current page slice
#[derive(Debug, Default)]
pub struct DerivedView {
    key: Option<OrderKey>,
    ordered: Vec<usize>,
    page: Range<usize>,
    recomputed: usize,
}

impl DerivedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached order so the next `resolve` recomputes it
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Number of rows left after filtering
    pub fn filtered_len(&self) -> usize {
        self.ordered.len()
    }

    /// Indices (into the raw rows) of the filtered, sorted sequence
    pub fn ordered(&self) -> &[usize] {
        &self.ordered
    }

    /// Indices (into the raw rows) of the current page
    pub fn page(&self) -> &[usize] {
        &self.ordered[self.page.clone()]
    }

    /// How many times the row order was rebuilt
    pub fn recompute_count(&self) -> usize {
        self.recomputed
    }

    /// Bring the view up to date and return the current page.
    ///
    /// `sort_value` reads the value of the active sort column; `None` leaves
    /// the filtered order untouched. The page index is clamped to the
    /// filtered row count before slicing.
    pub fn resolve<R>(
        &mut self,
        key: OrderKey,
        rows: &[R],
        filter: Option<&RowFilter<R>>,
        sort_value: Option<&dyn Fn(&R) -> CellValue>,
        state: &mut TableState,
    ) -> &[usize] {
        if self.key.as_ref() != Some(&key) {
            self.ordered = order_rows(rows, filter, sort_value, key.sort.as_ref());
            self.key = Some(key);
            self.recomputed += 1;
        }

        let total = self.ordered.len();
        state.clamp_page(total);
        self.page = state.page_range(total);
        self.page()
    }
}

/// Filter then stable-sort row indices
fn order_rows<R>(
    rows: &[R],
    filter: Option<&RowFilter<R>>,
    sort_value: Option<&dyn Fn(&R) -> CellValue>,
    sort: Option<&SortSpec>,
) -> Vec<usize> {
    let mut indices: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| filter.is_none_or(|f| f(row)))
        .map(|(i, _)| i)
        .collect();

    if let (Some(read), Some(spec)) = (sort_value, sort) {
        let values: Vec<CellValue> = rows.iter().map(read).collect();
        match spec.direction {
            SortDirection::Ascending => {
                indices.sort_by(|&a, &b| values[a].compare(&values[b]));
            }
            SortDirection::Descending => {
                indices.sort_by(|&a, &b| values[b].compare(&values[a]));
            }
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::state::PageNav;

    #[derive(Debug, Clone)]
    struct Person {
        name: &'static str,
        team: &'static str,
    }

    fn people() -> Vec<Person> {
        [
            ("John Smith", "red"),
            ("Sarah Johnson", "blue"),
            ("Michael Chen", "red"),
            ("Emma Wilson", "green"),
            ("Carlos Rodriguez", "blue"),
            ("Priya Patel", "red"),
            ("Alex Thompson", "green"),
            ("Lisa Anderson", "blue"),
            ("David Kim", "red"),
            ("Rachel Brown", "green"),
            ("Mohammed Al-Said", "blue"),
            ("Sophie Martin", "red"),
        ]
        .into_iter()
        .map(|(name, team)| Person { name, team })
        .collect()
    }

    fn by_name(p: &Person) -> CellValue {
        p.name.into()
    }

    fn by_team(p: &Person) -> CellValue {
        p.team.into()
    }

    fn key(sort: Option<&SortSpec>) -> OrderKey {
        OrderKey {
            data_generation: 1,
            filter_generation: 0,
            sort: sort.cloned(),
        }
    }

    fn resolve_all(
        view: &mut DerivedView,
        rows: &[Person],
        read: fn(&Person) -> CellValue,
        state: &mut TableState,
    ) -> Vec<usize> {
        let sort = state.sort().cloned();
        view.resolve(key(sort.as_ref()), rows, None, Some(&read), state);
        view.ordered().to_vec()
    }

    #[test]
    fn twelve_rows_split_into_two_pages() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(10);

        let page = view.resolve(key(None), &rows, None, None, &mut state).to_vec();
        assert_eq!(page, (0..10).collect::<Vec<_>>());

        state.navigate(PageNav::Next, view.filtered_len());
        let page = view.resolve(key(None), &rows, None, None, &mut state).to_vec();
        assert_eq!(page, vec![10, 11]);
        assert!(!state.can_next_page(view.filtered_len()));
    }

    #[test]
    fn shrinking_page_size_keeps_second_page() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(10);
        state.navigate(PageNav::Next, rows.len());

        state.set_page_size(5);
        let page = view.resolve(key(None), &rows, None, None, &mut state).to_vec();
        assert_eq!(state.page_count(view.filtered_len()), 3);
        assert_eq!(state.page_index(), 1);
        assert_eq!(page, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn descending_reverses_ascending_for_unique_keys() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(50);

        state.toggle_sort("name");
        let ascending = resolve_all(&mut view, &rows, by_name, &mut state);
        state.toggle_sort("name");
        let descending = resolve_all(&mut view, &rows, by_name, &mut state);

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
        assert_eq!(rows[ascending[0]].name, "Alex Thompson");
    }

    #[test]
    fn equal_keys_keep_original_order_both_ways() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(50);

        state.toggle_sort("team");
        let ascending = resolve_all(&mut view, &rows, by_team, &mut state);
        state.toggle_sort("team");
        let descending = resolve_all(&mut view, &rows, by_team, &mut state);

        for order in [&ascending, &descending] {
            for team in ["red", "green", "blue"] {
                let members: Vec<usize> = order
                    .iter()
                    .copied()
                    .filter(|&i| rows[i].team == team)
                    .collect();
                let mut sorted = members.clone();
                sorted.sort_unstable();
                assert_eq!(members, sorted, "team {team} lost its relative order");
            }
        }
        assert_eq!(rows[ascending[0]].team, "blue");
        assert_eq!(rows[descending[0]].team, "red");
    }

    #[test]
    fn three_header_clicks_restore_original_order() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(50);

        for _ in 0..3 {
            state.toggle_sort("name");
        }
        let order = resolve_all(&mut view, &rows, by_name, &mut state);
        assert_eq!(order, (0..rows.len()).collect::<Vec<_>>());
    }

    #[test]
    fn sort_applies_before_pagination() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(5);
        state.toggle_sort("name");

        let sort = state.sort().cloned();
        let read: fn(&Person) -> CellValue = by_name;
        let first: Vec<_> = view
            .resolve(key(sort.as_ref()), &rows, None, Some(&read), &mut state)
            .iter()
            .map(|&i| rows[i].name)
            .collect();
        state.navigate(PageNav::Next, view.filtered_len());
        let second: Vec<_> = view
            .resolve(key(sort.as_ref()), &rows, None, Some(&read), &mut state)
            .iter()
            .map(|&i| rows[i].name)
            .collect();

        assert_eq!(first[0], "Alex Thompson");
        assert!(first.iter().all(|a| second.iter().all(|b| a < b)));
    }

    #[test]
    fn filter_applies_before_sort_and_paging() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(2);
        let only_red: RowFilter<Person> = Rc::new(|p| p.team == "red");

        let page = view
            .resolve(key(None), &rows, Some(&only_red), None, &mut state)
            .to_vec();
        assert_eq!(view.filtered_len(), 5);
        assert_eq!(page, vec![0, 2]);
    }

    #[test]
    fn empty_filter_result_clamps_to_first_page() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(5);
        state.navigate(PageNav::Last, rows.len());
        let nobody: RowFilter<Person> = Rc::new(|_| false);

        let page = view
            .resolve(key(None), &rows, Some(&nobody), None, &mut state)
            .to_vec();
        assert!(page.is_empty());
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_count(view.filtered_len()), 1);
    }

    #[test]
    fn order_is_cached_until_key_changes() {
        let rows = people();
        let mut view = DerivedView::new();
        let mut state = TableState::new(5);

        view.resolve(key(None), &rows, None, None, &mut state);
        state.navigate(PageNav::Next, rows.len());
        view.resolve(key(None), &rows, None, None, &mut state);
        state.set_page_size(10);
        view.resolve(key(None), &rows, None, None, &mut state);
        assert_eq!(view.recompute_count(), 1);

        let newer = OrderKey {
            data_generation: 2,
            ..key(None)
        };
        view.resolve(newer.clone(), &rows, None, None, &mut state);
        assert_eq!(view.recompute_count(), 2);

        view.invalidate();
        view.resolve(newer, &rows, None, None, &mut state);
        assert_eq!(view.recompute_count(), 3);
    }
}
