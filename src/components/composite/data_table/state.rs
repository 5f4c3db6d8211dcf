//! Table State
//!
//! Pagination and sorting state owned by a single `DataTable`.
//! Every mutation keeps the page index clamped, or leaves it to `clamp_page`
//! on the next render when the row count is not known yet.

use std::ops::Range;

use gpui::SharedString;

/// Sort direction of the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active single-column sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Column identifier
    pub column: SharedString,
    pub direction: SortDirection,
}

/// Page navigation requested by the pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

/// Pagination and sort state
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    page_index: usize,
    page_size: usize,
    sort: Option<SortSpec>,
}

impl TableState {
    /// Create a state on the first page with the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            sort: None,
        }
    }

    // ==================== Getters ====================

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Direction the given column is sorted in, if it is the active sort
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|spec| spec.column.as_str() == column)
            .map(|spec| spec.direction)
    }

    /// Number of pages for `total` rows, never less than one
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    /// Row range of the current page within `total` rows
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    // ==================== Setters ====================

    /// Clamp the page index into `[0, page_count - 1]`
    pub fn clamp_page(&mut self, total: usize) {
        let last = self.page_count(total) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }

    pub fn set_page_index(&mut self, index: usize, total: usize) {
        self.page_index = index.min(self.page_count(total) - 1);
    }

    pub fn navigate(&mut self, nav: PageNav, total: usize) {
        let last = self.page_count(total) - 1;
        self.page_index = match nav {
            PageNav::First => 0,
            PageNav::Previous => self.page_index.saturating_sub(1),
            PageNav::Next => (self.page_index + 1).min(last),
            PageNav::Last => last,
        };
    }

    /// Apply a 1-based page number typed by the user.
    ///
    /// Blank or non-numeric input means page 1.
    pub fn go_to_page_input(&mut self, input: &str, total: usize) {
        let index = parse_page_number(input).saturating_sub(1);
        self.set_page_index(index, total);
    }

    /// Change the page size; the page index is clamped on the next render.
    ///
    /// Returns whether the size changed.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        let size = size.max(1);
        if self.page_size == size {
            return false;
        }
        self.page_size = size;
        true
    }

    /// Reset to the first page after the filtered row set changed
    pub fn filter_changed(&mut self) {
        self.page_index = 0;
    }

    /// Cycle `unsorted -> ascending -> descending -> unsorted` on a column.
    ///
    /// Sorting a different column replaces the previous sort. Returns the new spec.
    pub fn toggle_sort(&mut self, column: impl Into<SharedString>) -> Option<&SortSpec> {
        let column = column.into();
        let next = match self.sort_direction(&column) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.sort = next.map(|direction| SortSpec { column, direction });
        self.page_index = 0;
        self.sort.as_ref()
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }
}

/// 1-based page number typed by the user.
///
/// Blank or non-numeric input is page 1, negative numbers are page 0 and
/// digit runs too large for `usize` saturate.
fn parse_page_number(input: &str) -> usize {
    let input = input.trim();
    if let Ok(page) = input.parse::<usize>() {
        return page;
    }
    match input.strip_prefix('-') {
        Some(digits) if is_digits(digits) => 0,
        _ if is_digits(input) => usize::MAX,
        _ => 1,
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_at_least_one() {
        let state = TableState::new(10);
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_count(10), 1);
        assert_eq!(state.page_count(11), 2);
        assert_eq!(state.page_count(12), 2);
        assert_eq!(TableState::new(5).page_count(12), 3);
    }

    #[test]
    fn zero_page_size_is_bumped() {
        let mut state = TableState::new(0);
        assert_eq!(state.page_size(), 1);
        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn navigation_stays_in_range() {
        let total = 12;
        let mut state = TableState::new(5);

        state.navigate(PageNav::Previous, total);
        assert_eq!(state.page_index(), 0);
        assert!(!state.can_previous_page());

        state.navigate(PageNav::Next, total);
        state.navigate(PageNav::Next, total);
        state.navigate(PageNav::Next, total);
        assert_eq!(state.page_index(), 2);
        assert!(!state.can_next_page(total));

        state.navigate(PageNav::First, total);
        assert_eq!(state.page_index(), 0);
        state.navigate(PageNav::Last, total);
        assert_eq!(state.page_index(), 2);

        for nav in [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last] {
            for total in [0, 1, 4, 5, 6, 49, 50, 51] {
                let mut s = TableState::new(5);
                s.set_page_index(7, total);
                s.navigate(nav, total);
                assert!(s.page_index() < s.page_count(total));
            }
        }
    }

    #[test]
    fn twelve_rows_page_size_ten() {
        let total = 12;
        let mut state = TableState::new(10);
        assert_eq!(state.page_count(total), 2);
        assert_eq!(state.page_range(total), 0..10);

        state.navigate(PageNav::Next, total);
        assert_eq!(state.page_range(total), 10..12);
        assert!(!state.can_next_page(total));
        assert!(state.can_previous_page());
    }

    #[test]
    fn page_input_is_one_based_and_clamped() {
        let total = 12;
        let mut state = TableState::new(5);

        state.go_to_page_input("2", total);
        assert_eq!(state.page_index(), 1);

        state.go_to_page_input("99", total);
        assert_eq!(state.page_index(), 2);

        state.go_to_page_input("0", total);
        assert_eq!(state.page_index(), 0);

        state.go_to_page_input("-4", total);
        assert_eq!(state.page_index(), 0);

        state.go_to_page_input("3", total);
        state.go_to_page_input("abc", total);
        assert_eq!(state.page_index(), 0);

        state.go_to_page_input(" 3 ", total);
        state.go_to_page_input("", total);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn oversized_page_number_lands_on_last_page() {
        let total = 12;
        let mut state = TableState::new(5);
        state.go_to_page_input("99999999999999999999", total);
        assert_eq!(state.page_index(), 2);

        state.go_to_page_input("-99999999999999999999", total);
        assert_eq!(state.page_index(), 0);

        assert_eq!(parse_page_number("+2"), 2);
        assert_eq!(parse_page_number("2.5"), 1);
        assert_eq!(parse_page_number("--3"), 1);
    }

    #[test]
    fn page_size_change_reports_whether_it_changed() {
        let mut state = TableState::new(10);
        assert!(!state.set_page_size(10));
        assert!(state.set_page_size(20));
        assert!(!state.set_page_size(20));
        assert_eq!(state.page_size(), 20);
    }

    #[test]
    fn page_size_change_keeps_index_when_still_valid() {
        let total = 12;
        let mut state = TableState::new(10);
        state.navigate(PageNav::Next, total);
        assert_eq!(state.page_index(), 1);

        state.set_page_size(5);
        state.clamp_page(total);
        assert_eq!(state.page_count(total), 3);
        assert_eq!(state.page_index(), 1);
        assert_eq!(state.page_range(total), 5..10);
    }

    #[test]
    fn page_size_growth_is_clamped_on_render() {
        let total = 12;
        let mut state = TableState::new(5);
        state.navigate(PageNav::Last, total);
        assert_eq!(state.page_index(), 2);

        state.set_page_size(50);
        assert_eq!(state.page_index(), 2);
        assert_eq!(state.page_range(total), 12..12);

        state.clamp_page(total);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_range(total), 0..12);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut state = TableState::new(5);
        state.navigate(PageNav::Last, 20);
        assert_eq!(state.page_index(), 3);
        state.filter_changed();
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let mut state = TableState::new(10);

        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));

        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Descending));

        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), None);
        assert!(state.sort().is_none());
    }

    #[test]
    fn sorting_another_column_replaces_previous() {
        let mut state = TableState::new(10);
        state.toggle_sort("name");
        state.toggle_sort("name");

        state.toggle_sort("modified");
        assert_eq!(state.sort_direction("name"), None);
        assert_eq!(state.sort_direction("modified"), Some(SortDirection::Ascending));
    }

    #[test]
    fn sort_change_returns_to_first_page() {
        let mut state = TableState::new(5);
        state.navigate(PageNav::Last, 12);
        state.toggle_sort("name");
        assert_eq!(state.page_index(), 0);
    }
}
