//! Table Options
//!
//! Caller-facing switches for the DataTable pagination UI.

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Display options for a DataTable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Show the first/previous/next/last buttons
    pub show_pagination: bool,
    /// Show the "Showing X of Y rows" tag
    pub show_page_count: bool,
    /// Show the rows-per-page selector
    pub show_page_length: bool,
    /// Show "Page i of n" with the go-to-page input
    pub show_page_selector: bool,
    /// Initial rows per page
    pub page_size: usize,
    /// Render the loading indicator instead of rows
    pub loading: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            show_pagination: true,
            show_page_count: false,
            show_page_length: true,
            show_page_selector: true,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
        }
    }
}

impl TableOptions {
    pub fn show_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    pub fn show_page_count(mut self, show: bool) -> Self {
        self.show_page_count = show;
        self
    }

    pub fn show_page_length(mut self, show: bool) -> Self {
        self.show_page_length = show;
        self
    }

    pub fn show_page_selector(mut self, show: bool) -> Self {
        self.show_page_selector = show;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Whether any part of the pagination bar is visible
    pub fn has_footer(&self) -> bool {
        self.show_pagination || self.show_page_count || self.show_page_length || self.show_page_selector
    }

    /// Sizes offered by the selector: the standard list plus the caller default
    pub fn page_size_options(&self) -> Vec<usize> {
        let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
        sizes.push(self.page_size);
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_sizes_when_default_is_listed() {
        let options = TableOptions::default();
        assert_eq!(options.page_size_options(), vec![5, 10, 20, 50]);
    }

    #[test]
    fn caller_default_is_merged_in_order() {
        let options = TableOptions::default().page_size(25);
        assert_eq!(options.page_size_options(), vec![5, 10, 20, 25, 50]);

        let options = TableOptions::default().page_size(100);
        assert_eq!(options.page_size_options(), vec![5, 10, 20, 50, 100]);
    }

    #[test]
    fn footer_visibility_follows_flags() {
        let bare = TableOptions::default()
            .show_pagination(false)
            .show_page_length(false)
            .show_page_selector(false);
        assert!(!bare.has_footer());
        assert!(bare.show_page_count(true).has_footer());
        assert!(TableOptions::default().has_footer());
        assert_eq!(TableOptions::default().page_size(0).page_size, 1);
    }
}
