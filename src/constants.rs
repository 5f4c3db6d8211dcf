//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Rows-per-page choices offered by the page size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Rows per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Table row and header heights
pub const TABLE_ROW_HEIGHT: f32 = 44.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;

/// Empty state image size (both axes) when no size hint is given
pub const EMPTY_IMAGE_SIZE: f32 = 80.0;

/// Avatar diameter used in the user column
pub const AVATAR_SIZE: f32 = 24.0;

/// Avatar diameter in the row-action modal
pub const NOTICE_AVATAR_SIZE: f32 = 40.0;

/// Search box width in the card header
pub const SEARCH_INPUT_WIDTH: f32 = 260.0;

/// Width of the "go to page" input
pub const PAGE_INPUT_WIDTH: f32 = 64.0;

/// Placeholder rendered for missing values
pub const MISSING_PLACEHOLDER: &str = "—";
