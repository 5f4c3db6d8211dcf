//! DataTable Component
//!
//! A headless filter -> sort -> paginate engine (`state`, `view`, `cell`)
//! with a GPUI entity and pagination bar on top.

pub mod cell;
pub mod column;
pub mod data_table;
pub mod options;
pub mod pagination;
pub mod state;
pub mod view;

pub use cell::CellValue;
pub use column::{Column, ColumnWidth};
pub use data_table::{DataTable, SetPageSize, TABLE_KEY_CONTEXT, TableAction, TableEvent};
pub use options::TableOptions;
pub use pagination::Pagination;
pub use state::{PageNav, SortDirection, SortSpec, TableState};
pub use view::{DerivedView, RowFilter};
