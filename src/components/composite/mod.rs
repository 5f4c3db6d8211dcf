//! Composite Components
//!
//! Components built from several primitives.

pub mod data_table;
pub mod empty;
pub mod modal;
pub mod user_avatar;

pub use data_table::{CellValue, Column, DataTable, TableOptions};
pub use empty::Empty;
pub use modal::Modal;
pub use user_avatar::UserAvatar;
