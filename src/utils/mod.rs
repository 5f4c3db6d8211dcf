//! Utilities
//!
//! Small pure helpers shared by the views.

pub mod format;
