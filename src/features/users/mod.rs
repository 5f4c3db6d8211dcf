//! Users Feature
//!
//! Searchable user table with row actions.

pub mod controller;
pub mod page;

pub use controller::UsersController;
pub use page::UsersPage;
