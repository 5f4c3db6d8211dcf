//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod user;

pub use user::{UserIdentity, UserRecord, filter_users, sample_users};
