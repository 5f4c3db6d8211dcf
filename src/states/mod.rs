//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Event → Controller → State Method → notify → UI Refresh
//! ```

mod app;
mod i18n;
mod users;

pub use app::*;
pub use i18n::*;
pub use users::*;
