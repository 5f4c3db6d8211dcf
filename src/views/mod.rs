//! View Components
//!
//! Window chrome for the User-Grid shell.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  TitleBar                    │
//! ├─────────────────────────────────────────────┤
//! │                                              │
//! │        Data Grid card (search + table)       │
//! │                                              │
//! ├─────────────────────────────────────────────┤
//! │                   Footer                     │
//! └─────────────────────────────────────────────┘
//! ```

mod title_bar;

pub use title_bar::*;
