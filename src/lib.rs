//! User-Grid Library
//!
//! A desktop data-grid demo: a searchable, sortable, paginated table of
//! user records inside a themed window shell.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod states;
pub mod utils;
pub mod views;
