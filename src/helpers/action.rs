//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::components::composite::data_table::{TABLE_KEY_CONTEXT, TableAction};

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
    /// Move focus to the search box
    FocusSearch,
}

/// Entries of the per-row "more" menu
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum RowMenuAction {
    New,
    NewWindow,
    OpenFile,
    OpenFolder,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        KeyBinding::new("secondary-f", MenuAction::FocusSearch, None),
        // Table rows
        KeyBinding::new("up", TableAction::SelectPrev, Some(TABLE_KEY_CONTEXT)),
        KeyBinding::new("down", TableAction::SelectNext, Some(TABLE_KEY_CONTEXT)),
        KeyBinding::new("enter", TableAction::Activate, Some(TABLE_KEY_CONTEXT)),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_search_shortcut_is_window_wide() {
        let bindings = new_key_bindings();
        let focus_search = bindings
            .iter()
            .find(|binding| binding.action().partial_eq(&MenuAction::FocusSearch))
            .expect("focus search binding");

        // No context: dispatch only needs some focused element in the window
        assert!(focus_search.predicate().is_none());
    }

    #[test]
    fn row_navigation_is_scoped_to_the_table() {
        let bindings = new_key_bindings();
        let scoped = bindings
            .iter()
            .filter(|binding| binding.action().partial_eq(&TableAction::SelectNext))
            .all(|binding| binding.predicate().is_some());
        assert!(scoped);
    }
}
