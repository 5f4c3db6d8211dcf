//! Users Controller
//!
//! Loads the sample records and routes search and row actions into `UsersState`.

use gpui::{App, Entity};
use tracing::{debug, error, info};

use crate::domain::user::sample_users;
use crate::states::{RowNotice, UsersState};

/// Users page controller
#[derive(Clone)]
pub struct UsersController {
    users: Entity<UsersState>,
}

impl UsersController {
    pub fn new(users: Entity<UsersState>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &Entity<UsersState> {
        &self.users
    }

    /// Decode the bundled dataset off the UI thread
    pub fn load(&self, cx: &mut App) {
        self.users.update(cx, |state, cx| {
            state.set_loading();
            cx.notify();
        });

        let users = self.users.clone();
        cx.spawn(async move |cx| {
            let result = cx.background_executor().spawn(async { sample_users() }).await;

            let _ = users.update(cx, |state, cx| {
                match result {
                    Ok(records) => {
                        info!(count = records.len(), "Sample users loaded");
                        state.set_users(records);
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to load sample users");
                        state.set_error(e.to_string());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Set search text
    pub fn set_query(&self, query: String, cx: &mut App) {
        self.users.update(cx, |state, cx| {
            if state.set_query(query) {
                debug!(query = state.query(), "Search query changed");
                cx.notify();
            }
        });
    }

    pub fn show_notice(&self, notice: RowNotice, cx: &mut App) {
        info!(notice = ?notice, "Row action");
        self.users.update(cx, |state, cx| {
            state.show_notice(notice);
            cx.notify();
        });
    }

    pub fn dismiss_notice(&self, cx: &mut App) {
        self.users.update(cx, |state, cx| {
            state.dismiss_notice();
            cx.notify();
        });
    }
}
