//! Users State
//!
//! Sample records, the search query and the row-action notice for the users page.

use std::sync::Arc;

use crate::domain::user::{UserRecord, filter_users};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum UsersLoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(Arc<str>),
}

/// Row action the user triggered, shown in a modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowNotice {
    View(i64),
    Delete(i64),
}

impl RowNotice {
    pub fn id(self) -> i64 {
        match self {
            RowNotice::View(id) | RowNotice::Delete(id) => id,
        }
    }
}

/// State for the users page
#[derive(Debug, Default)]
pub struct UsersState {
    users: Vec<UserRecord>,
    query: String,
    load_state: UsersLoadState,
    notice: Option<RowNotice>,
    /// Bumped whenever the records or the query change
    revision: u64,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn load_state(&self) -> &UsersLoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, UsersLoadState::Loading | UsersLoadState::Idle)
    }

    pub fn notice(&self) -> Option<RowNotice> {
        self.notice
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Record with the given id
    pub fn find(&self, id: i64) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Records matching the current query, in dataset order
    pub fn filtered(&self) -> Vec<UserRecord> {
        filter_users(&self.users, &self.query)
    }

    // ==================== Setters ====================

    pub fn set_loading(&mut self) {
        self.load_state = UsersLoadState::Loading;
    }

    pub fn set_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.load_state = UsersLoadState::Ready;
        self.revision += 1;
    }

    /// Record a load failure; the page falls back to an empty dataset
    pub fn set_error(&mut self, message: impl Into<Arc<str>>) {
        self.users.clear();
        self.load_state = UsersLoadState::Error(message.into());
        self.revision += 1;
    }

    /// Update the search query; returns whether it changed
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.query == query {
            return false;
        }
        self.query = query;
        self.revision += 1;
        true
    }

    pub fn show_notice(&mut self, notice: RowNotice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::sample_users;

    fn loaded() -> UsersState {
        let mut state = UsersState::new();
        state.set_users(sample_users().expect("bundled sample users decode"));
        state
    }

    #[test]
    fn starts_loading_until_users_arrive() {
        let mut state = UsersState::new();
        assert!(state.is_loading());
        state.set_loading();
        assert!(state.is_loading());
        state.set_users(Vec::new());
        assert!(!state.is_loading());
        assert_eq!(state.load_state(), &UsersLoadState::Ready);
    }

    #[test]
    fn query_filters_records() {
        let mut state = loaded();
        assert_eq!(state.filtered().len(), 12);

        assert!(state.set_query("chen"));
        let found = state.filtered();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);

        let revision = state.revision();
        assert!(!state.set_query("chen"));
        assert_eq!(state.revision(), revision);
        assert!(state.set_query(""));
        assert_eq!(state.revision(), revision + 1);
        assert_eq!(state.filtered().len(), 12);
    }

    #[test]
    fn error_clears_records() {
        let mut state = loaded();
        state.set_error("asset missing");
        assert!(state.users().is_empty());
        assert!(state.filtered().is_empty());
        assert!(matches!(state.load_state(), UsersLoadState::Error(_)));
    }

    #[test]
    fn notice_carries_record_id() {
        let mut state = loaded();
        let revision = state.revision();
        state.show_notice(RowNotice::Delete(3));
        assert_eq!(state.notice().map(RowNotice::id), Some(3));
        assert_eq!(state.revision(), revision);
        state.dismiss_notice();
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn records_are_found_by_id() {
        let state = loaded();
        assert_eq!(state.find(3).and_then(UserRecord::name), Some("Michael Chen"));
        assert!(state.find(99).is_none());
    }
}
