//! User - Sample User Records
//!
//! Records are decoded from the embedded `data/users.json` in the
//! `{ "User": { "Title", "EMail" }, "Modified", "Id" }` shape.

use serde::{Deserialize, Serialize};

use crate::assets::Assets;
use crate::error::{Error, Result};

/// Path of the bundled sample dataset
pub const SAMPLE_USERS_PATH: &str = "data/users.json";

/// Identity part of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Display name
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    /// Email address
    #[serde(rename = "EMail", default)]
    pub email: Option<String>,
}

/// A user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "User", default)]
    pub user: UserIdentity,
    /// Last-modified timestamp, ISO-8601
    #[serde(rename = "Modified", default)]
    pub modified: Option<String>,
    #[serde(rename = "Id")]
    pub id: i64,
}

impl UserRecord {
    pub fn name(&self) -> Option<&str> {
        non_blank(self.user.title.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        non_blank(self.user.email.as_deref())
    }

    pub fn modified(&self) -> Option<&str> {
        non_blank(self.modified.as_deref())
    }

    /// Name for display, or `fallback` when the record has none
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name().unwrap_or(fallback)
    }

    /// Case-insensitive substring match against name and email.
    ///
    /// `query` must already be lowercase; an empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        [self.name(), self.email()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(query))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Decode records from JSON bytes
pub fn parse_users(bytes: &[u8]) -> Result<Vec<UserRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Load the bundled sample users
pub fn sample_users() -> Result<Vec<UserRecord>> {
    let Some(file) = Assets::get(SAMPLE_USERS_PATH) else {
        return Err(Error::Asset {
            path: SAMPLE_USERS_PATH.to_string(),
        });
    };
    parse_users(&file.data)
}

/// Records whose name or email contains `query`, ignoring case
pub fn filter_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let query = query.to_lowercase();
    users.iter().filter(|u| u.matches(&query)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<UserRecord> {
        sample_users().expect("bundled sample users decode")
    }

    #[test]
    fn bundled_sample_has_twelve_records_in_order() {
        let users = users();
        assert_eq!(users.len(), 12);
        assert_eq!(users[0].name(), Some("John Smith"));
        assert_eq!(users[11].name(), Some("Sophie Martin"));
        assert!(users.iter().enumerate().all(|(i, u)| u.id == i as i64 + 1));
    }

    #[test]
    fn search_chen_matches_only_michael_chen() {
        let found = filter_users(&users(), "chen");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), Some("Michael Chen"));
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn search_ignores_case_and_matches_email() {
        let users = users();
        assert_eq!(filter_users(&users, "CHEN").len(), 1);
        assert_eq!(filter_users(&users, "m.alsaid@").len(), 1);
        assert_eq!(filter_users(&users, "company.com").len(), 12);
        assert_eq!(filter_users(&users, "").len(), 12);
        assert!(filter_users(&users, "nobody-here").is_empty());
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_query() {
        let users = users();
        assert!(filter_users(&users, "chen ").is_empty());
        assert_eq!(filter_users(&users, "michael chen").len(), 1);
    }

    #[test]
    fn missing_fields_decode_to_none() {
        let json = br#"[{ "Id": 7 }, { "User": { "Title": "  " }, "Modified": "", "Id": 8 }]"#;
        let users = parse_users(json).expect("partial records decode");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name(), None);
        assert_eq!(users[0].email(), None);
        assert_eq!(users[1].name(), None);
        assert_eq!(users[1].modified(), None);
        assert_eq!(users[1].display_name("Unknown user"), "Unknown user");
    }

    #[test]
    fn records_without_fields_only_match_empty_query() {
        let json = br#"[{ "Id": 1 }]"#;
        let users = parse_users(json).expect("record decodes");
        assert!(users[0].matches(""));
        assert!(!users[0].matches("a"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(parse_users(b"{ not json"), Err(Error::Json { .. })));
    }
}
