//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::GridGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "shell" namespace
pub fn i18n_shell(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GridGlobalStore>().read(cx).locale();
    t!(format!("shell.{key}"), locale = locale).into()
}

/// Get translated string from "users" namespace
pub fn i18n_users(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GridGlobalStore>().read(cx).locale();
    t!(format!("users.{key}"), locale = locale).into()
}

/// Get translated string from "table" namespace
pub fn i18n_table(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GridGlobalStore>().read(cx).locale();
    t!(format!("table.{key}"), locale = locale).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `record_id: "Record #%{id}"`
/// i18n_format(cx, "users.record_id", &[("id", "42")])
/// // Returns "Record #42"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<GridGlobalStore>().read(cx).locale();
    interpolate(&t!(key, locale = locale), args).into()
}

/// Replace `%{name}` placeholders
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("%{{{name}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_replaced() {
        let text = interpolate(
            "Showing %{visible} of %{total} rows",
            &[("visible", "10"), ("total", "1,200")],
        );
        assert_eq!(text, "Showing 10 of 1,200 rows");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        assert_eq!(interpolate("Record #%{id}", &[("page", "2")]), "Record #%{id}");
    }

    #[test]
    fn bundled_english_strings_resolve() {
        assert_eq!(t!("table.no_data", locale = "en"), "No data found");
        assert_eq!(t!("users.title", locale = "en"), "Data Grid");
        assert_eq!(t!("users.search_placeholder", locale = "en"), "Search users...");
    }
}
