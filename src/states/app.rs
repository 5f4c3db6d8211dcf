//! Application State
//!
//! Persisted application settings: theme, default page size and locale.

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{Action, App, AppContext, Context, Entity, Global};
use gpui_component::ThemeMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

impl ThemeAction {
    /// Mode to persist; `None` follows the system appearance
    pub fn mode(self) -> Option<ThemeMode> {
        match self {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const CONFIG_FILE_NAME: &str = "user-grid.toml";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Rows per page from config; anything outside the offered sizes falls back to the default
pub fn sanitize_page_size(size: Option<usize>) -> usize {
    size.filter(|s| PAGE_SIZE_OPTIONS.contains(s))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridAppState {
    locale: Option<String>,
    theme: Option<String>,
    page_size: Option<usize>,
}

impl GridAppState {
    /// Load state from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })
    }

    /// Parse config text; blank text yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    /// Default rows per page for new tables
    pub fn page_size(&self) -> usize {
        sanitize_page_size(self.page_size)
    }

    // ==================== Setters ====================

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = Some(sanitize_page_size(Some(size)));
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<GridGlobalStore>()`
#[derive(Clone)]
pub struct GridGlobalStore {
    app_state: Entity<GridAppState>,
}

impl GridGlobalStore {
    pub fn new(app_state: Entity<GridAppState>) -> Self {
        Self { app_state }
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a GridAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut GridAppState, &mut Context<GridAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for GridGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &GridAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut GridAppState, &App) + Send + 'static,
{
    let store = cx.global::<GridGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_config_gives_defaults() {
        let state = GridAppState::parse("  \n").expect("blank config parses");
        assert_eq!(state, GridAppState::new());
        assert_eq!(state.theme(), None);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.locale(), "en");
    }

    #[test]
    fn theme_and_page_size_are_read() {
        let state = GridAppState::parse("theme = \"dark\"\npage_size = 20\n").expect("config parses");
        assert_eq!(state.theme(), Some(ThemeMode::Dark));
        assert_eq!(state.page_size(), 20);
    }

    #[test]
    fn unknown_values_fall_back() {
        let state = GridAppState::parse("theme = \"sepia\"\npage_size = 7\n").expect("config parses");
        assert_eq!(state.theme(), None);
        assert_eq!(state.page_size(), 10);
        assert_eq!(sanitize_page_size(Some(0)), 10);
        assert_eq!(sanitize_page_size(Some(50)), 50);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(GridAppState::parse("page_size = [").is_err());
    }

    #[test]
    fn settings_survive_a_toml_round_trip() {
        let mut state = GridAppState::new();
        state.set_theme(Some(ThemeMode::Light));
        state.set_page_size(5);
        let text = toml::to_string(&state).expect("state serializes");
        let back = GridAppState::parse(&text).expect("state parses");
        assert_eq!(back.theme(), Some(ThemeMode::Light));
        assert_eq!(back.page_size(), 5);
    }

    #[test]
    fn picked_page_size_is_saved_and_reloaded() {
        let mut state = GridAppState::parse("theme = \"dark\"\n").expect("config parses");
        state.set_page_size(50);
        let text = toml::to_string(&state).expect("state serializes");
        assert!(text.contains("page_size = 50"));
        let back = GridAppState::parse(&text).expect("state parses");
        assert_eq!(back.page_size(), 50);
        assert_eq!(back.theme(), Some(ThemeMode::Dark));

        state.set_page_size(7);
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn theme_actions_map_to_modes() {
        assert_eq!(ThemeAction::Light.mode(), Some(ThemeMode::Light));
        assert_eq!(ThemeAction::Dark.mode(), Some(ThemeMode::Dark));
        assert_eq!(ThemeAction::System.mode(), None);
    }
}
