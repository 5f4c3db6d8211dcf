//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info, warn};

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::helpers::{MenuAction, RowMenuAction, new_key_bindings};
use crate::states::{GridAppState, GridGlobalStore, ThemeAction, i18n_shell, update_app_state_and_save};

/// Run the User-Grid application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        let app_state = GridAppState::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default settings");
            GridAppState::new()
        });
        apply_theme(app_state.theme(), cx);
        info!(
            theme = ?app_state.theme(),
            page_size = app_state.page_size(),
            "App state loaded"
        );

        let app_state = cx.new(|_| app_state);
        cx.set_global(GridGlobalStore::new(app_state));

        register_actions(cx);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        open_main_window(cx);
        cx.activate(true);
    });
}

/// Apply a theme mode; `None` follows the system appearance
fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
}

fn register_actions(cx: &mut App) {
    // FocusSearch is handled by the workspace
    cx.on_action(|action: &MenuAction, cx: &mut App| {
        if *action == MenuAction::Quit {
            cx.quit();
        }
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = action.mode();
        info!(theme = ?action, "Theme changed");
        apply_theme(mode, cx);
        update_app_state_and_save(cx, "save_theme", move |state, _cx| {
            state.set_theme(mode);
        });
    });

    cx.on_action(|action: &RowMenuAction, _cx: &mut App| {
        info!(action = ?action, "Row menu item selected");
    });
}

fn open_main_window(cx: &mut App) {
    let bounds = Bounds::centered(
        None,
        gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
        cx,
    );
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
        titlebar: Some(TitlebarOptions {
            title: Some(i18n_shell(cx, "app_title")),
            appears_transparent: true,
            traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
        }),
        ..Default::default()
    };

    let result = cx.open_window(window_options, |window, cx| {
        let workspace = cx.new(|cx| Workspace::new(window, cx));
        cx.new(|cx| Root::new(workspace, window, cx))
    });
    if let Err(e) = result {
        error!(error = %e, "Failed to open main window");
    }
}
