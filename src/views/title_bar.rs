//! Title Bar Component
//!
//! Custom title bar with the app name and the theme menu.

use crate::states::{GridGlobalStore, ThemeAction, i18n_shell};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct GridTitleBar;

impl GridTitleBar {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let theme = cx.global::<GridGlobalStore>().read(cx).theme();

        menu.label(i18n_shell(cx, "theme"))
            .menu_with_check(
                i18n_shell(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_shell(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_shell(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }
}

impl Render for GridTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_shell(cx, "app_title")).text_sm()),
            )
            .child(
                h_flex().items_center().justify_end().px_2().gap_2().mr_2().child(
                    Button::new("settings")
                        .tooltip(i18n_shell(cx, "settings"))
                        .icon(IconName::Settings2)
                        .small()
                        .ghost()
                        .dropdown_menu(move |menu, window, cx| Self::render_settings_menu(menu, window, cx))
                        .anchor(Corner::TopRight),
                ),
            )
    }
}
