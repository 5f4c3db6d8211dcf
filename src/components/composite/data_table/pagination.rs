//! Pagination Component
//!
//! Page navigation bar rendered under the DataTable rows.

use std::rc::Rc;

use gpui::{
    App, Corner, Entity, FocusHandle, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
    prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState},
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

use super::data_table::SetPageSize;
use super::options::TableOptions;
use super::state::{PageNav, TableState};
use crate::constants::PAGE_INPUT_WIDTH;
use crate::states::{i18n_format, i18n_table};
use crate::utils::format::format_number;

/// Navigation callback (first/previous/next/last)
pub type NavigateHandler = Rc<dyn Fn(&PageNav, &mut Window, &mut App)>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    page_index: usize,
    page_count: usize,
    page_size: usize,
    visible_rows: usize,
    total_rows: usize,
    can_previous: bool,
    can_next: bool,
    options: TableOptions,
    page_input: Option<Entity<InputState>>,
    /// Focused before the page-size menu opens so its action reaches the table
    menu_target: Option<FocusHandle>,
    on_navigate: Option<NavigateHandler>,
}

impl Pagination {
    /// Snapshot the pagination state for `total_rows` filtered rows
    pub fn new(state: &TableState, visible_rows: usize, total_rows: usize, options: TableOptions) -> Self {
        Self {
            page_index: state.page_index(),
            page_count: state.page_count(total_rows),
            page_size: state.page_size(),
            visible_rows,
            total_rows,
            can_previous: state.can_previous_page(),
            can_next: state.can_next_page(total_rows),
            options,
            page_input: None,
            menu_target: None,
            on_navigate: None,
        }
    }

    /// Input used for "Go to page"
    pub fn page_input(mut self, input: Entity<InputState>) -> Self {
        self.page_input = Some(input);
        self
    }

    pub fn on_navigate(mut self, handler: NavigateHandler) -> Self {
        self.on_navigate = Some(handler);
        self
    }

    /// Element that handles `SetPageSize`
    pub fn menu_target(mut self, focus: FocusHandle) -> Self {
        self.menu_target = Some(focus);
        self
    }

    fn nav_button(
        &self,
        id: &'static str,
        icon: IconName,
        tooltip: SharedString,
        nav: PageNav,
        enabled: bool,
    ) -> Button {
        let handler = self.on_navigate.clone();
        Button::new(id)
            .ghost()
            .small()
            .icon(icon)
            .tooltip(tooltip)
            .disabled(!enabled)
            .on_click(move |_, window, cx| {
                if let Some(handler) = &handler {
                    handler(&nav, window, cx);
                }
            })
    }

    fn render_nav(&self, cx: &App) -> impl IntoElement {
        h_flex()
            .gap_1()
            .child(self.nav_button(
                "page-first",
                IconName::ArrowLeft,
                i18n_table(cx, "first_page"),
                PageNav::First,
                self.can_previous,
            ))
            .child(self.nav_button(
                "page-previous",
                IconName::ChevronLeft,
                i18n_table(cx, "previous_page"),
                PageNav::Previous,
                self.can_previous,
            ))
            .child(self.nav_button(
                "page-next",
                IconName::ChevronRight,
                i18n_table(cx, "next_page"),
                PageNav::Next,
                self.can_next,
            ))
            .child(self.nav_button(
                "page-last",
                IconName::ArrowRight,
                i18n_table(cx, "last_page"),
                PageNav::Last,
                self.can_next,
            ))
    }

    fn render_page_selector(&self, cx: &App) -> impl IntoElement {
        let current = format_number(self.page_index + 1);
        let total = format_number(self.page_count);

        h_flex()
            .gap_2()
            .items_center()
            .child(Label::new(i18n_table(cx, "page")).text_sm())
            .child(
                Label::new(i18n_format(
                    cx,
                    "table.page_of",
                    &[("current", current.as_str()), ("total", total.as_str())],
                ))
                .text_sm()
                .font_weight(gpui::FontWeight::SEMIBOLD),
            )
            .child(
                Label::new(i18n_table(cx, "go_to_page"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .when_some(self.page_input.clone(), |el, input| {
                el.child(page_input_box(Input::new(&input).small()))
            })
    }

    fn render_page_length(&self, cx: &App) -> impl IntoElement {
        let entries = page_size_entries(&self.options, self.page_size);
        let target = self.menu_target.clone();

        gpui::div()
            .capture_any_mouse_down(move |_, window, _| {
                if let Some(target) = &target {
                    target.focus(window);
                }
            })
            .child(
                Button::new("page-size")
                    .ghost()
                    .small()
                    .label(show_size_label(cx, self.page_size))
                    .icon(IconName::ChevronDown)
                    .dropdown_menu(move |menu, window, cx| render_page_size_menu(menu, &entries, window, cx))
                    .anchor(Corner::BottomLeft),
            )
    }
}

/// Offered page sizes, each flagged when it is the current one
pub fn page_size_entries(options: &TableOptions, current: usize) -> Vec<(usize, bool)> {
    options
        .page_size_options()
        .into_iter()
        .map(|size| (size, size == current))
        .collect()
}

fn show_size_label(cx: &App, size: usize) -> SharedString {
    let size_text = size.to_string();
    i18n_format(cx, "table.show_size", &[("size", size_text.as_str())])
}

fn render_page_size_menu(menu: PopupMenu, entries: &[(usize, bool)], _window: &mut Window, cx: &App) -> PopupMenu {
    entries.iter().fold(menu, |menu, &(size, checked)| {
        menu.menu_with_check(show_size_label(cx, size), checked, Box::new(SetPageSize { size }))
    })
}

fn page_input_box(input: Input) -> impl IntoElement {
    gpui::div().w(px(PAGE_INPUT_WIDTH)).child(input)
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let visible = format_number(self.visible_rows);
        let total = format_number(self.total_rows);
        let showing = i18n_format(
            cx,
            "table.showing_rows",
            &[("visible", visible.as_str()), ("total", total.as_str())],
        );

        h_flex()
            .w_full()
            .pt_3()
            .gap_4()
            .flex_wrap()
            .items_center()
            .justify_between()
            .child(
                h_flex()
                    .gap_3()
                    .items_center()
                    .when(self.options.show_page_count, |el| {
                        el.child(
                            gpui::div()
                                .px_2()
                                .py_1()
                                .rounded_md()
                                .bg(cx.theme().secondary)
                                .child(Label::new(showing).text_sm()),
                        )
                    })
                    .when(self.options.show_pagination, |el| el.child(self.render_nav(cx))),
            )
            .when(self.options.show_page_selector, |el| {
                el.child(self.render_page_selector(cx))
            })
            .when(self.options.show_page_length, |el| {
                el.child(self.render_page_length(cx))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_size_is_checked() {
        let entries = page_size_entries(&TableOptions::default(), 20);
        assert_eq!(entries, vec![(5, false), (10, false), (20, true), (50, false)]);
    }

    #[test]
    fn caller_default_appears_in_menu() {
        let options = TableOptions::default().page_size(25);
        let entries = page_size_entries(&options, 25);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries.iter().filter(|(_, checked)| *checked).count(), 1);
        assert!(entries.contains(&(25, true)));
    }
}
