//! Users Page
//!
//! Card with a search box over the user table.

use gpui::{
    AnyElement, App, Context, ElementId, Entity, Focusable, IntoElement, MouseButton, ParentElement, Render, SharedString,
    Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    menu::{DropdownMenu, PopupMenu},
    v_flex,
};

use crate::components::composite::data_table::{CellValue, Column, DataTable, TableEvent, TableOptions};
use crate::components::composite::user_avatar::UserAvatar;
use crate::constants::SEARCH_INPUT_WIDTH;
use crate::domain::user::UserRecord;
use crate::features::users::controller::UsersController;
use crate::helpers::RowMenuAction;
use crate::states::{
    GridGlobalStore, RowNotice, UsersLoadState, UsersState, i18n_users, update_app_state_and_save,
};
use crate::utils::format::format_date;

/// How the table's rows follow `UsersState`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowSync {
    /// Query changed: new rows and back to the first page
    Filtered,
    /// Only the records changed: new rows, page kept
    Replaced,
    Unchanged,
}

fn row_sync(synced_revision: Option<u64>, synced_query: &str, revision: u64, query: &str) -> RowSync {
    if synced_query != query {
        RowSync::Filtered
    } else if synced_revision != Some(revision) {
        RowSync::Replaced
    } else {
        RowSync::Unchanged
    }
}

/// Users page component
pub struct UsersPage {
    users: Entity<UsersState>,
    search: Entity<InputState>,
    table: Entity<DataTable<UserRecord>>,
    /// `UsersState` revision last pushed into the table
    synced_revision: Option<u64>,
    synced_query: String,
    _subscriptions: Vec<Subscription>,
}

impl UsersPage {
    pub fn new(controller: UsersController, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let users = controller.users().clone();
        let page_size = cx.global::<GridGlobalStore>().read(cx).page_size();
        let options = TableOptions::default()
            .show_pagination(true)
            .show_page_count(true)
            .page_size(page_size)
            .loading(true);

        let table = cx.new(|cx| {
            let mut table = DataTable::new(options, window, cx);
            let columns = Self::create_columns(&controller, cx);
            table.set_columns(columns, cx);
            let on_click = controller.clone();
            table.on_row_click(move |user: &UserRecord, _, cx| {
                on_click.show_notice(RowNotice::View(user.id), cx);
            });
            table
        });

        let search = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(i18n_users(cx, "search_placeholder"))
        });

        let mut subscriptions = Vec::new();

        subscriptions.push(cx.observe(&users, |this, _users, cx| {
            this.sync_table(cx);
        }));

        subscriptions.push(cx.subscribe(&table, |_this, _table, event: &TableEvent, cx| match *event {
            TableEvent::PageSizeChanged(size) => {
                update_app_state_and_save(cx, "save_page_size", move |state, _cx| {
                    state.set_page_size(size);
                });
            }
        }));

        let search_controller = controller.clone();
        subscriptions.push(cx.subscribe(&search, move |_this, state, event: &InputEvent, cx| {
            if matches!(event, InputEvent::Change) {
                let query = state.read(cx).value().to_string();
                search_controller.set_query(query, cx);
            }
        }));

        let mut page = Self {
            users,
            search,
            table,
            synced_revision: None,
            synced_query: String::new(),
            _subscriptions: subscriptions,
        };
        page.sync_table(cx);
        page
    }

    /// Move keyboard focus to the search box
    pub fn focus_search(&self, window: &mut Window, cx: &mut App) {
        self.search.read(cx).focus_handle(cx).focus(window);
    }

    /// Push filtered records and the loading flag into the table
    fn sync_table(&mut self, cx: &mut Context<Self>) {
        let (revision, loading, query, rows) = {
            let state = self.users.read(cx);
            (
                state.revision(),
                state.is_loading(),
                state.query().to_string(),
                state.filtered(),
            )
        };

        let sync = row_sync(self.synced_revision, &self.synced_query, revision, &query);
        let empty_message = (!query.is_empty()).then(|| i18n_users(cx, "no_match"));

        self.table.update(cx, |table, cx| {
            table.set_loading(loading, cx);
            table.set_empty_message(empty_message, cx);
            match sync {
                RowSync::Filtered => table.set_filtered_rows(rows, cx),
                RowSync::Replaced => table.set_rows(rows, cx),
                RowSync::Unchanged => {}
            }
        });

        self.synced_revision = Some(revision);
        self.synced_query = query;
    }

    fn create_columns(controller: &UsersController, cx: &App) -> Vec<Column<UserRecord>> {
        let unknown = i18n_users(cx, "unknown_user");
        let actions = controller.clone();

        vec![
            Column::accessor("user", i18n_users(cx, "col_user"), |user: &UserRecord| {
                CellValue::text(user.name().map(str::to_string))
            })
            .cell(move |user, _, _| {
                UserAvatar::new(user.display_name(&unknown).to_string()).into_any_element()
            })
            .flex_width(1.4)
            .sortable(),
            Column::accessor("email", i18n_users(cx, "col_email"), |user: &UserRecord| {
                CellValue::text(user.email().map(str::to_lowercase))
            })
            .flex_width(1.4)
            .sortable(),
            Column::accessor("modified", i18n_users(cx, "col_modified"), |user: &UserRecord| {
                user.modified().map_or(CellValue::Empty, CellValue::from_iso)
            })
            .cell(|user, _, _| {
                Label::new(format_date(user.modified().unwrap_or_default(), false))
                    .text_sm()
                    .into_any_element()
            })
            .fixed_width(130.0)
            .sortable(),
            Column::display("actions", i18n_users(cx, "col_actions"), move |user: &UserRecord, _, cx| {
                Self::render_actions(user.id, &actions, cx)
            })
            .header(|_, cx| {
                h_flex()
                    .w_full()
                    .justify_center()
                    .child(i18n_users(cx, "col_actions"))
                    .into_any_element()
            })
            .fixed_width(280.0),
        ]
    }

    fn render_actions(id: i64, controller: &UsersController, cx: &App) -> AnyElement {
        let view = controller.clone();
        let delete = controller.clone();

        h_flex()
            .gap_1()
            // Button clicks must not reach the row's click handler
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .child(
                Button::new(row_element_id("view", id))
                    .ghost()
                    .small()
                    .icon(Icon::new(IconName::Eye).text_color(cx.theme().primary))
                    .label(i18n_users(cx, "view"))
                    .on_click(move |_, _, cx| view.show_notice(RowNotice::View(id), cx)),
            )
            .child(
                Button::new(row_element_id("delete", id))
                    .ghost()
                    .small()
                    .icon(Icon::new(IconName::Delete).text_color(cx.theme().danger))
                    .label(i18n_users(cx, "delete"))
                    .on_click(move |_, _, cx| delete.show_notice(RowNotice::Delete(id), cx)),
            )
            .child(
                Button::new(row_element_id("more", id))
                    .ghost()
                    .small()
                    .icon(IconName::Ellipsis)
                    .tooltip(i18n_users(cx, "more"))
                    .dropdown_menu(|menu, window, cx| Self::render_row_menu(menu, window, cx)),
            )
            .into_any_element()
    }

    fn render_row_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        menu.menu(i18n_users(cx, "menu_new"), Box::new(RowMenuAction::New))
            .menu(i18n_users(cx, "menu_new_window"), Box::new(RowMenuAction::NewWindow))
            .menu_with_disabled(
                i18n_users(cx, "menu_open_file"),
                Box::new(RowMenuAction::OpenFile),
                true,
            )
            .menu(i18n_users(cx, "menu_open_folder"), Box::new(RowMenuAction::OpenFolder))
    }
}

fn row_element_id(kind: &str, id: i64) -> ElementId {
    ElementId::Name(SharedString::from(format!("user-{kind}-{id}")))
}

impl Render for UsersPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let load_error = match self.users.read(cx).load_state() {
            UsersLoadState::Error(_) => Some(i18n_users(cx, "load_failed")),
            _ => None,
        };

        v_flex()
            .id("users-page")
            .size_full()
            .p_6()
            .overflow_y_scroll()
            .child(
                v_flex()
                    .w_full()
                    .p_4()
                    .gap_4()
                    .bg(cx.theme().background)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .shadow_sm()
                    .child(
                        h_flex()
                            .w_full()
                            .gap_4()
                            .items_center()
                            .justify_between()
                            .child(
                                Label::new(i18n_users(cx, "title"))
                                    .text_lg()
                                    .font_weight(gpui::FontWeight::SEMIBOLD),
                            )
                            .child(
                                div().w(px(SEARCH_INPUT_WIDTH)).child(
                                    Input::new(&self.search)
                                        .prefix(Icon::new(IconName::Search).small())
                                        .cleanable(true),
                                ),
                            ),
                    )
                    .when_some(load_error, |el, message| {
                        el.child(Label::new(message).text_sm().text_color(cx.theme().danger))
                    })
                    .child(self.table.clone()),
            )
    }
}
