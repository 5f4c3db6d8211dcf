//! Workspace - Main Shell
//!
//! Holds the title bar, the users page, the footer line and the row-action modal.

use gpui::{
    App, Context, Entity, FocusHandle, Focusable, IntoElement, ParentElement, Render, Styled, Subscription,
    Window, div, prelude::*,
};
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

use crate::components::composite::{Modal, UserAvatar};
use crate::constants::NOTICE_AVATAR_SIZE;
use crate::features::users::{UsersController, UsersPage};
use crate::helpers::MenuAction;
use crate::states::{RowNotice, UsersState, i18n_format, i18n_shell, i18n_users};
use crate::views::GridTitleBar;

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<GridTitleBar>,
    users: Entity<UsersState>,
    controller: UsersController,
    page: Entity<UsersPage>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| GridTitleBar::new(window, cx));

        let users = cx.new(|_| UsersState::new());
        let controller = UsersController::new(users.clone());
        let page = cx.new(|cx| UsersPage::new(controller.clone(), window, cx));

        // Notice changes show or hide the modal
        let subscriptions = vec![cx.observe(&users, |_this, _users, cx| cx.notify())];

        controller.load(cx);

        // Window-level shortcuts dispatch through the focused path
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            title_bar,
            users,
            controller,
            page,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    fn on_menu_action(&mut self, action: &MenuAction, window: &mut Window, cx: &mut Context<Self>) {
        if *action == MenuAction::FocusSearch {
            self.page.update(cx, |page, cx| page.focus_search(window, cx));
        } else {
            cx.propagate();
        }
    }

    fn render_notice(&self, notice: RowNotice, cx: &App) -> Modal {
        let title = match notice {
            RowNotice::View(_) => i18n_users(cx, "view_title"),
            RowNotice::Delete(_) => i18n_users(cx, "delete_title"),
        };
        let id = notice.id().to_string();
        let controller = self.controller.clone();
        let name = self
            .users
            .read(cx)
            .find(notice.id())
            .map(|user| user.display_name(&i18n_users(cx, "unknown_user")).to_string());

        Modal::new(title)
            .when_some(name, |modal, name| modal.child(UserAvatar::new(name).size(NOTICE_AVATAR_SIZE)))
            .child(Label::new(i18n_format(cx, "users.record_id", &[("id", id.as_str())])))
            .confirm_label(i18n_users(cx, "ok"))
            .on_close(move |_window, cx| controller.dismiss_notice(cx))
    }
}

impl Focusable for Workspace {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notice = self.users.read(cx).notice();

        v_flex()
            .id("workspace")
            .key_context("Workspace")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_menu_action))
            .relative()
            .size_full()
            .bg(cx.theme().secondary)
            .child(self.title_bar.clone())
            .child(div().flex_1().overflow_hidden().child(self.page.clone()))
            .child(
                h_flex().justify_center().py_2().child(
                    Label::new(i18n_shell(cx, "footer"))
                        .text_xs()
                        .text_color(cx.theme().muted_foreground),
                ),
            )
            .when_some(notice, |el, notice| el.child(self.render_notice(notice, cx)))
    }
}
