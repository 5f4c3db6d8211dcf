//! Modal Component
//!
//! Centered dialog over a dimmed backdrop, used for row action notices.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, IntoElement, MouseButton, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

type CloseHandler = Rc<dyn Fn(&mut Window, &mut App)>;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    confirm_label: Option<SharedString>,
    on_close: Option<CloseHandler>,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            confirm_label: None,
            on_close: None,
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add a footer button that closes the modal
    pub fn confirm_label(mut self, label: impl Into<SharedString>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Called by the close button, the footer button and backdrop clicks
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

fn close_listener(handler: &Option<CloseHandler>) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
    let handler = handler.clone();
    move |_, window, cx| {
        if let Some(handler) = &handler {
            handler(window, cx);
        }
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let backdrop_close = self.on_close.clone();

        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .bg(gpui::black().opacity(0.45))
            .flex()
            .items_center()
            .justify_center()
            .on_click(move |_, window, cx| {
                if let Some(handler) = &backdrop_close {
                    handler(window, cx);
                }
            })
            .child(
                v_flex()
                    .id("modal-dialog")
                    .min_w(px(360.0))
                    .max_w(px(560.0))
                    .bg(cx.theme().background)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .shadow_lg()
                    // Clicks inside the dialog never reach the backdrop
                    .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
                    .child(
                        h_flex()
                            .px_5()
                            .py_3()
                            .justify_between()
                            .items_center()
                            .border_b_1()
                            .border_color(cx.theme().border)
                            .child(
                                Label::new(self.title)
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(cx.theme().foreground),
                            )
                            .child(
                                Button::new("modal-close")
                                    .ghost()
                                    .small()
                                    .icon(IconName::Close)
                                    .on_click(close_listener(&self.on_close)),
                            ),
                    )
                    .child(v_flex().px_5().py_4().gap_3().children(self.children))
                    .when_some(self.confirm_label, |el, label| {
                        el.child(
                            h_flex().px_5().pb_4().justify_end().child(
                                Button::new("modal-confirm")
                                    .primary()
                                    .small()
                                    .label(label)
                                    .on_click(close_listener(&self.on_close)),
                            ),
                        )
                    }),
            )
    }
}
