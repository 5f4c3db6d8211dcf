//! Empty State Component
//!
//! Illustration plus an optional message, shown when a table has no rows.

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, px};
use gpui_component::{ActiveTheme, Icon, label::Label, v_flex};

use crate::assets::CustomIconName;
use crate::constants::EMPTY_IMAGE_SIZE;
use crate::states::i18n_table;

/// Empty state component
#[derive(IntoElement, Default)]
pub struct Empty {
    message: Option<SharedString>,
    height: Option<f32>,
    width: Option<f32>,
    hide_label: bool,
}

impl Empty {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default "No data found" message
    pub fn message(mut self, message: impl Into<SharedString>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Image height in pixels
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Image width in pixels
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Show only the image
    pub fn hide_label(mut self, hide: bool) -> Self {
        self.hide_label = hide;
        self
    }

    fn image_size(&self) -> (f32, f32) {
        (
            self.width.unwrap_or(EMPTY_IMAGE_SIZE),
            self.height.unwrap_or(EMPTY_IMAGE_SIZE),
        )
    }

    /// Label text, terminated with a period; `None` when hidden
    fn caption(&self, fallback: &str) -> Option<String> {
        if self.hide_label {
            return None;
        }
        let message = self.message.as_ref().map(SharedString::as_str).unwrap_or(fallback);
        Some(format!("{message}."))
    }
}

impl RenderOnce for Empty {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (width, height) = self.image_size();
        let caption = self.caption(&i18n_table(cx, "no_data"));

        v_flex()
            .w_full()
            .py_8()
            .gap_3()
            .items_center()
            .justify_center()
            .child(
                Icon::from(CustomIconName::Empty)
                    .w(px(width))
                    .h(px(height))
                    .text_color(cx.theme().muted_foreground),
            )
            .children(
                caption.map(|text| Label::new(text).text_sm().text_color(cx.theme().muted_foreground)),
            )
    }
}
