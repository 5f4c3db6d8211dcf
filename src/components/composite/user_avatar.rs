//! User Avatar Component
//!
//! Initials circle with a per-name color, followed by the name.

use gpui::{App, Hsla, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, hsla, px};
use gpui_component::{h_flex, label::Label};

use crate::constants::AVATAR_SIZE;

#[derive(IntoElement)]
pub struct UserAvatar {
    name: SharedString,
    size: f32,
}

impl UserAvatar {
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            size: AVATAR_SIZE,
        }
    }

    /// Circle diameter in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Up to two uppercase initials from the first and last word
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Hue in `[0, 1)` derived from the name; equal names share a color
pub fn name_hue(name: &str) -> f32 {
    let hash = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    (hash % 360) as f32 / 360.0
}

fn avatar_colors(name: &str) -> (Hsla, Hsla) {
    let hue = name_hue(name);
    (hsla(hue, 0.55, 0.88, 1.0), hsla(hue, 0.6, 0.3, 1.0))
}

impl RenderOnce for UserAvatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (background, foreground) = avatar_colors(&self.name);

        h_flex()
            .gap_2()
            .items_center()
            .min_w_0()
            .child(
                div()
                    .flex_none()
                    .size(px(self.size))
                    .rounded_full()
                    .bg(background)
                    .text_color(foreground)
                    .text_size(px(self.size * 0.42))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(initials(&self.name)),
            )
            .child(Label::new(self.name).text_sm().text_ellipsis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(initials("John Smith"), "JS");
        assert_eq!(initials("Mohammed Al-Said"), "MA");
        assert_eq!(initials("Anna Maria Lopez"), "AL");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn hue_is_stable_per_name() {
        assert_eq!(name_hue("Emma Wilson"), name_hue("Emma Wilson"));
        assert!((0.0..1.0).contains(&name_hue("Priya Patel")));
        assert_eq!(name_hue(""), 0.0);
    }
}
