// SPDX-License-Identifier: MPL-2.0
//! Toast view.
//!
//! The toast layer emits no messages and captures no input; it is a purely
//! visual pill whose colors fade with the controller's opacity.

use crate::config::defaults::TOAST_BOTTOM_OFFSET;
use crate::overlay::ToastController;
use crate::ui::theme::Palette;
use iced::widget::{column, container, text, Space};
use iced::{alignment, Border, Color, Element, Length, Theme};

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Renders the toast overlay, or `None` while it is hidden.
pub fn view<'a, Message: 'a>(
    toast: &'a ToastController,
    palette: &Palette,
) -> Option<Element<'a, Message>> {
    if !toast.is_visible() {
        return None;
    }

    let opacity = toast.opacity();
    let tone = toast.content().tone;
    let background = faded(palette.toast_background(tone), opacity);
    let text_color = faded(palette.toast_text(tone), opacity);

    let pill = container(
        text(toast.content().text.as_str())
            .size(14)
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            })
            .align_x(alignment::Horizontal::Center),
    )
    .padding([10, 30])
    .style(move |_theme: &Theme| container::Style {
        background: Some(background.into()),
        border: Border {
            radius: 30.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    Some(
        column![
            Space::new().width(Length::Fill).height(Length::Fill),
            container(pill).width(Length::Fill).center_x(Length::Fill),
            Space::new()
                .width(Length::Fill)
                .height(Length::Fixed(TOAST_BOTTOM_OFFSET)),
        ]
        .into(),
    )
}
