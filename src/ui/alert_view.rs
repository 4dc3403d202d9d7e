// SPDX-License-Identifier: MPL-2.0
//! Bottom-sheet confirmation alert view.

use crate::overlay::alert::AlertContent;
use crate::overlay::AlertController;
use crate::ui::theme::Palette;
use iced::border::Radius;
use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{alignment, Border, Color, Element, Length, Theme};

/// Messages emitted by the alert view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Confirm,
    Cancel,
    /// The dimmed backdrop was tapped.
    Backdrop,
}

/// Estimates the rendered sheet height for the given content.
///
/// The headless controller needs the height for translation and release
/// decisions before layout has happened; hosts report this estimate via
/// [`AlertController::set_sheet_height`] right after showing.
#[must_use]
pub fn estimated_sheet_height(content: &AlertContent) -> f32 {
    let handle = 32.0;
    let title = 40.0;
    let description = if content.description.is_some() {
        34.0
    } else {
        0.0
    };
    let buttons = 45.0;
    let padding = 24.0;
    handle + title + description + buttons + padding
}

/// Renders the alert overlay, or `None` while it is hidden.
pub fn view<'a>(alert: &'a AlertController, palette: &Palette) -> Option<Element<'a, Message>> {
    if !alert.is_visible() {
        return None;
    }

    let content = alert.content();

    let backdrop_color = palette.backdrop(alert.backdrop_opacity());
    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(backdrop_color.into()),
                ..container::Style::default()
            }),
    )
    .on_press(Message::Backdrop);

    let handle_color = Color {
        a: 0.4,
        ..palette.light_text
    };
    let handle = container(
        Space::new()
            .width(Length::Fixed(40.0))
            .height(Length::Fixed(4.0)),
    )
    .style(
        move |_theme: &Theme| container::Style {
            background: Some(handle_color.into()),
            border: Border {
                radius: 2.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        },
    );

    let title_color = palette.dark_text;
    let mut body = column![
        container(handle).width(Length::Fill).center_x(Length::Fill),
        text(content.title.as_str())
            .size(16)
            .style(move |_theme: &Theme| text::Style {
                color: Some(title_color),
            })
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
    ]
    .spacing(14)
    .width(Length::Fill);

    if let Some(description) = &content.description {
        let description_color = palette.light_text;
        body = body.push(
            text(description.as_str())
                .size(14)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(description_color),
                })
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill),
        );
    }

    let cancel_background = palette.light_background;
    let cancel_text_color = palette.dark_text;
    let cancel = button(
        text(content.cancel_text.as_str())
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
    )
    .on_press(Message::Cancel)
    .width(Length::Fill)
    .height(Length::Fixed(45.0))
    .style(move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(cancel_background.into()),
        text_color: cancel_text_color,
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    });

    let confirm_background = palette.primary;
    let confirm = button(
        text(content.confirm_text.as_str())
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
    )
    .on_press(Message::Confirm)
    .width(Length::Fill)
    .height(Length::Fixed(45.0))
    .style(move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(confirm_background.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    });

    body = body.push(row![cancel, confirm].spacing(10).padding([0, 30]));

    let visible_height = (alert.sheet_height() - alert.translation()).max(0.0);
    let sheet_background = palette.background;
    let sheet = container(body)
        .width(Length::Fill)
        .height(Length::Fixed(visible_height))
        .padding([14, 0])
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(sheet_background.into()),
            border: Border {
                radius: Radius {
                    top_left: 30.0,
                    top_right: 30.0,
                    bottom_right: 0.0,
                    bottom_left: 0.0,
                },
                ..Border::default()
            },
            ..container::Style::default()
        });

    Some(column![backdrop, sheet].into())
}
