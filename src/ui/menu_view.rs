// SPDX-License-Identifier: MPL-2.0
//! Bottom-sheet menu view.

use crate::config::defaults::{MENU_INLINE_RENDER_LIMIT, MENU_ITEM_HEIGHT};
use crate::overlay::MenuController;
use crate::ui::theme::Palette;
use iced::border::Radius;
use iced::widget::{button, column, container, mouse_area, scrollable, text, Column, Space};
use iced::{alignment, Border, Color, Element, Length, Theme};

/// Messages emitted by the menu view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A row was tapped.
    Select(usize),
    /// The dimmed backdrop was tapped.
    Backdrop,
}

/// Renders the menu overlay, or `None` while it is hidden.
pub fn view<'a>(menu: &'a MenuController, palette: &Palette) -> Option<Element<'a, Message>> {
    if !menu.is_visible() {
        return None;
    }

    let backdrop_color = palette.backdrop(menu.backdrop_opacity());
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

    let mut rows = Column::new().width(Length::Fill);
    for (index, item) in menu.items().iter().enumerate() {
        let color = palette.tone_color(item.tone);
        let row = button(
            text(item.title.as_str())
                .size(16)
                .style(move |_theme: &Theme| text::Style { color: Some(color) })
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill),
        )
        .on_press(Message::Select(index))
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(|_theme: &Theme, _status: button::Status| button::Style::default());
        rows = rows.push(row);
    }

    let list: Element<'_, Message> = if menu.items().len() > MENU_INLINE_RENDER_LIMIT {
        scrollable(rows).height(Length::Fill).into()
    } else {
        rows.into()
    };

    // The sheet is bottom-anchored; sliding is rendered by clipping its
    // visible height down as the translation grows.
    let visible_height = (menu.sheet_height() - menu.translation()).max(0.0);
    let sheet_background = palette.background;
    let sheet = container(
        column![
            container(handle).width(Length::Fill).center_x(Length::Fill),
            list
        ]
        .spacing(14),
    )
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
