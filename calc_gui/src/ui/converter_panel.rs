//! Converter Panel (Right)
//!
//! Displays:
//! - Category picker and from/to unit pickers
//! - Value input (converts while typing when auto mode is on)
//! - Result line with Convert, Auto and Copy buttons
//! - Category note

use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{App, Message};

/// Render the converter panel
pub fn view(app: &App) -> Element<'_, Message> {
    let converter = &app.converter;
    let category = converter.category();

    let category_row = row![
        text("Category:").size(11).width(Length::Fixed(70.0)),
        pick_list(
            &app.category_names[..],
            Some(category.name()),
            Message::CategorySelected
        )
        .width(Length::Fill)
        .text_size(12),
    ]
    .align_y(Alignment::Center);

    let units_row = row![
        pick_list(
            category.options(),
            Some(converter.from_unit().option()),
            Message::FromUnitSelected
        )
        .width(Length::Fill)
        .text_size(12),
        text("→").size(14),
        pick_list(
            category.options(),
            Some(converter.to_unit().option()),
            Message::ToUnitSelected
        )
        .width(Length::Fill)
        .text_size(12),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let input = text_input("Enter a value", converter.input())
        .on_input(Message::InputChanged)
        .on_submit(Message::ConvertPressed)
        .padding(6)
        .size(14);

    let result = container(text(converter.result().text()).size(22))
        .width(Length::Fill)
        .padding(10)
        .style(container::bordered_box);

    let auto_label = if converter.auto_convert() { "Auto: On" } else { "Auto: Off" };
    let buttons = row![
        button(text("Convert").size(11))
            .on_press(Message::ConvertPressed)
            .padding(Padding::from([4, 8]))
            .style(button::primary),
        button(text(auto_label).size(11))
            .on_press(Message::ToggleAuto)
            .padding(Padding::from([4, 8]))
            .style(if converter.auto_convert() { button::success } else { button::secondary }),
        Space::new().width(Length::Fill),
        button(text("Copy result").size(11))
            .on_press(Message::CopyResult)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let content = column![
        text("Unit Converter").size(14),
        Space::new().height(4),
        category_row,
        units_row,
        input,
        result,
        buttons,
        text(category.note()).size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(8);

    container(content)
        .width(Length::FillPortion(55))
        .padding(8)
        .style(container::bordered_box)
        .into()
}
