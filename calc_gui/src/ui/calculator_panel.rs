//! Calculator Panel (Left)
//!
//! Expression trail and display on top, keypad below. Every key is a
//! [`CalculatorCommand`] so clicks and key presses go through the same path.

use iced::widget::{button, column, container, text, Column, Row};
use iced::{Alignment, Element, Length, Padding};

use calc_core::{Calculator, CalculatorCommand};

use crate::Message;

/// Keypad rows, parsed with the same tokens the CLI accepts
const KEYPAD: [&str; 5] = ["C ⌫ % ÷", "7 8 9 ×", "4 5 6 −", "1 2 3 +", "0 . ="];

/// Render the calculator panel
pub fn view(calculator: &Calculator) -> Element<'_, Message> {
    let display = container(
        column![
            text(calculator.expression()).size(12).color([0.5, 0.5, 0.5]),
            text(calculator.display()).size(32),
        ]
        .align_x(Alignment::End)
        .spacing(4),
    )
    .width(Length::Fill)
    .padding(10)
    .style(container::bordered_box);

    let keypad = KEYPAD.iter().fold(Column::new().spacing(6), |keypad, row| {
        let keys = row
            .split_whitespace()
            .filter_map(|token| token.parse::<CalculatorCommand>().ok())
            .map(key_button);
        keypad.push(Row::with_children(keys).spacing(6))
    });

    container(column![display, keypad].spacing(10))
        .width(Length::FillPortion(45))
        .padding(8)
        .style(container::bordered_box)
        .into()
}

fn key_button(command: CalculatorCommand) -> Element<'static, Message> {
    let style = match command {
        CalculatorCommand::Equals | CalculatorCommand::Operator(_) => button::primary,
        CalculatorCommand::Clear => button::danger,
        _ => button::secondary,
    };

    let label = container(text(command.label()).size(18))
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center);

    button(label)
        .on_press(Message::Calculator(command))
        .width(Length::Fill)
        .padding(Padding::from([10, 0]))
        .style(style)
        .into()
}
