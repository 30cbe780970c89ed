//! Header row

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Render the application header with title
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Tally").size(28),
        Space::new().width(Length::Fill),
        text("Calculator & Unit Converter").size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}
