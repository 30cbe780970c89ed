//! Status Bar (Bottom)
//!
//! Displays:
//! - Application version
//! - The current toast message, if any

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(toast: Option<&str>) -> Element<'_, Message> {
    row![
        text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(toast.unwrap_or("")).size(11),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
