//! # Tally GUI Application
//!
//! Window front-end for the calculator and unit converter, built with Iced
//! (native and WASM).
//!
//! The app owns one [`Calculator`] and one [`Converter`]; every keypad
//! click, key press and converter edit becomes a command applied to one of
//! them, and the view is rebuilt from their state.
//!
//! Keyboard: digits, `.`, `+ - * /`, `%`, Enter (=), Backspace, Escape (C).
//! Keys typed into the converter's input field are left to the field.

mod ui;

use std::path::PathBuf;
use std::time::Duration;

use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::time::Instant;
use iced::widget::{column, container, row, Space};
use iced::{Element, Length, Subscription, Task};

use calc_core::settings::{self, WidgetSettings, SETTINGS_ENV_VAR};
use calc_core::units::{self, UnitOption};
use calc_core::{Calculator, CalculatorCommand, Converter, ConverterCommand};

/// How often the toast timer checks for expiry
const TOAST_TICK: Duration = Duration::from_millis(200);

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let settings = load_settings();

    iced::application(move || App::new(&settings), App::update, App::view)
        .title("Tally")
        .subscription(App::subscription)
        .window_size(iced::Size::new(760.0, 520.0))
        .run()
}

/// Settings come from the file named by `CALC_SETTINGS`, if set.
fn load_settings() -> WidgetSettings {
    let path = std::env::var_os(SETTINGS_ENV_VAR).map(PathBuf::from);
    settings::load_or_default(path.as_deref())
}

/// A short-lived notification shown in the status bar.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    expires_at: Instant,
}

/// Application state
pub struct App {
    pub calculator: Calculator,
    pub converter: Converter,
    pub category_names: Vec<&'static str>,
    pub toast: Option<Toast>,
    toast_duration: Duration,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Calculator
    Calculator(CalculatorCommand),

    // Converter
    CategorySelected(&'static str),
    FromUnitSelected(UnitOption),
    ToUnitSelected(UnitOption),
    InputChanged(String),
    ConvertPressed,
    ToggleAuto,
    CopyResult,

    // Toast timer
    Tick(Instant),
}

impl App {
    fn new(settings: &WidgetSettings) -> (Self, Task<Message>) {
        let converter = settings.converter().unwrap_or_else(|e| {
            log::warn!("falling back to default converter: {}", e);
            Converter::default()
        });

        let app = App {
            calculator: Calculator::new(),
            converter,
            category_names: units::category_names(),
            toast: None,
            toast_duration: settings.toast_duration(),
        };
        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Calculator(command) => {
                self.calculator.apply(command);
            }
            Message::CategorySelected(name) => {
                self.apply_converter(ConverterCommand::SetCategory(name.to_string()));
            }
            Message::FromUnitSelected(option) => {
                self.apply_converter(ConverterCommand::SetFromUnit(option.symbol.to_string()));
            }
            Message::ToUnitSelected(option) => {
                self.apply_converter(ConverterCommand::SetToUnit(option.symbol.to_string()));
            }
            Message::InputChanged(text) => {
                self.apply_converter(ConverterCommand::SetInput(text));
            }
            Message::ConvertPressed => {
                self.apply_converter(ConverterCommand::Convert);
            }
            Message::ToggleAuto => {
                self.apply_converter(ConverterCommand::ToggleAuto);
            }
            Message::CopyResult => {
                let text = self.converter.result().text().to_string();
                return self.copy_result(text);
            }
            Message::Tick(now) => {
                if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
                    self.toast = None;
                }
            }
        }
        Task::none()
    }

    fn apply_converter(&mut self, command: ConverterCommand) {
        if let Err(e) = self.converter.apply(command) {
            log::warn!("converter command rejected: {}", e);
            self.show_toast(e.to_string());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn copy_result(&mut self, text: String) -> Task<Message> {
        let outcome = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        self.show_toast(copy_notice(outcome));
        Task::none()
    }

    /// The browser clipboard write reports nothing back, so the toast
    /// always claims success here.
    #[cfg(target_arch = "wasm32")]
    fn copy_result(&mut self, text: String) -> Task<Message> {
        self.show_toast(copy_notice(Ok::<(), String>(())));
        iced::clipboard::write(text)
    }

    fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + self.toast_duration,
        });
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::calculator_panel::view(&self.calculator),
            Space::new().width(16),
            ui::converter_panel::view(self),
        ];

        let content = column![
            ui::toolbar::view_header(),
            panels,
            Space::new().height(Length::Fill),
            ui::status_bar::view_status_bar(self.toast.as_ref().map(|t| t.message.as_str())),
        ]
        .spacing(10)
        .padding(12);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = event::listen_with(handle_event);

        if self.toast.is_some() {
            Subscription::batch([keys, iced::time::every(TOAST_TICK).map(Message::Tick)])
        } else {
            keys
        }
    }
}

/// Toast text for a clipboard write.
fn copy_notice<E: std::fmt::Display>(outcome: Result<(), E>) -> &'static str {
    match outcome {
        Ok(()) => "Result copied",
        Err(e) => {
            log::warn!("clipboard write failed: {}", e);
            "Unable to copy"
        }
    }
}

/// Translate an uncaptured key press into a calculator command.
fn handle_event(event: Event, status: event::Status, _window: iced::window::Id) -> Option<Message> {
    if matches!(status, event::Status::Captured) {
        return None;
    }

    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    key_name(&key)
        .and_then(CalculatorCommand::from_key)
        .map(Message::Calculator)
}

/// Name of a key as the calculator's key map spells it.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(Named::Enter) => Some("Enter"),
        Key::Named(Named::Backspace) => Some("Backspace"),
        Key::Named(Named::Escape) => Some("Escape"),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::ConversionOutput;

    fn app() -> App {
        App::new(&WidgetSettings::default()).0
    }

    #[test]
    fn test_key_names() {
        assert_eq!(key_name(&Key::Named(Named::Enter)), Some("Enter"));
        assert_eq!(key_name(&Key::Character("7".into())), Some("7"));
        assert_eq!(key_name(&Key::Named(Named::Tab)), None);
    }

    #[test]
    fn test_keypad_messages_drive_calculator() {
        let mut app = app();
        for key in ["2", ".", "5", "+", "1", ".", "5", "Enter"] {
            let command = CalculatorCommand::from_key(key).unwrap();
            let _ = app.update(Message::Calculator(command));
        }
        assert_eq!(app.calculator.display(), "4");
    }

    #[test]
    fn test_converter_messages() {
        let mut app = app();
        let _ = app.update(Message::CategorySelected("temperature"));
        let _ = app.update(Message::InputChanged("100".to_string()));
        assert_eq!(
            app.converter.result(),
            &ConversionOutput::Value("212 F".to_string())
        );

        let kelvin = units::category("temperature").unwrap().unit("K").unwrap().option();
        let _ = app.update(Message::ToUnitSelected(kelvin));
        assert_eq!(app.converter.result().text(), "373.15 K");
    }

    #[test]
    fn test_copy_notice() {
        assert_eq!(copy_notice(Ok::<(), String>(())), "Result copied");
        assert_eq!(copy_notice(Err("no display server")), "Unable to copy");
    }

    #[test]
    fn test_copy_shows_toast_until_expiry() {
        let mut app = app();
        let _ = app.update(Message::CopyResult);
        // Headless runs have no clipboard, so either notice is fine here.
        let message = app.toast.as_ref().map(|t| t.message.clone());
        assert!(matches!(
            message.as_deref(),
            Some("Result copied") | Some("Unable to copy")
        ));

        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.toast.is_some());

        let later = Instant::now() + Duration::from_secs(60);
        let _ = app.update(Message::Tick(later));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_rejected_unit_shows_toast() {
        let mut app = app();
        let pounds = units::category("weight").unwrap().unit("lb").unwrap().option();
        let _ = app.update(Message::FromUnitSelected(pounds));
        assert_eq!(app.converter.from_unit().symbol(), "m");
        assert!(app.toast.is_some());
    }
}
