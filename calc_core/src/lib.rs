//! # calc_core - Calculator & Unit Converter Engine
//!
//! `calc_core` holds the state machines behind the Tally widget: a
//! four-function calculator driven one key at a time, and a unit converter
//! backed by a fixed category table. Front-ends (the iced window in
//! `calc_gui`, the terminal in `calc_cli`) own one instance of each and feed
//! them commands.
//!
//! ## Design Philosophy
//!
//! - **Owned state**: no globals; each front-end constructs its own widgets
//! - **JSON-First**: views, commands, errors and settings serialize cleanly
//! - **Rendered failures**: bad input shows up as a sentinel, not a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Calculator, CalculatorCommand, Converter, ConverterCommand};
//!
//! let mut calc = Calculator::new();
//! for key in ["7", "×", "6", "="] {
//!     calc.apply(key.parse::<CalculatorCommand>().unwrap());
//! }
//! assert_eq!(calc.display(), "42");
//!
//! let mut converter = Converter::new("distance").unwrap();
//! converter.apply(ConverterCommand::SetFromUnit("km".into())).unwrap();
//! converter.apply(ConverterCommand::SetToUnit("m".into())).unwrap();
//! let view = converter.apply(ConverterCommand::SetInput("1.5".into())).unwrap();
//! assert_eq!(view.result_text, "1500 m");
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Input state machine and arithmetic
//! - [`converter`] - Converter widget state and result sentinels
//! - [`units`] - Static category/unit table
//! - [`commands`] - Command surface and keyboard map
//! - [`format`] - Number formatting shared by both widgets
//! - [`settings`] - Front-end preferences file
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod commands;
pub mod converter;
pub mod errors;
pub mod format;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculator::{Calculator, CalculatorView, Digit, Operator};
pub use commands::{CalculatorCommand, ConverterCommand};
pub use converter::{ConversionOutput, Converter, ConverterView};
pub use errors::{CalcError, CalcResult};
pub use settings::WidgetSettings;
