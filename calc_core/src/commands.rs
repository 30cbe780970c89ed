//! # Command Surface
//!
//! The small set of commands an adapter (window, terminal, test) sends to
//! the two widgets. Applying a command returns a serializable view of
//! everything the adapter needs to re-render.
//!
//! Calculator commands can be built from text tokens (`"7"`, `"+"`, `"="`,
//! `"clear"`) or from keyboard key names (`"Enter"`, `"Backspace"`,
//! `"Escape"`, single characters).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::Calculator;
//! use calc_core::commands::CalculatorCommand;
//!
//! let mut calc = Calculator::new();
//! for token in ["2", ".", "5", "+", "1", ".", "5"] {
//!     calc.apply(token.parse::<CalculatorCommand>().unwrap());
//! }
//! let view = calc.apply(CalculatorCommand::Equals);
//! assert_eq!(view.display, "4");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CalculatorView, Digit, Operator};
use crate::converter::{Converter, ConverterView};
use crate::errors::{CalcError, CalcResult};

/// A single calculator key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum CalculatorCommand {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Percent,
}

impl CalculatorCommand {
    /// Map a keyboard key name to a command.
    ///
    /// Digits, `.`, `+ - * /`, `%`, `Enter`, `Backspace` and `Escape` are
    /// bound; every other key returns `None` and should be left alone.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(CalculatorCommand::Equals),
            "Backspace" => Some(CalculatorCommand::Backspace),
            "Escape" => Some(CalculatorCommand::Clear),
            "%" => Some(CalculatorCommand::Percent),
            "+" | "-" | "*" | "/" => Operator::from_symbol(key).map(CalculatorCommand::Operator),
            _ => single_char(key)
                .and_then(|c| Digit::try_from(c).ok())
                .map(CalculatorCommand::Digit),
        }
    }

    /// Label shown on the keypad button for this command
    pub fn label(&self) -> String {
        match self {
            CalculatorCommand::Digit(d) => d.to_string(),
            CalculatorCommand::Operator(op) => op.symbol().to_string(),
            CalculatorCommand::Equals => "=".to_string(),
            CalculatorCommand::Clear => "C".to_string(),
            CalculatorCommand::Backspace => "⌫".to_string(),
            CalculatorCommand::Percent => "%".to_string(),
        }
    }
}

impl FromStr for CalculatorCommand {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "=" | "enter" | "equals" => return Ok(CalculatorCommand::Equals),
            "c" | "ac" | "clear" | "esc" | "escape" => return Ok(CalculatorCommand::Clear),
            "bs" | "back" | "backspace" | "⌫" => return Ok(CalculatorCommand::Backspace),
            "%" | "percent" => return Ok(CalculatorCommand::Percent),
            _ => {}
        }

        if let Some(op) = Operator::from_symbol(token) {
            return Ok(CalculatorCommand::Operator(op));
        }

        single_char(token)
            .and_then(|c| Digit::try_from(c).ok())
            .map(CalculatorCommand::Digit)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "command",
                    token,
                    "expected a digit, '.', an operator, '=', '%', 'clear' or 'backspace'",
                )
            })
    }
}

/// Split a run of tokens into commands. A token made only of digits and
/// points ("12.5") expands into one command per character.
pub fn parse_key_sequence<'a>(tokens: impl IntoIterator<Item = &'a str>) -> CalcResult<Vec<CalculatorCommand>> {
    let mut commands = Vec::new();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if token.chars().count() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            for c in token.chars() {
                commands.push(CalculatorCommand::Digit(Digit::try_from(c)?));
            }
        } else {
            commands.push(token.parse()?);
        }
    }
    Ok(commands)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl Calculator {
    /// Apply a key press and return the new rendered state.
    pub fn apply(&mut self, command: CalculatorCommand) -> CalculatorView {
        match command {
            CalculatorCommand::Digit(d) => self.input_digit(d),
            CalculatorCommand::Operator(op) => self.handle_operator(op),
            CalculatorCommand::Equals => self.equals(),
            CalculatorCommand::Clear => self.reset_all(),
            CalculatorCommand::Backspace => self.backspace(),
            CalculatorCommand::Percent => self.apply_percent(),
        }
        self.view()
    }
}

/// A converter widget event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ConverterCommand {
    SetCategory(String),
    SetFromUnit(String),
    SetToUnit(String),
    SetInput(String),
    Convert,
    ToggleAuto,
}

impl Converter {
    /// Apply an event and return the new rendered state.
    ///
    /// Unknown category or unit names fail without changing anything;
    /// conversion failures are rendered, never returned.
    pub fn apply(&mut self, command: ConverterCommand) -> CalcResult<ConverterView> {
        match command {
            ConverterCommand::SetCategory(name) => self.set_category(&name)?,
            ConverterCommand::SetFromUnit(symbol) => self.set_from_unit(&symbol)?,
            ConverterCommand::SetToUnit(symbol) => self.set_to_unit(&symbol)?,
            ConverterCommand::SetInput(text) => self.set_input(text),
            ConverterCommand::Convert => {
                self.update_result();
            }
            ConverterCommand::ToggleAuto => {
                self.toggle_auto_convert();
            }
        }
        Ok(self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::EMPTY_EXPRESSION;
    use crate::converter::ConversionOutput;

    fn run(calc: &mut Calculator, tokens: &[&str]) -> CalculatorView {
        let mut view = calc.view();
        for command in parse_key_sequence(tokens.iter().copied()).unwrap() {
            view = calc.apply(command);
        }
        view
    }

    #[test]
    fn test_decimal_addition_scenario() {
        let mut calc = Calculator::new();
        let view = run(&mut calc, &["2", ".", "5", "+", "1", ".", "5", "="]);
        assert_eq!(view.display, "4");
        assert_eq!(view.expression, "");
    }

    #[test]
    fn test_divide_by_zero_scenario() {
        let mut calc = Calculator::new();
        let view = run(&mut calc, &["5", "/", "0", "="]);
        assert_eq!(view.display, "0");
        assert_eq!(view.expression, EMPTY_EXPRESSION);
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_multi_digit_tokens() {
        let mut calc = Calculator::new();
        let view = run(&mut calc, &["12.5", "×", "4", "="]);
        assert_eq!(view.display, "50");
    }

    #[test]
    fn test_percent_and_backspace_tokens() {
        let mut calc = Calculator::new();
        let view = run(&mut calc, &["250", "%"]);
        assert_eq!(view.display, "2.5");
        let view = run(&mut calc, &["backspace"]);
        assert_eq!(view.display, "2.");
        let view = run(&mut calc, &["clear"]);
        assert_eq!(view.display, "0");
    }

    #[test]
    fn test_backspace_after_operator() {
        let mut calc = Calculator::new();
        let view = run(&mut calc, &["64", "-", "bs"]);
        assert_eq!(view.display, "64");
        assert_eq!(view.expression, "64 −");
    }

    #[test]
    fn test_key_map() {
        assert_eq!(CalculatorCommand::from_key("Enter"), Some(CalculatorCommand::Equals));
        assert_eq!(CalculatorCommand::from_key("Escape"), Some(CalculatorCommand::Clear));
        assert_eq!(CalculatorCommand::from_key("Backspace"), Some(CalculatorCommand::Backspace));
        assert_eq!(CalculatorCommand::from_key("%"), Some(CalculatorCommand::Percent));
        assert_eq!(
            CalculatorCommand::from_key("*"),
            Some(CalculatorCommand::Operator(Operator::Multiply))
        );
        assert_eq!(
            CalculatorCommand::from_key("."),
            Some(CalculatorCommand::Digit(Digit::POINT))
        );
        assert_eq!(CalculatorCommand::from_key("a"), None);
        assert_eq!(CalculatorCommand::from_key("Tab"), None);
        // display symbols are not keyboard keys
        assert_eq!(CalculatorCommand::from_key("×"), None);
    }

    #[test]
    fn test_bad_token() {
        let err = "sqrt".parse::<CalculatorCommand>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(parse_key_sequence(["1", "+", "x2"]).is_err());
    }

    #[test]
    fn test_command_serialization() {
        let command = CalculatorCommand::Operator(Operator::Divide);
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"action":"operator","value":"Divide"}"#);

        let digit: CalculatorCommand = serde_json::from_str(r#"{"action":"digit","value":"7"}"#).unwrap();
        assert_eq!(digit.label(), "7");
    }

    #[test]
    fn test_converter_commands() {
        let mut converter = Converter::default();
        converter
            .apply(ConverterCommand::SetCategory("temperature".to_string()))
            .unwrap();
        converter.apply(ConverterCommand::SetToUnit("F".to_string())).unwrap();
        let view = converter
            .apply(ConverterCommand::SetInput("100".to_string()))
            .unwrap();
        assert_eq!(view.result, ConversionOutput::Value("212 F".to_string()));
        assert_eq!(view.units.len(), 3);

        let view = converter.apply(ConverterCommand::ToggleAuto).unwrap();
        assert!(!view.auto_convert);

        converter.apply(ConverterCommand::SetInput("0".to_string())).unwrap();
        assert_eq!(converter.result().text(), "212 F");
        let view = converter.apply(ConverterCommand::Convert).unwrap();
        assert_eq!(view.result_text, "32 F");
    }

    #[test]
    fn test_converter_command_errors() {
        let mut converter = Converter::default();
        let err = converter
            .apply(ConverterCommand::SetFromUnit("lb".to_string()))
            .unwrap_err();
        assert!(err.is_lookup_error());
        assert_eq!(converter.from_unit().symbol(), "m");
    }
}
