//! # Calculator State Machine
//!
//! A four-function accumulator driven one key at a time. The state is four
//! fields plus the rendered expression trail:
//!
//! ```text
//! Calculator
//! ├── display_value: String          operand as typed ("0.", "12", ...)
//! ├── previous_value: Option<f64>    left operand of the pending operation
//! ├── operator: Option<Operator>     set iff an operation is pending
//! ├── waiting_for_new_value: bool    next digit starts a fresh operand
//! └── expression: String             trail shown above the display
//! ```
//!
//! Division by zero is not an error value: it throws the whole computation
//! away and the calculator returns to its initial state.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::{Calculator, Digit, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(Digit::try_from('2').unwrap());
//! calc.handle_operator(Operator::Multiply);
//! calc.input_digit(Digit::try_from('3').unwrap());
//! calc.equals();
//! assert_eq!(calc.display(), "6");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_number, parse_operand};

/// Placeholder trail shown when nothing is pending (a non-breaking space,
/// so the trail line keeps its height).
pub const EMPTY_EXPRESSION: &str = "\u{00A0}";

/// Binary operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Display symbol used in the expression trail and on the keypad
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Parse an operator from either its display symbol or its ASCII key.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "*" | "×" | "x" => Some(Operator::Multiply),
            "/" | "÷" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        Operator::from_symbol(s.trim()).ok_or_else(|| {
            CalcError::invalid_input("operator", s, "expected one of + - * / (or − × ÷)")
        })
    }
}

/// A single keypad digit: `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    /// The decimal point
    pub const POINT: Digit = Digit('.');

    /// The character this digit was typed as
    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Digit(c))
        } else {
            Err(CalcError::invalid_input("digit", c.to_string(), "expected 0-9 or '.'"))
        }
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Apply `op` to two operands.
///
/// Returns `None` for division by zero; callers treat that as "throw the
/// computation away". A NaN operand yields `Some(0.0)` instead of a NaN.
pub fn calculate(a: f64, b: f64, op: Operator) -> Option<f64> {
    if a.is_nan() || b.is_nan() {
        return Some(0.0);
    }

    match op {
        Operator::Add => Some(a + b),
        Operator::Subtract => Some(a - b),
        Operator::Multiply => Some(a * b),
        Operator::Divide => {
            if b == 0.0 {
                None
            } else {
                Some(a / b)
            }
        }
    }
}

/// Snapshot of what the calculator renders after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorView {
    /// Main display string
    pub display: String,
    /// Expression trail above the display
    pub expression: String,
}

/// The calculator input state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    display_value: String,
    previous_value: Option<f64>,
    operator: Option<Operator>,
    waiting_for_new_value: bool,
    expression: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

impl Calculator {
    /// Create a calculator in its initial state (display `"0"`).
    pub fn new() -> Self {
        Calculator {
            display_value: "0".to_string(),
            previous_value: None,
            operator: None,
            waiting_for_new_value: false,
            expression: EMPTY_EXPRESSION.to_string(),
        }
    }

    /// Current display string
    pub fn display(&self) -> &str {
        &self.display_value
    }

    /// Current expression trail
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Left operand of the pending operation, if any
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Pending operator, if any
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_waiting_for_new_value(&self) -> bool {
        self.waiting_for_new_value
    }

    /// Snapshot of the rendered state
    pub fn view(&self) -> CalculatorView {
        CalculatorView {
            display: self.display_value.clone(),
            expression: self.expression.clone(),
        }
    }

    /// Return every field to its initial value.
    pub fn reset_all(&mut self) {
        *self = Calculator::new();
    }

    /// Enter a digit or the decimal point.
    pub fn input_digit(&mut self, digit: Digit) {
        if self.waiting_for_new_value {
            self.display_value = if digit.is_point() {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.waiting_for_new_value = false;
            return;
        }

        if digit.is_point() && self.display_value.contains('.') {
            return;
        }

        if self.display_value == "0" && !digit.is_point() {
            self.display_value = digit.to_string();
        } else {
            self.display_value.push(digit.as_char());
        }
    }

    /// Press a binary operator key.
    ///
    /// Pressing a second operator before any digit only swaps the pending
    /// operator. Otherwise a pending operation is folded into the previous
    /// value first, so `2 + 3 ×` shows `5` and waits for the next operand.
    pub fn handle_operator(&mut self, op: Operator) {
        if self.operator.is_some() && self.waiting_for_new_value {
            self.operator = Some(op);
            self.refresh_expression(false);
            return;
        }

        match (self.previous_value, self.operator) {
            (None, _) => {
                self.previous_value = Some(parse_operand(&self.display_value));
            }
            (Some(previous), Some(pending)) => {
                let current = parse_operand(&self.display_value);
                let Some(result) = calculate(previous, current, pending) else {
                    log::debug!("division by zero while chaining {}, resetting", pending);
                    self.reset_all();
                    return;
                };
                self.previous_value = Some(result);
                self.display_value = format_number(result);
            }
            (Some(_), None) => {}
        }

        self.operator = Some(op);
        self.waiting_for_new_value = true;
        self.refresh_expression(false);
    }

    /// Complete the pending operation. No-op when nothing is pending.
    pub fn equals(&mut self) {
        let (Some(previous), Some(op)) = (self.previous_value, self.operator) else {
            return;
        };

        let current = parse_operand(&self.display_value);
        let Some(result) = calculate(previous, current, op) else {
            log::debug!("division by zero on equals, resetting");
            self.reset_all();
            return;
        };

        self.display_value = format_number(result);
        self.previous_value = None;
        self.operator = None;
        self.waiting_for_new_value = false;
        self.refresh_expression(true);
    }

    /// Divide the current display by 100. No-op if it isn't a number.
    pub fn apply_percent(&mut self) {
        let value = parse_operand(&self.display_value);
        if value.is_nan() {
            return;
        }
        self.display_value = format_number(value / 100.0);
    }

    /// Remove the last typed character.
    pub fn backspace(&mut self) {
        if self.waiting_for_new_value {
            return;
        }

        if self.display_value.chars().count() <= 1 {
            self.display_value = "0".to_string();
        } else {
            self.display_value.pop();
        }
    }

    fn refresh_expression(&mut self, force_blank: bool) {
        if force_blank {
            self.expression.clear();
            return;
        }

        let mut text = String::new();
        if let Some(previous) = self.previous_value {
            text.push_str(&format_number(previous));
            text.push(' ');
        }
        if let Some(op) = self.operator {
            text.push_str(op.symbol());
        }

        self.expression = if text.is_empty() {
            EMPTY_EXPRESSION.to_string()
        } else {
            text
        };
    }
}
