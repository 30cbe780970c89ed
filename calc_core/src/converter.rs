//! # Unit Converter
//!
//! Holds the converter widget's selection (category, from unit, to unit),
//! the raw text of the input field, and the last rendered result.
//!
//! Results are never errors from the caller's point of view: empty input,
//! unparseable input and unexpected failures all render as a
//! [`ConversionOutput`] sentinel. Only name lookups (unknown category or unit
//! symbols) are reported back as [`CalcError`]s, and those leave the state
//! untouched.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::converter::{Converter, ConversionOutput};
//!
//! let mut converter = Converter::new("temperature").unwrap();
//! converter.set_from_unit("C").unwrap();
//! converter.set_to_unit("F").unwrap();
//! converter.set_input("100");
//! assert_eq!(converter.result(), &ConversionOutput::Value("212 F".to_string()));
//! ```

use std::fmt;

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_with_precision, CONVERTER_PRECISION};
use crate::units::{self, Category, Unit, UnitOption};

/// Rendered when the input field is empty
pub const EMPTY_RESULT: &str = "—";

/// Rendered when the input isn't a number
pub const INVALID_RESULT: &str = "Invalid input";

/// Rendered when a conversion failed unexpectedly
pub const ERROR_RESULT: &str = "Error";

/// What the converter's result line shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum ConversionOutput {
    /// Input field is empty
    Empty,
    /// Input couldn't be parsed as a number
    Invalid,
    /// Conversion failed for an unanticipated reason
    Error,
    /// Converted value with the target symbol appended ("1500 m")
    Value(String),
}

impl ConversionOutput {
    /// Text rendered for this result
    pub fn text(&self) -> &str {
        match self {
            ConversionOutput::Empty => EMPTY_RESULT,
            ConversionOutput::Invalid => INVALID_RESULT,
            ConversionOutput::Error => ERROR_RESULT,
            ConversionOutput::Value(text) => text,
        }
    }
}

impl fmt::Display for ConversionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Snapshot of what the converter renders after a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterView {
    pub category: &'static str,
    pub note: &'static str,
    /// Picker entries for the active category, in table order
    pub units: Vec<UnitOption>,
    pub from: UnitOption,
    pub to: UnitOption,
    pub input: String,
    pub result: ConversionOutput,
    /// Display text of `result`
    pub result_text: String,
    pub auto_convert: bool,
}

/// The converter widget state.
#[derive(Debug, Clone)]
pub struct Converter {
    category: &'static Category,
    from: &'static Unit,
    to: &'static Unit,
    input: String,
    result: ConversionOutput,
    auto_convert: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Converter::with_category(&units::CATEGORIES[0])
    }
}

impl Converter {
    /// Create a converter showing `category`, with auto-convert on.
    pub fn new(category: &str) -> CalcResult<Self> {
        let category = units::require_category(category)?;
        Ok(Converter::with_category(category))
    }

    fn with_category(category: &'static Category) -> Self {
        let (from, to) = category.default_pair();
        let mut converter = Converter {
            category,
            from,
            to,
            input: String::new(),
            result: ConversionOutput::Empty,
            auto_convert: true,
        };
        converter.populate_units();
        converter
    }

    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn from_unit(&self) -> &'static Unit {
        self.from
    }

    pub fn to_unit(&self) -> &'static Unit {
        self.to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last rendered result
    pub fn result(&self) -> &ConversionOutput {
        &self.result
    }

    pub fn auto_convert(&self) -> bool {
        self.auto_convert
    }

    /// Snapshot of the rendered state
    pub fn view(&self) -> ConverterView {
        ConverterView {
            category: self.category.name(),
            note: self.category.note(),
            units: self.category.options(),
            from: self.from.option(),
            to: self.to.option(),
            input: self.input.clone(),
            result: self.result.clone(),
            result_text: self.result.text().to_string(),
            auto_convert: self.auto_convert,
        }
    }

    /// Switch category, resetting the unit pickers to their defaults.
    pub fn set_category(&mut self, name: &str) -> CalcResult<()> {
        self.category = units::require_category(name)?;
        self.populate_units();
        Ok(())
    }

    /// Reset the pickers to the active category's default pair and refresh.
    pub fn populate_units(&mut self) {
        let (from, to) = self.category.default_pair();
        self.from = from;
        self.to = to;
        self.update_result();
    }

    pub fn set_from_unit(&mut self, symbol: &str) -> CalcResult<()> {
        self.from = self.category.require_unit(symbol)?;
        self.update_result();
        Ok(())
    }

    pub fn set_to_unit(&mut self, symbol: &str) -> CalcResult<()> {
        self.to = self.category.require_unit(symbol)?;
        self.update_result();
        Ok(())
    }

    /// Replace the input text. Refreshes the result only in auto mode.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        if self.auto_convert {
            self.update_result();
        }
    }

    pub fn set_auto_convert(&mut self, enabled: bool) {
        self.auto_convert = enabled;
    }

    /// Flip auto mode, returning the new setting.
    pub fn toggle_auto_convert(&mut self) -> bool {
        self.auto_convert = !self.auto_convert;
        self.auto_convert
    }

    /// Convert the current input and render the result.
    ///
    /// On `Err` the previously rendered result is left as it was.
    pub fn convert(&mut self) -> CalcResult<&ConversionOutput> {
        self.result = evaluate(&self.input, self.from, self.to)?;
        Ok(&self.result)
    }

    /// Convert the current input, rendering the error sentinel if the
    /// conversion fails.
    pub fn update_result(&mut self) -> &ConversionOutput {
        self.result = match evaluate(&self.input, self.from, self.to) {
            Ok(output) => output,
            Err(e) => {
                log::warn!(
                    "conversion {} -> {} of '{}' failed: {}",
                    self.from.symbol(),
                    self.to.symbol(),
                    self.input,
                    e
                );
                ConversionOutput::Error
            }
        };
        &self.result
    }
}

/// Parse converter input: trims, treats the first comma as the decimal
/// separator, and rejects anything that isn't a finite number.
///
/// Returns `None` for empty input and `Some(None)` for invalid input.
pub fn parse_input(raw: &str) -> Option<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replacen(',', ".", 1);
    Some(normalized.parse::<f64>().ok().filter(|v| v.is_finite()))
}

fn evaluate(raw: &str, from: &Unit, to: &Unit) -> CalcResult<ConversionOutput> {
    let value = match parse_input(raw) {
        None => return Ok(ConversionOutput::Empty),
        Some(None) => return Ok(ConversionOutput::Invalid),
        Some(Some(value)) => value,
    };

    let converted = to.from_base(from.to_base(value));
    if !converted.is_finite() {
        return Err(CalcError::calculation_failed(
            "conversion",
            format!("{} {} is out of range in {}", raw.trim(), from.symbol(), to.symbol()),
        ));
    }

    Ok(ConversionOutput::Value(format!(
        "{} {}",
        format_with_precision(converted, CONVERTER_PRECISION),
        to.symbol()
    )))
}
