//! # Number Formatting
//!
//! Both widgets render `f64` values the same way: integers print without a
//! decimal point, everything else is rounded to a fixed number of fractional
//! digits and reparsed so trailing zeros (and float noise such as
//! `0.30000000000000004`) disappear.
//!
//! ```rust
//! use calc_core::format::{format_number, format_with_precision};
//!
//! assert_eq!(format_number(0.1 + 0.2), "0.3");
//! assert_eq!(format_number(4.0), "4");
//! assert_eq!(format_with_precision(1.0 / 3.0, 8), "0.33333333");
//! ```

/// Fractional digits kept by the calculator display.
pub const CALCULATOR_PRECISION: usize = 10;

/// Fractional digits kept by the converter result.
pub const CONVERTER_PRECISION: usize = 8;

/// Format a calculator value.
pub fn format_number(value: f64) -> String {
    format_with_precision(value, CALCULATOR_PRECISION)
}

/// Format a value, keeping at most `places` fractional digits.
pub fn format_with_precision(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return format_non_finite(value).to_string();
    }

    if value.fract() == 0.0 {
        return format_integer(value);
    }

    let fixed = format!("{:.*}", places, value);
    let rounded = fixed.parse::<f64>().unwrap_or(value);
    format_integer_or_decimal(rounded)
}

/// Parse an operand the way the display shows it.
///
/// Anything that is not a complete number (for example a lone `-` left over
/// after backspacing a negative result) parses to NaN.
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn format_integer_or_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format_integer(value)
    } else {
        value.to_string()
    }
}

fn format_integer(value: f64) -> String {
    // -0.0 renders as "0"
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn format_non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}
