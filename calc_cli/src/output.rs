//! Printing views and errors, either as text or as JSON.

use serde::Serialize;

use calc_core::calculator::EMPTY_EXPRESSION;
use calc_core::units::Category;
use calc_core::{CalcError, CalculatorView, ConverterView};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

pub fn print_calculator(view: &CalculatorView, mode: OutputMode) {
    match mode {
        OutputMode::Json => print_json(view),
        OutputMode::Text => {
            if !view.expression.is_empty() && view.expression != EMPTY_EXPRESSION {
                println!("  {}", view.expression);
            }
            println!("= {}", view.display);
        }
    }
}

pub fn print_converter(view: &ConverterView, mode: OutputMode) {
    match mode {
        OutputMode::Json => print_json(view),
        OutputMode::Text => {
            let input = if view.input.trim().is_empty() { "?" } else { view.input.trim() };
            println!(
                "[{}] {} {} -> {}",
                view.category, input, view.from.symbol, view.result_text
            );
        }
    }
}

pub fn print_categories(categories: &[Category], mode: OutputMode) {
    match mode {
        OutputMode::Json => {
            let listing: Vec<_> = categories.iter().map(CategoryListing::from).collect();
            print_json(&listing);
        }
        OutputMode::Text => {
            for category in categories {
                print_category_text(category);
            }
        }
    }
}

pub fn print_category(category: &Category, mode: OutputMode) {
    match mode {
        OutputMode::Json => print_json(&CategoryListing::from(category)),
        OutputMode::Text => print_category_text(category),
    }
}

fn print_category_text(category: &Category) {
    println!("{} (base: {}) - {}", category.name(), category.base(), category.note());
    for option in category.options() {
        println!("  {:<4} {}", option.symbol, option.label);
    }
}

/// Print an error to stderr, with its JSON form for programmatic callers.
pub fn print_error(error: &CalcError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("failed to serialize output: {}", e),
    }
}

#[derive(Serialize)]
struct CategoryListing {
    name: &'static str,
    base: &'static str,
    note: &'static str,
    units: Vec<calc_core::units::UnitOption>,
}

impl From<&Category> for CategoryListing {
    fn from(category: &Category) -> Self {
        CategoryListing {
            name: category.name(),
            base: category.base(),
            note: category.note(),
            units: category.options(),
        }
    }
}
