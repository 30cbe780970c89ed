//! # Unit Table
//!
//! The fixed table behind the converter. Every category routes conversions
//! through one base unit: a value is scaled into the base with the source
//! unit's `to_base` and back out with the target unit's `from_base`.
//!
//! ## Categories
//!
//! | Category    | Base    | Units          |
//! |-------------|---------|----------------|
//! | distance    | meters  | m, km, cm, mm  |
//! | weight      | grams   | g, kg, lb      |
//! | temperature | Celsius | C, F, K        |
//!
//! Each unit carries a pair of plain function pointers, so the whole table is
//! a `static` with no allocation and no dynamic dispatch.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units;
//!
//! let temperature = units::category("temperature").unwrap();
//! let f = temperature.convert(100.0, "C", "F").unwrap();
//! assert_eq!(f, 212.0);
//! ```

use std::fmt;

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Pounds to grams, exact by definition
const GRAMS_PER_POUND: f64 = 453.59237;

/// Celsius offset of the Kelvin scale
const KELVIN_OFFSET: f64 = 273.15;

/// A convertible unit within a category.
#[derive(Debug, Clone, Copy)]
pub struct Unit {
    symbol: &'static str,
    label: &'static str,
    into_base: fn(f64) -> f64,
    out_of_base: fn(f64) -> f64,
}

impl Unit {
    /// Short symbol appended to converted values ("km", "F")
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Human readable name ("Kilometers")
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Scale a value in this unit into the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        (self.into_base)(value)
    }

    /// Scale a base-unit value into this unit
    pub fn from_base(&self, value: f64) -> f64 {
        (self.out_of_base)(value)
    }

    /// Picker entry for this unit
    pub fn option(&self) -> UnitOption {
        UnitOption {
            symbol: self.symbol,
            label: self.label,
        }
    }
}

/// Entry shown in a unit picker, rendered as `"Label (symbol)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UnitOption {
    pub symbol: &'static str,
    pub label: &'static str,
}

impl fmt::Display for UnitOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.symbol)
    }
}

/// A named group of mutually convertible units.
#[derive(Debug)]
pub struct Category {
    name: &'static str,
    base: &'static str,
    note: &'static str,
    units: &'static [Unit],
}

impl Category {
    /// Table key ("distance")
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the base unit all conversions pass through
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Short description shown under the converter
    pub fn note(&self) -> &'static str {
        self.note
    }

    /// Units in table order
    pub fn units(&self) -> &'static [Unit] {
        self.units
    }

    /// Picker entries in table order
    pub fn options(&self) -> Vec<UnitOption> {
        self.units.iter().map(Unit::option).collect()
    }

    /// Look up a unit by symbol
    pub fn unit(&self, symbol: &str) -> Option<&'static Unit> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    /// Look up a unit by symbol, failing with `UnitNotFound`
    pub fn require_unit(&self, symbol: &str) -> CalcResult<&'static Unit> {
        self.unit(symbol)
            .ok_or_else(|| CalcError::unit_not_found(self.name, symbol))
    }

    /// Default picker selection: the first unit converting into the second
    /// (or into itself when the category has a single unit).
    pub fn default_pair(&self) -> (&'static Unit, &'static Unit) {
        let units = self.units;
        let from = &units[0];
        let to = units.get(1).unwrap_or(from);
        (from, to)
    }

    /// Convert `value` between two units of this category.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        let from = self.require_unit(from)?;
        let to = self.require_unit(to)?;
        Ok(to.from_base(from.to_base(value)))
    }
}

static DISTANCE_UNITS: [Unit; 4] = [
    Unit {
        symbol: "m",
        label: "Meters",
        into_base: |v| v,
        out_of_base: |v| v,
    },
    Unit {
        symbol: "km",
        label: "Kilometers",
        into_base: |v| v * 1000.0,
        out_of_base: |v| v / 1000.0,
    },
    Unit {
        symbol: "cm",
        label: "Centimeters",
        into_base: |v| v / 100.0,
        out_of_base: |v| v * 100.0,
    },
    Unit {
        symbol: "mm",
        label: "Millimeters",
        into_base: |v| v / 1000.0,
        out_of_base: |v| v * 1000.0,
    },
];

static WEIGHT_UNITS: [Unit; 3] = [
    Unit {
        symbol: "g",
        label: "Grams",
        into_base: |v| v,
        out_of_base: |v| v,
    },
    Unit {
        symbol: "kg",
        label: "Kilograms",
        into_base: |v| v * 1000.0,
        out_of_base: |v| v / 1000.0,
    },
    Unit {
        symbol: "lb",
        label: "Pounds",
        into_base: |v| v * GRAMS_PER_POUND,
        out_of_base: |v| v / GRAMS_PER_POUND,
    },
];

static TEMPERATURE_UNITS: [Unit; 3] = [
    Unit {
        symbol: "C",
        label: "Celsius",
        into_base: |v| v,
        out_of_base: |v| v,
    },
    Unit {
        symbol: "F",
        label: "Fahrenheit",
        into_base: |v| (v - 32.0) * (5.0 / 9.0),
        out_of_base: |v| v * (9.0 / 5.0) + 32.0,
    },
    Unit {
        symbol: "K",
        label: "Kelvin",
        into_base: |v| v - KELVIN_OFFSET,
        out_of_base: |v| v + KELVIN_OFFSET,
    },
];

/// The conversion table, in picker order.
pub static CATEGORIES: [Category; 3] = [
    Category {
        name: "distance",
        base: "meters",
        note: "Distance units",
        units: &DISTANCE_UNITS,
    },
    Category {
        name: "weight",
        base: "grams",
        note: "Weight units",
        units: &WEIGHT_UNITS,
    },
    Category {
        name: "temperature",
        base: "Celsius",
        note: "Temperature units",
        units: &TEMPERATURE_UNITS,
    },
];

/// All categories in picker order
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Category names in picker order
pub fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(Category::name).collect()
}

/// Look up a category by name
pub fn category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Look up a category by name, failing with `CategoryNotFound`
pub fn require_category(name: &str) -> CalcResult<&'static Category> {
    category(name).ok_or_else(|| CalcError::category_not_found(name))
}
