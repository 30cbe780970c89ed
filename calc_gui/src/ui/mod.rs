//! UI module for the Tally GUI
//!
//! # Panel Structure
//! - `toolbar` - Title header
//! - `calculator_panel` - Display, expression trail and keypad
//! - `converter_panel` - Category/unit pickers, input field, result, copy
//! - `status_bar` - Version and toast notifications

pub mod calculator_panel;
pub mod converter_panel;
pub mod status_bar;
pub mod toolbar;
