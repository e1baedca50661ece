//! Terminal output formatting
//!
//! Display utilities for command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_simulation_header, print_simulation_result};
