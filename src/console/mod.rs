//! Terminal input and output
//!
//! Prompts, colored status lines and the console implementation of `Guesser`.

mod guesser;
mod indicator;
mod terminal;

pub use indicator::Indicator;
pub use terminal::{Console, parse_int, parse_yes_no};
