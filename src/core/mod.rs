//! Core domain types for the guessing game
//!
//! The list of candidate numbers, the player record and identity validation. Nothing in
//! here touches the terminal; randomness and the current date are passed in.

mod identity;
mod number_list;
mod player;

pub use identity::{
    BIRTHDATE_FORMAT, IdentityError, age_on, parse_birthdate, parse_full_name, validate_birthdate,
};
pub use number_list::NumberList;
pub use player::Player;
