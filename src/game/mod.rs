//! Game flow
//!
//! A `Round` is the two-phase guessing state machine. It talks to a `Guesser`, which is
//! either the console player or one of the simulation bots. `Game` drives an
//! interactive session of rounds for one player.

pub mod bots;
mod guesser;
mod round;
mod session;

pub use bots::BotType;
pub use guesser::{Feedback, Guesser, Phase, Turn};
pub use round::{Round, RoundOutcome, RoundState};
pub use session::Game;
