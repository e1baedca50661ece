//! Automated guessers for simulations
//!
//! Bots only ever guess numbers that are still in play, so every round they play ends.

use super::guesser::{Guesser, Turn};
use rand::Rng;
use rand::rngs::StdRng;
use std::io;

/// Picks uniformly among the numbers still in play
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Guesser for RandomBot {
    fn guess(&mut self, turn: Turn<'_>) -> io::Result<i32> {
        turn.list
            .random_choice(&mut self.rng)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no numbers left to guess"))
    }
}

/// Always guesses the smallest number still in play
pub struct SweepBot;

impl Guesser for SweepBot {
    fn guess(&mut self, turn: Turn<'_>) -> io::Result<i32> {
        turn.list
            .first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no numbers left to guess"))
    }
}

/// Enum wrapper for all bot types
///
/// Allows runtime selection of the bot while keeping static dispatch.
pub enum BotType {
    Random(RandomBot),
    Sweep(SweepBot),
}

impl Guesser for BotType {
    fn guess(&mut self, turn: Turn<'_>) -> io::Result<i32> {
        match self {
            Self::Random(bot) => bot.guess(turn),
            Self::Sweep(bot) => bot.guess(turn),
        }
    }
}

impl BotType {
    /// Names accepted by [`BotType::from_name`]
    pub const NAMES: [&'static str; 2] = ["random", "sweep"];

    /// Create a bot from its name
    ///
    /// Defaults to the random bot if the name is unrecognized. The RNG is only used by
    /// bots that need one.
    #[must_use]
    pub fn from_name(name: &str, rng: StdRng) -> Self {
        match name {
            "sweep" => Self::Sweep(SweepBot),
            _ => Self::Random(RandomBot::new(rng)),
        }
    }

    /// Name of this bot
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Sweep(_) => "sweep",
        }
    }
}
