//! Player identity and session statistics

use std::fmt;

/// A registered player and their results for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    age: u32,
    games_played: u32,
    wins_count: u32,
}

impl Player {
    /// Create a player with no games recorded yet
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            games_played: 0,
            wins_count: 0,
        }
    }

    /// Record the outcome of one finished round
    pub fn register_result(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.wins_count += 1;
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    #[inline]
    #[must_use]
    pub const fn wins_count(&self) -> u32 {
        self.wins_count
    }

    /// Games played minus games won
    #[inline]
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.games_played - self.wins_count
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "       Player : {}, {} years old.", self.name, self.age)?;
        writeln!(f, " Games played : {}", self.games_played)?;
        writeln!(f, "         Wins : {}", self.wins_count)?;
        write!(f, "       Losses : {}", self.losses())
    }
}
