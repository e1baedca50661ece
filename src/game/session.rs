//! Interactive game session
//!
//! Registers the player, plays rounds until they decline another one and prints their
//! statistics at the end. All input goes through the `Console`, which re-prompts on
//! anything invalid, so only I/O errors leave this module.

use super::round::{Round, RoundOutcome};
use crate::console::Console;
use crate::core::{BIRTHDATE_FORMAT, Player, parse_birthdate, parse_full_name, validate_birthdate};
use crate::output::formatters::pluralize;
use crate::settings::Settings;
use chrono::NaiveDate;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{info, instrument};

/// The game orchestrator
pub struct Game<R, W, G> {
    settings: Settings,
    console: Console<R, W>,
    rng: G,
    today: NaiveDate,
}

impl<R: BufRead, W: Write, G: Rng> Game<R, W, G> {
    /// Create a game
    ///
    /// # Parameters
    /// - `settings`: Validated configuration for every round
    /// - `console`: Where prompts are read and messages written
    /// - `rng`: Source for list generation and secret selection
    /// - `today`: Reference date for birthdate checks
    pub const fn new(settings: Settings, console: Console<R, W>, rng: G, today: NaiveDate) -> Self {
        Self {
            settings,
            console,
            rng,
            today,
        }
    }

    /// Give back the console (used to inspect scripted sessions)
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run a full session and return the player with their final statistics
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, including when the
    /// input closes before the player declines another round.
    #[instrument(skip_all)]
    pub fn play(&mut self) -> io::Result<Player> {
        self.console.info("The number guessing game starts...")?;
        let mut player = self.register_player()?;
        info!(player = player.name(), age = player.age(), "player registered");

        while self.play_round(&mut player)? {
            self.console
                .info("Another round of the guessing game coming up...")?;
        }

        self.console.info(format!("Goodbye, {}!", player.name()))?;
        self.console.write_block(&player)?;
        info!(
            games = player.games_played(),
            wins = player.wins_count(),
            "session finished"
        );

        Ok(player)
    }

    /// Ask for name and birthdate until both are acceptable
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures.
    pub fn register_player(&mut self) -> io::Result<Player> {
        let name = self
            .console
            .prompt_until("Full name (first, last)", parse_full_name)?;

        let today = self.today;
        let minimum_year = self.settings.minimum_year();
        let minimum_age = self.settings.minimum_age_years();
        let age = self.console.prompt_until(
            &format!("Enter your birth date [{BIRTHDATE_FORMAT}]"),
            |input| {
                let birthdate = parse_birthdate(input)?;
                validate_birthdate(birthdate, today, minimum_year, minimum_age)
            },
        )?;

        Ok(Player::new(name, age))
    }

    /// Play one round, record its result and ask whether to play another
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures.
    #[instrument(skip_all, fields(player = player.name()))]
    pub fn play_round(&mut self, player: &mut Player) -> io::Result<bool> {
        let mut round = Round::generate(&self.settings, &mut self.rng);

        self.console.blank_line()?;
        self.console.info(format!(
            "<<<*= Welcome to the number guessing game, {}! =*>>>",
            player.name()
        ))?;
        if self.settings.debug() {
            self.console
                .info(format!("Psst! The secret number is {}.", round.secret()))?;
        }

        let outcome = round.play(&mut self.console, &self.settings)?;
        player.register_result(outcome.won);
        info!(won = outcome.won, attempts = outcome.attempts, "round finished");

        self.print_results(outcome)?;
        self.console.prompt_bool("Would you like to play again?")
    }

    fn print_results(&mut self, outcome: RoundOutcome) -> io::Result<()> {
        let attempts = pluralize(outcome.attempts, "attempt", "attempts");

        self.console.blank_line()?;
        if outcome.won {
            self.console.info(format!(
                "Congrats, game is over! You found the lucky number in {attempts}."
            ))
        } else {
            self.console.info(format!(
                "Game is over. You got to use {attempts}, but did not find the lucky number."
            ))
        }
    }
}
