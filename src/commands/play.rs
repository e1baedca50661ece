//! Interactive play on the terminal

use crate::console::Console;
use crate::core::Player;
use crate::game::Game;
use crate::settings::Settings;
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

/// Run an interactive session on standard input and output
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written, or if standard input
/// closes before the player quits.
pub fn run_play(settings: Settings) -> io::Result<Player> {
    let mut game = Game::new(
        settings,
        Console::stdio(),
        StdRng::from_os_rng(),
        Local::now().date_naive(),
    );
    game.play()
}
