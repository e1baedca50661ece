//! Lucky Number
//!
//! A terminal number-guessing game. The player registers, then guesses a secret number
//! hidden in a random list. A miss moves the round into a second phase where the list is
//! narrowed around the secret until the player finds it or too few numbers remain.
//!
//! # Quick Start
//!
//! ```rust
//! use lucky_number::game::{BotType, Round};
//! use lucky_number::settings::Settings;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let settings = Settings::default();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let mut round = Round::generate(&settings, &mut rng);
//! let mut bot = BotType::from_name("sweep", StdRng::seed_from_u64(2));
//! let outcome = round.play(&mut bot, &settings).unwrap();
//! assert!(outcome.attempts >= 1);
//! ```

// Core domain types
pub mod core;

// Validated configuration
pub mod settings;

// Rounds, guessers and the interactive session
pub mod game;

// Terminal prompts and status lines
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
