//! Simulation command
//!
//! Plays many rounds with an automated guesser and collects outcome statistics.

use crate::game::{BotType, Round, RoundOutcome};
use crate::settings::Settings;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

// Keeps the bot's random stream apart from the round's
const BOT_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub rounds: usize,
    pub bot: String,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, bot: String, seed: u64) -> Self {
        Self {
            rounds,
            bot,
            seed,
            show_progress: true,
        }
    }
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub bot: &'static str,
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_attempts: f64,
    pub min_attempts: u32,
    pub max_attempts: u32,
    /// Rounds per attempt count, wins and losses together
    pub distribution: FxHashMap<u32, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SimulationResult {
    /// Share of rounds won, from 0.0 to 1.0
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_rounds as f64
        }
    }
}

/// Play `config.rounds` independent rounds in parallel
///
/// Round `i` draws its list and secret from `config.seed + i`, so the same seed gives the
/// same statistics regardless of thread scheduling.
///
/// # Errors
///
/// Returns an error if a bot fails to produce a guess.
#[instrument(skip_all, fields(rounds = config.rounds, bot = %config.bot))]
pub fn run_simulation(
    settings: &Settings,
    config: &SimulationConfig,
) -> io::Result<SimulationResult> {
    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let bot_name = BotType::from_name(&config.bot, StdRng::seed_from_u64(0)).name();
    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = (0..config.rounds)
        .into_par_iter()
        .map(|index| {
            let seed = config.seed.wrapping_add(index as u64);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut round = Round::generate(settings, &mut rng);
            let mut bot = BotType::from_name(&config.bot, StdRng::seed_from_u64(seed ^ BOT_STREAM));

            let outcome = round.play(&mut bot, settings);
            pb.inc(1);
            outcome
        })
        .collect::<io::Result<_>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let result = summarize(bot_name, &outcomes, duration);
    debug!(wins = result.wins, losses = result.losses, "simulation finished");
    Ok(result)
}

fn summarize(bot: &'static str, outcomes: &[RoundOutcome], duration: Duration) -> SimulationResult {
    let total_rounds = outcomes.len();
    let wins = outcomes.iter().filter(|o| o.won).count();

    let mut distribution: FxHashMap<u32, usize> = FxHashMap::default();
    for outcome in outcomes {
        *distribution.entry(outcome.attempts).or_insert(0) += 1;
    }

    let total_attempts: u64 = outcomes.iter().map(|o| u64::from(o.attempts)).sum();
    let average_attempts = if total_rounds > 0 {
        total_attempts as f64 / total_rounds as f64
    } else {
        0.0
    };

    SimulationResult {
        bot,
        total_rounds,
        wins,
        losses: total_rounds - wins,
        average_attempts,
        min_attempts: outcomes.iter().map(|o| o.attempts).min().unwrap_or(0),
        max_attempts: outcomes.iter().map(|o| o.attempts).max().unwrap_or(0),
        distribution,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
