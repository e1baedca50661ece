//! Lucky Number - CLI
//!
//! Interactive number-guessing game, plus a simulation mode that plays rounds with bots.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lucky_number::{
    commands::{SimulationConfig, run_play, run_simulation},
    console::Indicator,
    game::BotType,
    output::{print_simulation_header, print_simulation_result},
    settings::{Settings, SettingsError},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lucky_number",
    about = "Guess the lucky number hidden in a random list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    settings: SettingsArgs,

    /// Log verbosity on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Play many rounds with a bot and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Bot: random (default) or sweep
        #[arg(short, long, default_value = "random")]
        bot: String,

        /// Base seed; round i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

/// Overrides for the default settings
#[derive(Args)]
struct SettingsArgs {
    /// Print the secret number at the start of each round
    #[arg(long, global = true)]
    debug: bool,

    /// How many numbers each round's list holds
    #[arg(long, global = true)]
    list_size: Option<usize>,

    /// Smallest number a list may contain
    #[arg(long, global = true, allow_hyphen_values = true)]
    lower_bound: Option<i32>,

    /// Largest number a list may contain
    #[arg(long, global = true, allow_hyphen_values = true)]
    upper_bound: Option<i32>,

    /// Phase 2 ends as a loss once fewer numbers than this remain
    #[arg(long, global = true)]
    min_list_size: Option<usize>,

    /// Radius around the secret that phase 2 narrows the list to
    #[arg(long, global = true)]
    range_threshold: Option<u32>,

    /// Minimum player age in years
    #[arg(long, global = true)]
    minimum_age: Option<u32>,

    /// Birth years up to and including this one are rejected
    #[arg(long, global = true, allow_hyphen_values = true)]
    minimum_year: Option<i32>,
}

impl SettingsArgs {
    fn build(&self) -> Result<Settings, SettingsError> {
        let mut builder = Settings::builder().debug(self.debug);
        if let Some(size) = self.list_size {
            builder = builder.list_size(size);
        }
        if let Some(lower) = self.lower_bound {
            builder = builder.lower_bound(lower);
        }
        if let Some(upper) = self.upper_bound {
            builder = builder.upper_bound(upper);
        }
        if let Some(size) = self.min_list_size {
            builder = builder.min_list_size(size);
        }
        if let Some(radius) = self.range_threshold {
            builder = builder.range_threshold(radius);
        }
        if let Some(years) = self.minimum_age {
            builder = builder.minimum_age_years(years);
        }
        if let Some(year) = self.minimum_year {
            builder = builder.minimum_year(year);
        }
        builder.build()
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match cli.settings.build() {
        Ok(settings) => settings,
        Err(e) => {
            println!("{} Fatal error: {e}", Indicator::Fatal);
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::debug!(?settings, "settings validated");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(settings)?;
        }
        Commands::Simulate {
            rounds,
            bot,
            seed,
            no_progress,
        } => run_simulate_command(&settings, rounds, bot, seed, no_progress)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn run_simulate_command(
    settings: &Settings,
    rounds: usize,
    bot: String,
    seed: u64,
    no_progress: bool,
) -> Result<()> {
    if !BotType::NAMES.contains(&bot.as_str()) {
        tracing::warn!(bot = %bot, "unknown bot, falling back to random");
    }

    let mut config = SimulationConfig::new(rounds, bot, seed);
    config.show_progress = !no_progress;

    print_simulation_header(settings, config.rounds, &config.bot);
    let result = run_simulation(settings, &config)?;
    print_simulation_result(&result);
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
