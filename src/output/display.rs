//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::SimulationResult;
use crate::settings::Settings;
use colored::Colorize;

/// Print the settings a simulation runs with
pub fn print_simulation_header(settings: &Settings, rounds: usize, bot: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LUCKY NUMBER SIMULATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nRounds:          {rounds}");
    println!("Bot:             {bot}");
    println!(
        "List:            {} numbers from {}..={}",
        settings.list_size(),
        settings.lower_bound(),
        settings.upper_bound()
    );
    println!(
        "Phase 2:         radius {}, minimum size {}",
        settings.range_threshold(),
        settings.min_list_size()
    );
    println!();
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Wins:             {} ({})",
        format!("{}", result.wins).green(),
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!("   Losses:           {}", format!("{}", result.losses).red());
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts).bright_yellow().bold()
    );
    println!("   Fewest attempts:  {}", result.min_attempts);
    println!("   Most attempts:    {}", result.max_attempts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Attempts distribution:".bright_cyan().bold());
    let mut attempts: Vec<u32> = result.distribution.keys().copied().collect();
    attempts.sort_unstable();
    for count in attempts {
        let rounds = result.distribution[&count];
        let pct = (rounds as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {count:3}: {} {rounds:6} ({pct:5.1}%)", bar.green());
    }
}
