//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar};
use crate::commands::{ScoreResult, SimulationResult};
use colored::Colorize;

/// Print the feedback for a scored pair
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} → {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "  {}  {}",
        colored_tiles(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "  {} correct, {} present\n",
        result.feedback.count_correct(),
        result.feedback.count_present()
    );
}

/// Print the summary of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Wins:             {}", format!("{}", result.wins).green());
    println!("   Losses:           {}", format!("{}", result.losses).red());
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Longest streak:   {}", result.longest_streak);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Wins by guess:".bright_cyan().bold());
    for (i, &count) in result.distribution.iter().enumerate() {
        let pct = count as f64 / result.wins as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {}: {} {count:6} ({pct:5.1}%)", i + 1, bar.green());
    }
}
