//! Display functions for command results

use super::formatters::{create_progress_bar, letter_list};
use crate::commands::{AnalysisResult, BenchmarkResult, GameSummary};
use colored::Colorize;

/// Print the outcome of a console game
pub fn print_game_summary(summary: &GameSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word:       {}",
        summary.target.to_uppercase().bright_yellow().bold()
    );
    println!("Guesses:    {}", summary.guesses.len());
    println!(
        "Incorrect:  {} {}",
        summary.incorrect.len().to_string().red(),
        letter_list(&summary.incorrect)
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the families a letter would produce
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' ",
        "FAMILY ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} candidates, current pattern {}",
        result.total_candidates,
        result.progress.bright_yellow()
    );

    for (i, family) in result.families.iter().enumerate() {
        let bar = create_progress_bar(family.size as f64, result.total_candidates as f64, 20);
        let marker = if i == 0 { "→".green().bold() } else { " ".normal() };
        println!(
            " {marker} {:<10} [{}] {:5}  +{} revealed  {}",
            family.pattern,
            bar.green(),
            family.size,
            family.new_reveals,
            family.sample.join(", ").bright_black()
        );
    }

    println!();
    if result.is_correct() {
        println!(
            "{}",
            format!("✅ The engine would reveal it ({} left)", result.remaining())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ The engine would reject it ({} left)", result.remaining())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let games = result.records.len();
    println!("\n📊 {}", "Greedy guesser vs engine:".bright_cyan().bold());
    println!("   Games played:     {games}");
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_wrong).bright_yellow().bold()
    );
    println!(
        "   Fewest misses:    {}",
        result.min_wrong.to_string().green()
    );
    println!(
        "   Most misses:      {}",
        result.max_wrong.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if games == 0 {
        return;
    }

    println!("\n📈 {}", "Misses per game:".bright_cyan().bold());
    for (&wrong, &count) in &result.distribution {
        let pct = (count as f64 / games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {wrong:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
