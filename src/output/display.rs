//! Display functions for analysis results

use super::formatters::{entropy_bar, evaluation_row, keyboard_row, probability_display};
use crate::commands::AnalysisResult;
use crate::core::Evaluation;
use crate::session::{LetterStatus, Metrics};
use crate::solver::Recommendation;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print one evaluated guess as a board row
pub fn print_evaluation(evaluation: &Evaluation) {
    println!("  {}", evaluation_row(evaluation));
}

/// Print the keyboard summary line
pub fn print_keyboard(statuses: &FxHashMap<u8, LetterStatus>) {
    println!("  {}", keyboard_row(statuses));
}

/// Print candidate count, uncertainty, and information gained
pub fn print_metrics(metrics: &Metrics) {
    println!(
        "  Candidates: {}   Uncertainty: {} bits   Info gained: {} bits",
        metrics.candidate_count.to_string().bright_yellow().bold(),
        format!("{:.2}", metrics.uncertainty_bits).bright_cyan(),
        format!("{:.2}", metrics.info_gained_bits).bright_green(),
    );
}

/// Print the top of a recommendation list as a table
pub fn print_recommendations(recommendations: &[Recommendation], top: usize) {
    if recommendations.is_empty() {
        println!("  {}", "No recommendations available".bright_black());
        return;
    }

    // Pad before coloring: ANSI escapes would throw the column widths off
    let header = format!("{:<10} {:>7} {:>8} {:>6}", "WORD", "SCORE", "ENTROPY", "PROB");
    println!("\n  {}", header.bright_cyan().bold());

    for recommendation in recommendations.iter().take(top) {
        let word = format!("{:<10}", recommendation.word.to_uppercase());
        println!(
            "  {} {:>7.2} {:>8.2} {:>6}",
            word.bright_white().bold(),
            recommendation.expected_score,
            recommendation.entropy,
            probability_display(recommendation.probability),
        );
    }

    let hidden = recommendations.len().saturating_sub(top);
    if hidden > 0 {
        println!("  {}", format!("... and {hidden} more").bright_black());
    }
}

/// Print the result of a single-word entropy analysis
pub fn print_analysis(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n  Against {} possible answers:", result.total_candidates);
    println!(
        "  Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("  Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "  Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "  Likelihood:  {} (frequency prior)",
        probability_display(result.likelihood)
    );
}
