//! Interactive play mode
//!
//! Text-based game loop against the variant's hidden word, with live
//! analysis after every accepted guess.

use crate::core::Variant;
use crate::corpus::Lexicon;
use crate::output::{print_evaluation, print_keyboard, print_metrics, print_recommendations};
use crate::session::{GameState, MAX_TURNS, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(variant: Variant, lexicon: &Lexicon, top: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║              Sqnces Solver - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");

    println!(
        "Find the {}-letter word. Every guess must contain {}.",
        variant.length(),
        variant.sequence().text().to_uppercase().bright_blue().bold()
    );
    println!("You have {MAX_TURNS} guesses. Commands: 'quit' to exit, 'new' to restart.\n");

    let mut session = Session::new(variant, lexicon);

    loop {
        let prompt = format!("Guess {}/{MAX_TURNS}", session.turns_taken() + 1);
        let input = read_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "" => continue,
            _ => {}
        }

        let outcome = match session.submit_guess(&input) {
            Ok(outcome) => outcome,
            Err(error) => {
                println!("  {}\n", error.to_string().red());
                continue;
            }
        };

        println!();
        for (_, evaluation) in session.history() {
            print_evaluation(evaluation);
        }
        println!();
        print_keyboard(&session.letter_statuses());
        println!();
        print_metrics(&session.metrics());

        match outcome.state {
            GameState::Won => {
                println!(
                    "\n{}",
                    format!(
                        "🎉 Solved in {} {}!",
                        session.turns_taken(),
                        if session.turns_taken() == 1 {
                            "guess"
                        } else {
                            "guesses"
                        }
                    )
                    .bright_green()
                    .bold()
                );
            }
            GameState::Lost => {
                println!(
                    "\n{} The word was {}.",
                    "❌ Out of guesses!".red().bold(),
                    session
                        .variant()
                        .target()
                        .text()
                        .to_uppercase()
                        .bright_yellow()
                        .bold()
                );
            }
            GameState::InProgress => {
                print_recommendations(&session.recommendations(), top);
                println!();
                continue;
            }
        }

        match read_input("\nPlay again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => {
                session.reset();
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
