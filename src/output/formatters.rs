//! Formatting utilities for terminal output

use crate::core::{Evaluation, Tile, TileKind};
use crate::session::LetterStatus;
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Color one evaluated tile
///
/// Mirrors the board colors of the game: blue anchor, green correct, yellow
/// misplaced, dimmed incorrect, struck-through for positions with no target
/// slot.
#[must_use]
pub fn tile_text(tile: Tile) -> ColoredString {
    let letter = (tile.letter as char).to_ascii_uppercase().to_string();

    match tile.kind {
        TileKind::Sequence => letter.bright_blue().bold(),
        TileKind::Correct => letter.green().bold(),
        TileKind::Misplaced => letter.yellow(),
        TileKind::Incorrect => letter.bright_black(),
        TileKind::Empty => letter.bright_black().strikethrough(),
        TileKind::Undefined => letter.normal(),
    }
}

/// Format a full evaluation as one board row
#[must_use]
pub fn evaluation_row(evaluation: &Evaluation) -> String {
    evaluation
        .tiles()
        .iter()
        .map(|&tile| tile_text(tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the a-z keyboard summary line
///
/// Letters keep their best classification across the game; unseen letters
/// stay plain.
#[must_use]
pub fn keyboard_row(statuses: &FxHashMap<u8, LetterStatus>) -> String {
    (b'a'..=b'z')
        .map(|letter| {
            let text = (letter as char).to_ascii_uppercase().to_string();
            let colored = match statuses.get(&letter) {
                Some(LetterStatus::Correct) => text.green().bold(),
                Some(LetterStatus::Misplaced) => text.yellow(),
                Some(LetterStatus::Incorrect) => text.bright_black(),
                None => text.normal(),
            };
            colored.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 12.0; // Roughly log2 of the largest candidate pools
    create_progress_bar(entropy, max_entropy, width)
}

/// Format a normalized probability for the recommendation table
///
/// Tiny-but-nonzero values print as "~0.00" rather than rounding silently to
/// nothing.
#[must_use]
pub fn probability_display(probability: f64) -> String {
    if probability > 0.0 && probability < 0.01 {
        format!("~{probability:.2}")
    } else {
        format!("{probability:.2}")
    }
}
