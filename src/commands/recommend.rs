//! Full recommendation ranking command
//!
//! Replays a guess history through a fresh session, then ranks every
//! remaining candidate as a hypothetical next guess. This is the quadratic
//! sweep, so a progress bar tracks it over large pools.

use crate::core::Variant;
use crate::corpus::Lexicon;
use crate::output::{print_metrics, print_recommendations};
use crate::session::{GameState, Metrics, Session};
use crate::solver::{FrequencyModel, Recommendation, rank_candidates_with};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Everything the ranking produced, in one serializable report
#[derive(Debug, Serialize)]
pub struct RecommendReport {
    pub metrics: Metrics,
    pub recommendations: Vec<Recommendation>,
}

/// Run the recommend command
///
/// # Errors
///
/// Returns an error if a replayed guess is rejected, ends the game early, or
/// if JSON serialization fails.
pub fn run_recommend(
    variant: Variant,
    lexicon: &Lexicon,
    guesses: &[String],
    top: Option<usize>,
    json: bool,
) -> Result<(), String> {
    let mut session = Session::new(variant, lexicon);

    for raw in guesses {
        let outcome = session
            .submit_guess(raw)
            .map_err(|error| format!("guess '{raw}': {error}"))?;

        match outcome.state {
            GameState::Won => {
                return Err(format!("'{raw}' already solves the puzzle"));
            }
            GameState::Lost => {
                return Err(format!("the game is lost after '{raw}'"));
            }
            GameState::InProgress => {}
        }
    }

    let report = build_report(&session, json);

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{rendered}");
    } else {
        println!();
        print_metrics(&report.metrics);
        let limit = top.unwrap_or(report.recommendations.len());
        print_recommendations(&report.recommendations, limit);
        println!();
    }

    Ok(())
}

/// Rank the session's candidates with a progress bar (hidden in JSON mode)
fn build_report(session: &Session, quiet: bool) -> RecommendReport {
    let candidates = session.candidates();

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(candidates.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("  Ranking {pos}/{len} candidates {wide_bar}")
                .expect("progress template is valid"),
        );
        bar
    };

    let model = FrequencyModel::new(
        session.lexicon().ranks(),
        session.variant().frequency_cutoff(),
    );
    let recommendations: Vec<Recommendation> = rank_candidates_with(
        session.variant().sequence(),
        candidates,
        &model,
        session.turns_taken(),
        || bar.inc(1),
    );
    bar.finish_and_clear();

    RecommendReport {
        metrics: session.metrics(),
        recommendations,
    }
}
