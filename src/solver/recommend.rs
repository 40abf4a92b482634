//! Guess recommendations
//!
//! Every remaining candidate is considered as a hypothetical next guess: its
//! entropy is measured against the whole candidate set, its normalized
//! frequency likelihood says how often it simply *is* the answer, and the
//! two combine into an expected-turns score. This sweep is the engine's
//! dominant cost, O(|candidates|²) evaluations, so it runs on rayon.

use super::{FrequencyModel, expected_score, guess_entropy};
use crate::core::{Sequence, Word};
use rayon::prelude::*;
use serde::Serialize;

/// One ranked guess recommendation
///
/// Ephemeral: recomputed from the candidate set on demand, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub word: String,
    /// Expected information gain in bits
    pub entropy: f64,
    /// Normalized likelihood of being the target (sums to 1 across the set)
    pub probability: f64,
    /// Expected turn the game ends on; lower is better
    pub expected_score: f64,
}

/// Rank every candidate as a hypothetical guess, best first
///
/// Scores ascend (fewer expected turns is better); ties keep candidate-set
/// order via the stable sort. Returns an empty list for an empty set.
#[must_use]
pub fn rank_candidates(
    sequence: Sequence,
    candidates: &[Word],
    model: &FrequencyModel,
    turns_taken: usize,
) -> Vec<Recommendation> {
    rank_candidates_with(sequence, candidates, model, turns_taken, || {})
}

/// `rank_candidates` with a per-candidate progress callback
///
/// The callback fires once per candidate from worker threads; the CLI hooks
/// an indicatif bar into it.
#[must_use]
pub fn rank_candidates_with<F>(
    sequence: Sequence,
    candidates: &[Word],
    model: &FrequencyModel,
    turns_taken: usize,
    progress: F,
) -> Vec<Recommendation>
where
    F: Fn() + Sync,
{
    if candidates.is_empty() {
        return Vec::new();
    }

    let weights: Vec<f64> = candidates
        .iter()
        .map(|word| model.probability(word))
        .collect();
    let total_weight: f64 = weights.iter().sum();

    // log2(n) of the uniform distribution, the current uncertainty baseline
    let current_entropy = (candidates.len() as f64).log2();

    let mut recommendations: Vec<Recommendation> = candidates
        .par_iter()
        .zip(&weights)
        .map(|(word, &weight)| {
            let entropy = guess_entropy(sequence, word, candidates, &weights);
            let probability = weight / total_weight;
            let score = expected_score(probability, entropy, current_entropy, turns_taken);
            progress();

            Recommendation {
                word: word.text().to_string(),
                entropy,
                probability,
                expected_score: score,
            }
        })
        .collect();

    debug_assert!(
        (recommendations.iter().map(|r| r.probability).sum::<f64>() - 1.0).abs() < 1e-6,
        "normalized probabilities must sum to 1"
    );

    // Stable: equal scores keep candidate-set order
    recommendations.sort_by(|a, b| a.expected_score.total_cmp(&b.expected_score));
    recommendations
}
