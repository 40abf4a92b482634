//! Weighted Shannon entropy of guess outcomes
//!
//! A hypothetical guess partitions the candidate set: every candidate, if it
//! were the target, would answer the guess with some evaluation. Candidates
//! producing identical evaluations are indistinguishable from each other, so
//! the guess's information content is the entropy of the bucket distribution,
//! weighted by each candidate's frequency-derived likelihood.

use crate::core::{Evaluation, Sequence, Word};
use rustc_hash::FxHashMap;
use std::collections::HashMap;

/// Expected information (bits) a guess yields over the candidate set
///
/// `weights` runs parallel to `candidates` and need not be normalized.
/// Returns 0 for an empty candidate set or zero total weight.
///
/// # Panics
/// Panics if `weights.len() != candidates.len()`, or if a word does not
/// contain the anchor sequence (candidates and guesses are validated before
/// they get here).
#[must_use]
pub fn guess_entropy(
    sequence: Sequence,
    guess: &Word,
    candidates: &[Word],
    weights: &[f64],
) -> f64 {
    assert_eq!(
        candidates.len(),
        weights.len(),
        "one weight per candidate required"
    );

    if candidates.is_empty() {
        return 0.0;
    }

    // Bucket candidate mass by outcome signature
    let mut buckets: FxHashMap<Evaluation, f64> = FxHashMap::default();
    for (candidate, &weight) in candidates.iter().zip(weights) {
        let evaluation = Evaluation::calculate(sequence, guess, candidate);
        *buckets.entry(evaluation).or_insert(0.0) += weight;
    }

    shannon_entropy(&buckets)
}

/// Shannon entropy of an outcome-weight distribution
///
/// `H = -Σ p·log₂(p)` with `p` the bucket's share of total weight.
///
/// # Properties
/// - 0 when a single bucket holds all the weight
/// - maximized by an even split across buckets
/// - always in `[0, log₂(n)]` for `n` buckets
#[must_use]
pub fn shannon_entropy<S>(bucket_weights: &HashMap<Evaluation, f64, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total: f64 = bucket_weights.values().sum();

    if total <= 0.0 {
        return 0.0;
    }

    bucket_weights
        .values()
        .filter(|&&weight| weight > 0.0)
        .map(|&weight| {
            let p = weight / total;
            -p * p.log2()
        })
        .sum()
}
