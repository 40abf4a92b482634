//! Guess analysis command
//!
//! Analyzes the entropy and information content of one hypothetical guess
//! against a variant's full candidate pool.

use crate::core::{Variant, Word};
use crate::corpus::Lexicon;
use crate::solver::{FrequencyModel, guess_entropy};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// Raw frequency-prior likelihood of the word itself being the target
    pub likelihood: f64,
}

/// Analyze the entropy of a word against the variant's candidate pool
///
/// # Errors
///
/// Returns an error if the word is malformed, the wrong length, missing the
/// anchor sequence, or not a legal guess.
pub fn analyze_word(
    word: &str,
    variant: &Variant,
    lexicon: &Lexicon,
) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if word_obj.len() != variant.length() {
        return Err(format!(
            "Word must be {} letters, got {}",
            variant.length(),
            word_obj.len()
        ));
    }

    let sequence = variant.sequence();
    if !sequence.contained_in(&word_obj) {
        return Err(format!("Word must contain the sequence '{sequence}'"));
    }

    if !lexicon.is_legal_guess(&word_obj) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let candidates = lexicon.candidate_pool(sequence);
    let model = FrequencyModel::new(lexicon.ranks(), variant.frequency_cutoff());
    let weights: Vec<f64> = candidates.iter().map(|c| model.probability(c)).collect();

    let entropy = guess_entropy(sequence, &word_obj, &candidates, &weights);

    let total_candidates = candidates.len();
    let expected_reduction = entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisResult {
        word: word.to_string(),
        entropy,
        expected_reduction,
        expected_remaining,
        total_candidates,
        likelihood: model.probability(&word_obj),
    })
}
