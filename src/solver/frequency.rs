//! Word-frequency likelihood model
//!
//! Hidden words skew common, so each candidate's prior likelihood of being
//! the target comes from its frequency rank: a logistic curve centered on a
//! per-length cutoff rank. Words missing from the rank index are treated as
//! maximally rare; a missing index altogether degrades to a flat 0.5 so the
//! rest of the analysis keeps working with uniform weights.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Steepness of the likelihood sigmoid, fixed by calibration
pub const SIGMOID_SLOPE: f64 = 0.01;

/// Rank assigned to words absent from the index
pub const UNRANKED: u32 = 999_999;

/// Likelihood of a word being the hidden target, from its frequency rank
#[derive(Debug, Clone, Copy)]
pub struct FrequencyModel<'a> {
    ranks: Option<&'a FxHashMap<String, u32>>,
    cutoff: u32,
}

impl<'a> FrequencyModel<'a> {
    /// Create a model over a rank index (or `None` in degraded mode)
    #[must_use]
    pub const fn new(ranks: Option<&'a FxHashMap<String, u32>>, cutoff: u32) -> Self {
        Self { ranks, cutoff }
    }

    /// Unnormalized likelihood in (0, 1)
    ///
    /// `1 / (1 + e^(-slope * (cutoff - rank)))`: exactly 0.5 at the cutoff
    /// rank, approaching 1 for very common words and 0 for very rare ones.
    /// Without a rank index every word gets 0.5 (no discrimination).
    #[must_use]
    pub fn probability(&self, word: &Word) -> f64 {
        let Some(ranks) = self.ranks else {
            return 0.5;
        };

        let rank = ranks.get(word.text()).copied().unwrap_or(UNRANKED);
        sigmoid(SIGMOID_SLOPE * (f64::from(self.cutoff) - f64::from(rank)))
    }

    /// True when operating without a rank index
    #[inline]
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.ranks.is_none()
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
