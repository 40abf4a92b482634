//! Per-length puzzle configuration
//!
//! Each supported word length has one active puzzle: a hidden target word,
//! the anchor sequence, and the frequency-rank cutoff that centers the
//! likelihood sigmoid for that length's corpus.

use super::{Sequence, Word};
use std::fmt;

/// A Sqnces puzzle variant, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    length: usize,
    target: Word,
    sequence: Sequence,
    frequency_cutoff: u32,
}

/// Error type for malformed variant configuration
///
/// These are programming-time invariant violations and should surface at
/// configuration load, never during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    SequenceNotInTarget { target: String, sequence: String },
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SequenceNotInTarget { target, sequence } => {
                write!(f, "Target '{target}' does not contain sequence '{sequence}'")
            }
        }
    }
}

impl std::error::Error for VariantError {}

impl Variant {
    /// Create a variant, validating that the target contains the sequence
    ///
    /// # Errors
    /// Returns `VariantError::SequenceNotInTarget` if the target word does
    /// not contain the anchor sequence.
    pub fn new(target: Word, sequence: Sequence, frequency_cutoff: u32) -> Result<Self, VariantError> {
        if !sequence.contained_in(&target) {
            return Err(VariantError::SequenceNotInTarget {
                target: target.text().to_string(),
                sequence: sequence.text().to_string(),
            });
        }

        Ok(Self {
            length: target.len(),
            target,
            sequence,
            frequency_cutoff,
        })
    }

    /// Word length of this variant
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The hidden target word
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// The anchor sequence every guess must contain
    #[inline]
    #[must_use]
    pub const fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Frequency-rank cutoff centering the likelihood sigmoid
    #[inline]
    #[must_use]
    pub const fn frequency_cutoff(&self) -> u32 {
        self.frequency_cutoff
    }
}

/// The shipped puzzle table, keyed by word length
///
/// Returns `None` for unsupported lengths. Supported: 6, 7, 8.
#[must_use]
pub fn builtin_variant(length: usize) -> Option<Variant> {
    let (target, sequence, cutoff) = match length {
        6 => ("tussle", "uss", 4400),
        7 => ("sensory", "nso", 5770),
        8 => ("drivable", "dri", 4700),
        _ => return None,
    };

    // The table above is static data; a violation here is a programming
    // error, so fail fast.
    let target = Word::new(target).expect("builtin target is a valid word");
    let sequence = Sequence::new(sequence).expect("builtin sequence is valid");
    Some(Variant::new(target, sequence, cutoff).expect("builtin variant is consistent"))
}
