//! Word corpus: per-length rank index and guess-legality set
//!
//! The corpus is external data the engine only reads: for each supported
//! length, the set of words accepted as guesses and a frequency-rank index
//! over the words that can be answers. Sessions must not start before the
//! data is loaded; a missing rank index is survivable (uniform weights), a
//! missing guess list is not.

pub mod loader;

use crate::core::{Sequence, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

pub use loader::load_lexicon;

/// Corpus loading failures
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("guess list for length {length} contains no usable words")]
    EmptyGuessList { length: usize },
}

/// Loaded word data for one puzzle length
///
/// Owns the guess-legality set, the answer pool, and (when available) the
/// frequency-rank index. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    length: usize,
    guesses: FxHashSet<String>,
    answers: Vec<Word>,
    ranks: Option<FxHashMap<String, u32>>,
}

impl Lexicon {
    /// Assemble a lexicon from already-parsed parts
    ///
    /// `answers` is sorted and deduplicated here so downstream candidate
    /// ordering (and therefore recommendation tie-breaking) is reproducible.
    #[must_use]
    pub fn new(
        length: usize,
        guesses: FxHashSet<String>,
        mut answers: Vec<Word>,
        ranks: Option<FxHashMap<String, u32>>,
    ) -> Self {
        answers.sort();
        answers.dedup();

        Self {
            length,
            guesses,
            answers,
            ranks,
        }
    }

    /// The word length this lexicon covers
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Case-insensitive guess-legality check
    #[must_use]
    pub fn is_legal_guess(&self, word: &Word) -> bool {
        self.guesses.contains(word.text())
    }

    /// The frequency-rank index, if it loaded
    #[inline]
    #[must_use]
    pub const fn ranks(&self) -> Option<&FxHashMap<String, u32>> {
        self.ranks.as_ref()
    }

    /// Number of legal guesses
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// All answer-pool words, sorted
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// The initial candidate set for a sequence: answer-pool words that
    /// contain it
    #[must_use]
    pub fn candidate_pool(&self, sequence: Sequence) -> Vec<Word> {
        self.answers
            .iter()
            .filter(|word| sequence.contained_in(word))
            .cloned()
            .collect()
    }
}
