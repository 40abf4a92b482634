//! Game session controller
//!
//! A `Session` is the explicit per-game value the UI layer drives: it owns
//! the active variant, the guess history, and the candidate set, and borrows
//! the loaded lexicon. All mutation happens inside `submit_guess`, strictly
//! between one accepted guess and the next; everything else is a read-only
//! query recomputed from state on demand.

use crate::core::{Evaluation, TileKind, Variant, Word, WordError};
use crate::corpus::Lexicon;
use crate::solver::{FrequencyModel, Recommendation, filter_candidates, rank_candidates};
use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;

/// Turn limit, after which an unsolved game is lost
pub const MAX_TURNS: usize = 6;

/// Rejected guess submissions
///
/// All recoverable: a rejected guess mutates nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("not a usable word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("guess must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("guess must contain \"{0}\"")]
    MissingSequence(String),
    #[error("'{0}' is not in the word list")]
    NotInGuessList(String),
    #[error("the game is already over")]
    Finished,
}

/// Whether the game is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub evaluation: Evaluation,
    pub state: GameState,
}

/// Read-only analysis figures for the UI
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Metrics {
    pub candidate_count: usize,
    /// log₂ of the candidate count
    pub uncertainty_bits: f64,
    /// Uncertainty eliminated since the game started
    pub info_gained_bits: f64,
}

/// Best classification seen for a letter across the whole history
///
/// Ordered worst-to-best so `max` picks the strongest evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LetterStatus {
    Incorrect,
    Misplaced,
    Correct,
}

/// One game of Sqnces
pub struct Session<'a> {
    variant: Variant,
    lexicon: &'a Lexicon,
    history: Vec<(Word, Evaluation)>,
    candidates: Vec<Word>,
    initial_count: usize,
    state: GameState,
}

impl<'a> Session<'a> {
    /// Start a game of `variant` over `lexicon`
    ///
    /// The candidate set begins as every answer-pool word containing the
    /// anchor sequence.
    #[must_use]
    pub fn new(variant: Variant, lexicon: &'a Lexicon) -> Self {
        debug_assert_eq!(variant.length(), lexicon.length());

        let candidates = lexicon.candidate_pool(variant.sequence());
        debug!(
            "session start: {} candidates contain \"{}\"",
            candidates.len(),
            variant.sequence()
        );

        let initial_count = candidates.len();
        Self {
            variant,
            lexicon,
            history: Vec::new(),
            candidates,
            initial_count,
            state: GameState::InProgress,
        }
    }

    /// Submit a raw guess string
    ///
    /// Validates word shape, length, anchor containment, and legality, in
    /// that order; each failure is a distinct error and leaves the session
    /// untouched. An accepted guess is evaluated against the target,
    /// appended to history, and used to narrow the candidate set.
    ///
    /// # Errors
    /// See [`GuessError`].
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.state != GameState::InProgress {
            return Err(GuessError::Finished);
        }

        let word = Word::new(raw)?;

        if word.len() != self.variant.length() {
            return Err(GuessError::WrongLength {
                expected: self.variant.length(),
                actual: word.len(),
            });
        }

        let sequence = self.variant.sequence();
        if !sequence.contained_in(&word) {
            return Err(GuessError::MissingSequence(sequence.text().to_string()));
        }

        if !self.lexicon.is_legal_guess(&word) {
            return Err(GuessError::NotInGuessList(word.text().to_string()));
        }

        let evaluation = Evaluation::calculate(sequence, &word, self.variant.target());
        let won = &word == self.variant.target();

        self.history.push((word, evaluation.clone()));
        filter_candidates(&mut self.candidates, sequence, &self.history);
        debug!(
            "turn {}: {} candidates remain",
            self.history.len(),
            self.candidates.len()
        );

        self.state = if won {
            GameState::Won
        } else if self.history.len() >= MAX_TURNS {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        Ok(GuessOutcome {
            evaluation,
            state: self.state,
        })
    }

    /// Candidate count, remaining uncertainty, and information gained
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        let count = self.candidates.len();
        let uncertainty_bits = if count > 0 { (count as f64).log2() } else { 0.0 };

        let info_gained_bits = if self.history.is_empty() || self.initial_count == 0 {
            0.0
        } else {
            (self.initial_count as f64).log2() - uncertainty_bits
        };

        Metrics {
            candidate_count: count,
            uncertainty_bits,
            info_gained_bits,
        }
    }

    /// Ranked guess recommendations for the current state
    ///
    /// Empty once the game is over or no candidates survive.
    #[must_use]
    pub fn recommendations(&self) -> Vec<Recommendation> {
        if self.state != GameState::InProgress {
            return Vec::new();
        }

        let model = FrequencyModel::new(self.lexicon.ranks(), self.variant.frequency_cutoff());
        rank_candidates(
            self.variant.sequence(),
            &self.candidates,
            &model,
            self.history.len(),
        )
    }

    /// Best classification seen per letter across the history
    ///
    /// A pure reduction over the history, recomputed on demand; anchor and
    /// gap tiles contribute nothing.
    #[must_use]
    pub fn letter_statuses(&self) -> FxHashMap<u8, LetterStatus> {
        let mut statuses: FxHashMap<u8, LetterStatus> = FxHashMap::default();

        for (_, evaluation) in &self.history {
            for tile in evaluation.tiles() {
                let status = match tile.kind {
                    TileKind::Correct => LetterStatus::Correct,
                    TileKind::Misplaced => LetterStatus::Misplaced,
                    TileKind::Incorrect => LetterStatus::Incorrect,
                    _ => continue,
                };

                statuses
                    .entry(tile.letter)
                    .and_modify(|current| *current = (*current).max(status))
                    .or_insert(status);
            }
        }

        statuses
    }

    /// Abandon the current game and restore the initial state
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidates = self.lexicon.candidate_pool(self.variant.sequence());
        self.state = GameState::InProgress;
    }

    /// The active variant
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Accepted guesses with their evaluations, in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Evaluation)] {
        &self.history
    }

    /// The still-possible target words
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Current game state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of guesses made so far
    #[inline]
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.history.len()
    }

    /// The rank index handle, for callers building their own model
    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builtin_variant;
    use rustc_hash::FxHashSet;

    const POOL: &[&str] = &[
        "tussle", "mussel", "busses", "cussed", "mussed", "fussed", "gusset", "aussie",
    ];

    fn lexicon() -> Lexicon {
        let guesses: FxHashSet<String> = POOL.iter().map(|w| (*w).to_string()).collect();
        let answers: Vec<Word> = POOL.iter().map(|w| Word::new(*w).unwrap()).collect();
        let ranks = POOL
            .iter()
            .enumerate()
            .map(|(i, w)| ((*w).to_string(), (i as u32 + 1) * 1000))
            .collect();
        Lexicon::new(6, guesses, answers, Some(ranks))
    }

    fn session(lexicon: &Lexicon) -> Session<'_> {
        Session::new(builtin_variant(6).unwrap(), lexicon)
    }

    #[test]
    fn starts_with_full_candidate_pool() {
        let lexicon = lexicon();
        let session = session(&lexicon);

        assert_eq!(session.candidates().len(), POOL.len());
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.turns_taken(), 0);
    }

    #[test]
    fn rejects_malformed_words() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        assert!(matches!(
            session.submit_guess("tuss!e"),
            Err(GuessError::InvalidWord(_))
        ));
        assert_eq!(session.turns_taken(), 0);
    }

    #[test]
    fn rejects_wrong_length() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        let result = session.submit_guess("sensory");
        assert_eq!(
            result.unwrap_err(),
            GuessError::WrongLength {
                expected: 6,
                actual: 7
            }
        );
        assert_eq!(session.turns_taken(), 0);
        assert_eq!(session.candidates().len(), POOL.len());
    }

    #[test]
    fn rejects_guess_without_sequence() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        // Checked before legality, so even an unlisted word reports the
        // missing anchor
        let result = session.submit_guess("tassel");
        assert_eq!(
            result.unwrap_err(),
            GuessError::MissingSequence("uss".to_string())
        );
    }

    #[test]
    fn rejects_unlisted_guess() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        let result = session.submit_guess("wussed");
        assert_eq!(
            result.unwrap_err(),
            GuessError::NotInGuessList("wussed".to_string())
        );
        assert_eq!(session.turns_taken(), 0);
    }

    #[test]
    fn accepted_guess_narrows_candidates() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);
        let before = session.candidates().len();

        let outcome = session.submit_guess("mussel").unwrap();

        assert_eq!(outcome.state, GameState::InProgress);
        assert_eq!(session.turns_taken(), 1);
        assert!(session.candidates().len() <= before);
        // The true target always survives
        assert!(session.candidates().iter().any(|w| w.text() == "tussle"));
    }

    #[test]
    fn guessing_the_target_wins() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        let outcome = session.submit_guess("TUSSLE").unwrap();

        assert_eq!(outcome.state, GameState::Won);
        assert_eq!(session.state(), GameState::Won);
        assert!(
            outcome
                .evaluation
                .tiles()
                .iter()
                .all(|t| matches!(t.kind, TileKind::Sequence | TileKind::Correct))
        );
    }

    #[test]
    fn six_misses_lose_the_game() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        for guess in ["mussel", "busses", "cussed", "mussed", "fussed"] {
            let outcome = session.submit_guess(guess).unwrap();
            assert_eq!(outcome.state, GameState::InProgress);
        }

        let outcome = session.submit_guess("gusset").unwrap();
        assert_eq!(outcome.state, GameState::Lost);
    }

    #[test]
    fn finished_game_rejects_further_guesses() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        session.submit_guess("tussle").unwrap();
        assert_eq!(session.submit_guess("mussel"), Err(GuessError::Finished));
    }

    #[test]
    fn metrics_track_information_gain() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        let fresh = session.metrics();
        assert_eq!(fresh.candidate_count, POOL.len());
        assert!((fresh.uncertainty_bits - (POOL.len() as f64).log2()).abs() < 1e-9);
        assert!(fresh.info_gained_bits.abs() < f64::EPSILON);

        session.submit_guess("mussel").unwrap();
        let after = session.metrics();

        assert!(after.candidate_count <= fresh.candidate_count);
        let expected_gain = (POOL.len() as f64).log2() - after.uncertainty_bits;
        assert!((after.info_gained_bits - expected_gain).abs() < 1e-9);
        assert!(after.info_gained_bits >= 0.0);
    }

    #[test]
    fn recommendations_cover_candidates_and_normalize() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);
        session.submit_guess("mussel").unwrap();

        let recommendations = session.recommendations();

        assert_eq!(recommendations.len(), session.candidates().len());
        let sum: f64 = recommendations.iter().map(|r| r.probability).sum();
        assert!((sum - 1.0).abs() < 1e-6);
        for pair in recommendations.windows(2) {
            assert!(pair[0].expected_score <= pair[1].expected_score);
        }
    }

    #[test]
    fn recommendations_empty_after_game_over() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        session.submit_guess("tussle").unwrap();
        assert!(session.recommendations().is_empty());
    }

    #[test]
    fn letter_statuses_keep_best_evidence() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        // "mussel" vs "tussle": e is Misplaced
        session.submit_guess("mussel").unwrap();
        assert_eq!(
            session.letter_statuses().get(&b'e'),
            Some(&LetterStatus::Misplaced)
        );

        // "aussie" vs "tussle": e lands Correct; the reduction upgrades it
        session.submit_guess("aussie").unwrap();
        let statuses = session.letter_statuses();
        assert_eq!(statuses.get(&b'e'), Some(&LetterStatus::Correct));
        assert_eq!(statuses.get(&b'm'), Some(&LetterStatus::Incorrect));
        // Anchor letters never reach the keyboard
        assert_eq!(statuses.get(&b'u'), None);
    }

    #[test]
    fn reset_restores_initial_state() {
        let lexicon = lexicon();
        let mut session = session(&lexicon);

        session.submit_guess("mussel").unwrap();
        session.submit_guess("tussle").unwrap();
        assert_eq!(session.state(), GameState::Won);

        session.reset();

        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.turns_taken(), 0);
        assert_eq!(session.candidates().len(), POOL.len());
    }
}
