//! Guess evaluation against a target word
//!
//! Sqnces feedback differs from classic Wordle in one structural way: the
//! anchor sequence may sit at different offsets in guess and target, so the
//! two words are compared through an alignment that lines up their first
//! anchor occurrences. Guess positions that fall outside the shifted target
//! window carry no match information at all and are marked `Empty`.
//!
//! Classification runs in five passes over a working copy of the target;
//! every matched letter is blanked out of the copy so it cannot be counted
//! twice (standard multiset accounting, as in Wordle's duplicate handling).

use super::{SEQUENCE_LEN, Sequence, Word};

/// Sentinel written into the working target copy when a letter is consumed
const CONSUMED: u8 = b' ';

/// Per-letter verdict for one guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Not yet classified; survives only outside the valid comparison range
    Undefined,
    /// Part of the anchor-sequence match
    Sequence,
    /// Right letter in the aligned position
    Correct,
    /// Right letter, wrong position (multiset-matched)
    Misplaced,
    /// Letter absent from the unconsumed remainder of the target
    Incorrect,
    /// No corresponding target slot due to the alignment offset
    Empty,
}

/// One evaluated guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: u8,
    pub kind: TileKind,
}

/// The full evaluation of a guess against a target
///
/// Tiles are ordered by guess position. The target length is kept for
/// cross-length bookkeeping (the candidate filter's first-entry check).
///
/// `Evaluation` is `Hash + Eq`, so identical letter+kind signatures land in
/// the same outcome bucket during entropy analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation {
    tiles: Vec<Tile>,
    target_len: usize,
}

impl Evaluation {
    /// Classify every guess position against `target`
    ///
    /// Only the first occurrence of the anchor sequence in each word is used
    /// for alignment.
    ///
    /// # Panics
    /// Panics if either `guess` or `target` does not contain `sequence`;
    /// callers validate this before evaluating.
    ///
    /// # Examples
    /// ```
    /// use sqnces_solver::core::{Evaluation, Sequence, TileKind, Word};
    ///
    /// let sequence = Sequence::new("dri").unwrap();
    /// let guess = Word::new("eldritch").unwrap();
    /// let target = Word::new("drivable").unwrap();
    ///
    /// let kinds: Vec<TileKind> = Evaluation::calculate(sequence, &guess, &target)
    ///     .tiles()
    ///     .iter()
    ///     .map(|tile| tile.kind)
    ///     .collect();
    /// assert_eq!(
    ///     kinds,
    ///     [
    ///         TileKind::Empty,
    ///         TileKind::Empty,
    ///         TileKind::Sequence,
    ///         TileKind::Sequence,
    ///         TileKind::Sequence,
    ///         TileKind::Incorrect,
    ///         TileKind::Incorrect,
    ///         TileKind::Incorrect,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(sequence: Sequence, guess: &Word, target: &Word) -> Self {
        let guess_idx = sequence
            .find_in(guess)
            .expect("guess must contain the anchor sequence");
        let target_idx = sequence
            .find_in(target)
            .expect("target must contain the anchor sequence");

        let offset = guess_idx as isize - target_idx as isize;
        let len_offset = target.len() as isize - guess.len() as isize;

        let mut tiles: Vec<Tile> = guess
            .bytes()
            .iter()
            .map(|&letter| Tile {
                letter,
                kind: TileKind::Undefined,
            })
            .collect();

        // Working copy of the target; consumed letters are blanked so they
        // cannot match again in a later pass.
        let mut remaining = target.bytes().to_vec();

        // Pass 1: the anchor match consumes its three target letters.
        for i in 0..SEQUENCE_LEN {
            tiles[guess_idx + i].kind = TileKind::Sequence;
            remaining[target_idx + i] = CONSUMED;
        }

        // Pass 2: alignment gaps. A positive offset shifts the target window
        // right, leaving leading guess positions without a target slot; the
        // symmetric tail gap appears when the window overruns the target end.
        if offset > 0 {
            for tile in &mut tiles[..offset as usize] {
                tile.kind = TileKind::Empty;
            }
        } else if offset + len_offset < 0 {
            // Clamp: a short guess against a long target can push the gap
            // start past the front of the word
            let start = (tiles.len() as isize + offset).max(0) as usize;
            for tile in &mut tiles[start..] {
                tile.kind = TileKind::Empty;
            }
        }

        // Valid comparison range. Guess indices past this point have no
        // defined comparison and keep `Undefined`; only unequal lengths or
        // extreme anchor offsets ever trigger it.
        let guess_len = guess.len() as isize;
        let target_len = target.len() as isize;
        let out_of_range = move |i: usize| -> bool {
            let i = i as isize;
            if offset > 0 {
                i > guess_len + 1 - offset
            } else {
                target_len < i + 1 - offset
            }
        };

        // Pass 3: exact matches through the alignment.
        for i in 0..tiles.len() {
            if out_of_range(i) {
                break;
            }
            let target_i = i as isize - offset;
            if target_i < 0 {
                continue;
            }
            let target_i = target_i as usize;
            if tiles[i].kind == TileKind::Undefined
                && target_i < remaining.len()
                && tiles[i].letter == remaining[target_i]
            {
                tiles[i].kind = TileKind::Correct;
                remaining[target_i] = CONSUMED;
            }
        }

        // Pass 4: misplaced letters, consuming the first unconsumed
        // occurrence anywhere in the target.
        for i in 0..tiles.len() {
            if out_of_range(i) {
                break;
            }
            if tiles[i].kind != TileKind::Undefined {
                continue;
            }
            if let Some(found) = remaining.iter().position(|&b| b == tiles[i].letter) {
                tiles[i].kind = TileKind::Misplaced;
                remaining[found] = CONSUMED;
            }
        }

        // Pass 5: whatever survives in range matches nothing.
        for i in 0..tiles.len() {
            if out_of_range(i) {
                break;
            }
            if tiles[i].kind == TileKind::Undefined {
                tiles[i].kind = TileKind::Incorrect;
            }
        }

        Self {
            tiles,
            target_len: target.len(),
        }
    }

    /// The evaluated tiles, in guess order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Length of the target word this evaluation was made against
    #[inline]
    #[must_use]
    pub const fn target_len(&self) -> usize {
        self.target_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sequence: &str, guess: &str, target: &str) -> Vec<TileKind> {
        let sequence = Sequence::new(sequence).unwrap();
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        Evaluation::calculate(sequence, &guess, &target)
            .tiles()
            .iter()
            .map(|tile| tile.kind)
            .collect()
    }

    #[test]
    fn worked_example_eldritch_vs_drivable() {
        // Anchor at 2 in the guess, 0 in the target: the first two guess
        // letters have no target slot, and t/c/h are absent from the
        // unconsumed remainder (v, a, b, l, e).
        use TileKind::{Empty, Incorrect, Sequence};
        assert_eq!(
            kinds("dri", "eldritch", "drivable"),
            [
                Empty, Empty, Sequence, Sequence, Sequence, Incorrect, Incorrect, Incorrect
            ]
        );
    }

    #[test]
    fn guessing_the_target_yields_only_sequence_and_correct() {
        for (sequence, target) in [("uss", "tussle"), ("nso", "sensory"), ("dri", "drivable")] {
            for kind in kinds(sequence, target, target) {
                assert!(
                    matches!(kind, TileKind::Sequence | TileKind::Correct),
                    "self-guess produced {kind:?}"
                );
            }
        }
    }

    #[test]
    fn negative_offset_marks_trailing_empty() {
        // "ussher": anchor at 0; "tussle": anchor at 1. The guess window
        // starts one slot before the target, so the final guess position has
        // no target counterpart.
        use TileKind::{Correct, Empty, Incorrect, Sequence};
        assert_eq!(
            kinds("uss", "ussher", "tussle"),
            [Sequence, Sequence, Sequence, Incorrect, Correct, Empty]
        );
    }

    #[test]
    fn misplaced_letters_consume_target_occurrences() {
        // "mussel" vs "tussle": e and l exist in the target remainder but in
        // other positions.
        use TileKind::{Incorrect, Misplaced, Sequence};
        assert_eq!(
            kinds("uss", "mussel", "tussle"),
            [
                Incorrect, Sequence, Sequence, Sequence, Misplaced, Misplaced
            ]
        );
    }

    #[test]
    fn duplicate_letter_not_double_counted() {
        // "busses" vs "tussle": both target s letters are consumed by the
        // anchor match, so the trailing s finds nothing left.
        use TileKind::{Incorrect, Misplaced, Sequence};
        assert_eq!(
            kinds("uss", "busses", "tussle"),
            [Incorrect, Sequence, Sequence, Sequence, Misplaced, Incorrect]
        );
    }

    #[test]
    fn large_positive_offset_leaves_tail_undefined() {
        // Anchor at 3 in the guess vs 0 in the target pushes the comparison
        // range to end at index 6; index 7 is never classified.
        let sequence = Sequence::new("dri").unwrap();
        let guess = Word::new("abcdrief").unwrap();
        let target = Word::new("drivable").unwrap();
        let evaluation = Evaluation::calculate(sequence, &guess, &target);

        let kinds: Vec<TileKind> = evaluation.tiles().iter().map(|t| t.kind).collect();
        assert_eq!(kinds[..3], [TileKind::Empty, TileKind::Empty, TileKind::Empty]);
        assert_eq!(
            kinds[3..6],
            [TileKind::Sequence, TileKind::Sequence, TileKind::Sequence]
        );
        // 'e' survives in the target remainder (v, a, b, l, e)
        assert_eq!(kinds[6], TileKind::Misplaced);
        assert_eq!(kinds[7], TileKind::Undefined);
    }

    #[test]
    fn correct_and_misplaced_never_exceed_target_letter_count() {
        let sequence = Sequence::new("uss").unwrap();
        let target = Word::new("tussle").unwrap();

        for guess in ["lessus", "usssss", "tussle", "mussel", "busses"] {
            let guess = Word::new(guess).unwrap();
            if !sequence.contained_in(&guess) {
                continue;
            }
            let evaluation = Evaluation::calculate(sequence, &guess, &target);

            for letter in b'a'..=b'z' {
                let matched = evaluation
                    .tiles()
                    .iter()
                    .filter(|t| {
                        t.letter == letter
                            && matches!(t.kind, TileKind::Correct | TileKind::Misplaced)
                    })
                    .count();
                let available = target.bytes().iter().filter(|&&b| b == letter).count();
                assert!(
                    matched <= available,
                    "letter {} matched {matched} times but target has {available}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn evaluation_records_target_length() {
        let sequence = Sequence::new("uss").unwrap();
        let guess = Word::new("tussle").unwrap();
        let evaluation = Evaluation::calculate(sequence, &guess, &guess);
        assert_eq!(evaluation.target_len(), 6);
        assert_eq!(evaluation.tiles().len(), 6);
    }

    #[test]
    fn equal_evaluations_hash_identically() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let sequence = Sequence::new("uss").unwrap();
        let guess = Word::new("mussel").unwrap();
        let target = Word::new("tussle").unwrap();

        let a = Evaluation::calculate(sequence, &guess, &target);
        let b = Evaluation::calculate(sequence, &guess, &target);
        assert_eq!(a, b);

        let mut hasher_a = DefaultHasher::new();
        let mut hasher_b = DefaultHasher::new();
        a.hash(&mut hasher_a);
        b.hash(&mut hasher_b);
        assert_eq!(hasher_a.finish(), hasher_b.finish());
    }
}
