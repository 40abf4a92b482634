//! Candidate filtering by evaluation history
//!
//! After each accepted guess, the set of still-possible target words shrinks
//! to those consistent with every evaluation seen so far. Consistency is
//! checked per history entry through the same anchor alignment the evaluator
//! uses, so a candidate whose anchor sits at a different offset than the
//! target's is judged against its own offset.

use crate::core::{Evaluation, SEQUENCE_LEN, Sequence, TileKind, Word};

/// Check one candidate against one history entry
///
/// `first_entry` enables the cross-length check: the first evaluation of a
/// run pins the target length, and candidates of any other length are
/// rejected outright.
#[must_use]
pub fn is_consistent(
    candidate: &Word,
    sequence: Sequence,
    guess: &Word,
    evaluation: &Evaluation,
    first_entry: bool,
) -> bool {
    if first_entry && candidate.len() != evaluation.target_len() {
        return false;
    }

    let Some(candidate_idx) = sequence.find_in(candidate) else {
        return false;
    };
    let Some(guess_idx) = sequence.find_in(guess) else {
        return false;
    };

    let offset = guess_idx as isize - candidate_idx as isize;

    // Correct tiles pin letters through the alignment.
    for (i, tile) in evaluation.tiles().iter().enumerate() {
        if tile.kind != TileKind::Correct {
            continue;
        }
        let candidate_i = i as isize - offset;
        if candidate_i < 0 || candidate_i >= candidate.len() as isize {
            return false;
        }
        if candidate.letter_at(candidate_i as usize) != tile.letter {
            return false;
        }
    }

    // The anchor span is blanked before letter-presence checks: those three
    // letters are accounted for by the sequence match, not by tiles.
    let mut blanked = candidate.bytes().to_vec();
    for slot in &mut blanked[candidate_idx..candidate_idx + SEQUENCE_LEN] {
        *slot = b' ';
    }

    for (i, tile) in evaluation.tiles().iter().enumerate() {
        match tile.kind {
            TileKind::Incorrect => {
                if blanked.contains(&tile.letter) {
                    return false;
                }
            }
            TileKind::Misplaced => {
                let candidate_i = i as isize - offset;
                if candidate_i >= 0
                    && candidate_i < candidate.len() as isize
                    && candidate.letter_at(candidate_i as usize) == tile.letter
                {
                    return false;
                }
                if !blanked.contains(&tile.letter) {
                    return false;
                }
            }
            // Sequence and Empty tiles add nothing beyond the substring and
            // offset checks already made; Correct was handled above.
            _ => {}
        }
    }

    true
}

/// Retain only the candidates consistent with every history entry
///
/// Monotonic (never adds words) and idempotent: re-applying the same history
/// to an already-filtered set removes nothing further.
pub fn filter_candidates(
    candidates: &mut Vec<Word>,
    sequence: Sequence,
    history: &[(Word, Evaluation)],
) {
    candidates.retain(|candidate| {
        history.iter().enumerate().all(|(entry, (guess, evaluation))| {
            is_consistent(candidate, sequence, guess, evaluation, entry == 0)
        })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Evaluation;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn entry(sequence: Sequence, guess: &str, target: &str) -> (Word, Evaluation) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let evaluation = Evaluation::calculate(sequence, &guess, &target);
        (guess, evaluation)
    }

    #[test]
    fn target_always_survives_its_own_history() {
        let sequence = Sequence::new("uss").unwrap();
        let target = Word::new("tussle").unwrap();
        let history = vec![
            entry(sequence, "mussel", "tussle"),
            entry(sequence, "busses", "tussle"),
        ];

        for (i, (guess, evaluation)) in history.iter().enumerate() {
            assert!(
                is_consistent(&target, sequence, guess, evaluation, i == 0),
                "target eliminated by its own guess {}",
                guess.text()
            );
        }
    }

    #[test]
    fn candidates_missing_the_sequence_are_rejected() {
        let sequence = Sequence::new("uss").unwrap();
        let (guess, evaluation) = entry(sequence, "mussel", "tussle");

        let no_anchor = Word::new("tassel").unwrap();
        assert!(!is_consistent(&no_anchor, sequence, &guess, &evaluation, true));
    }

    #[test]
    fn first_entry_rejects_other_lengths() {
        let sequence = Sequence::new("uss").unwrap();
        let (guess, evaluation) = entry(sequence, "mussel", "tussle");

        let longer = Word::new("mussels").unwrap();
        assert!(!is_consistent(&longer, sequence, &guess, &evaluation, true));
    }

    #[test]
    fn incorrect_letter_excludes_candidates_containing_it() {
        let sequence = Sequence::new("uss").unwrap();
        // "mussel" vs "tussle": m is Incorrect
        let (guess, evaluation) = entry(sequence, "mussel", "tussle");

        let with_m = Word::new("mussed").unwrap();
        assert!(!is_consistent(&with_m, sequence, &guess, &evaluation, true));
    }

    #[test]
    fn incorrect_letter_inside_anchor_span_is_ignored() {
        let sequence = Sequence::new("uss").unwrap();
        // "busses" vs "tussle": trailing s is Incorrect, but every candidate
        // necessarily contains s inside its anchor span. The span must be
        // blanked before the containment check or nothing would survive.
        let (guess, evaluation) = entry(sequence, "busses", "tussle");

        let target = Word::new("tussle").unwrap();
        assert!(is_consistent(&target, sequence, &guess, &evaluation, true));
    }

    #[test]
    fn misplaced_letter_requires_presence_elsewhere() {
        let sequence = Sequence::new("uss").unwrap();
        // "mussel" vs "tussle": e at guess index 4 is Misplaced
        let (guess, evaluation) = entry(sequence, "mussel", "tussle");

        // No e outside the anchor span
        let without_e = Word::new("russia").unwrap();
        assert!(!is_consistent(&without_e, sequence, &guess, &evaluation, true));

        // Has an e, but in the Misplaced tile's own aligned slot
        let e_in_place = Word::new("cussed").unwrap();
        assert!(!is_consistent(&e_in_place, sequence, &guess, &evaluation, true));
    }

    #[test]
    fn correct_tile_pins_aligned_letter() {
        let sequence = Sequence::new("uss").unwrap();
        // "ussher" vs "tussle": e at guess index 4 aligns to target index 5
        let (guess, evaluation) = entry(sequence, "ussher", "tussle");

        let target = Word::new("tussle").unwrap();
        assert!(is_consistent(&target, sequence, &guess, &evaluation, true));

        // Same shape but wrong letter in the pinned slot
        let wrong_slot = Word::new("tussah").unwrap();
        assert!(!is_consistent(&wrong_slot, sequence, &guess, &evaluation, true));
    }

    #[test]
    fn filter_is_monotonic() {
        let sequence = Sequence::new("uss").unwrap();
        let mut candidates = words(&["tussle", "mussel", "busses", "cussed", "mussed"]);
        let before = candidates.clone();
        let history = vec![entry(sequence, "mussel", "tussle")];

        filter_candidates(&mut candidates, sequence, &history);

        assert!(candidates.iter().all(|w| before.contains(w)));
        assert!(candidates.contains(&Word::new("tussle").unwrap()));
    }

    #[test]
    fn filter_is_idempotent() {
        let sequence = Sequence::new("uss").unwrap();
        let mut candidates = words(&["tussle", "mussel", "busses", "cussed", "tusche"]);
        let history = vec![
            entry(sequence, "mussel", "tussle"),
            entry(sequence, "busses", "tussle"),
        ];

        filter_candidates(&mut candidates, sequence, &history);
        let once = candidates.clone();
        filter_candidates(&mut candidates, sequence, &history);

        assert_eq!(candidates, once);
    }

    #[test]
    fn empty_history_removes_nothing() {
        let sequence = Sequence::new("uss").unwrap();
        let mut candidates = words(&["tussle", "mussel"]);

        filter_candidates(&mut candidates, sequence, &[]);

        assert_eq!(candidates.len(), 2);
    }
}
