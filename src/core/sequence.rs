//! The anchor sequence
//!
//! Every legal Sqnces guess and every hidden word contains a fixed 3-letter
//! substring. Only its first occurrence in a word is ever used for alignment.

use super::Word;
use std::fmt;

/// Length of the anchor sequence, fixed by the puzzle rules
pub const SEQUENCE_LEN: usize = 3;

/// A 3-letter anchor sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence([u8; SEQUENCE_LEN]);

/// Error type for invalid sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    WrongLength(usize),
    InvalidCharacters,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Sequence must be exactly {SEQUENCE_LEN} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Sequence must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for SequenceError {}

impl Sequence {
    /// Create a new sequence from a string
    ///
    /// # Errors
    /// Returns `SequenceError` unless the input is exactly 3 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use sqnces_solver::core::Sequence;
    ///
    /// let sequence = Sequence::new("uss").unwrap();
    /// assert_eq!(sequence.text(), "uss");
    ///
    /// assert!(Sequence::new("us").is_err());
    /// assert!(Sequence::new("u5s").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SequenceError> {
        let lower = text.to_lowercase();

        if lower.len() != SEQUENCE_LEN {
            return Err(SequenceError::WrongLength(lower.len()));
        }

        if !lower.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SequenceError::InvalidCharacters);
        }

        // Safe to unwrap: length validated above
        let letters: [u8; SEQUENCE_LEN] = lower.as_bytes().try_into().expect("length validated");

        Ok(Self(letters))
    }

    /// The sequence letters as bytes
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; SEQUENCE_LEN] {
        &self.0
    }

    /// The sequence as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Bytes are validated ASCII on construction
        std::str::from_utf8(&self.0).expect("sequence is ASCII")
    }

    /// Index of the first occurrence of this sequence in `word`
    ///
    /// Alignment between guess and target is always computed from the first
    /// occurrence, even when a word contains the sequence twice.
    #[must_use]
    pub fn find_in(&self, word: &Word) -> Option<usize> {
        let bytes = word.bytes();
        if bytes.len() < SEQUENCE_LEN {
            return None;
        }
        bytes.windows(SEQUENCE_LEN).position(|window| window == self.0)
    }

    /// True if `word` contains this sequence
    #[inline]
    #[must_use]
    pub fn contained_in(&self, word: &Word) -> bool {
        self.find_in(word).is_some()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
