//! Corpus loading from JSON data files
//!
//! Two files per length, in the layout the upstream data pipeline produces:
//!
//! - `guesses-{len}.json` — array of legal guess words
//! - `answers-{len}-index.json` — object mapping answer words to their
//!   frequency rank (1-based, lower = more common)
//!
//! The guess list is mandatory. The rank index is not: without it the answer
//! pool falls back to the guess list and the frequency model runs flat.

use super::{CorpusError, Lexicon};
use crate::core::Word;
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::path::Path;

/// Load the lexicon for one puzzle length from `dir`
///
/// Entries that do not parse as words of the expected length are skipped,
/// not fatal; data files occasionally carry stray artifacts.
///
/// # Errors
/// Returns `CorpusError` if the guess list is missing, unreadable,
/// malformed, or yields no usable words.
pub fn load_lexicon(dir: &Path, length: usize) -> Result<Lexicon, CorpusError> {
    let guess_path = dir.join(format!("guesses-{length}.json"));
    let raw_guesses: Vec<String> = read_json(&guess_path)?;

    let guesses: FxHashSet<String> = raw_guesses
        .iter()
        .filter_map(|entry| {
            Word::new(entry.trim())
                .ok()
                .filter(|word| word.len() == length)
                .map(|word| word.text().to_string())
        })
        .collect();

    if guesses.is_empty() {
        return Err(CorpusError::EmptyGuessList { length });
    }
    debug!("loaded {} legal guesses for length {length}", guesses.len());

    let index_path = dir.join(format!("answers-{length}-index.json"));
    let ranks: Option<FxHashMap<String, u32>> = match read_json(&index_path) {
        Ok(raw) => Some(normalize_index(raw, length)),
        Err(error) => {
            warn!("rank index unavailable ({error}); frequency weights degrade to uniform");
            None
        }
    };

    let answers: Vec<Word> = match &ranks {
        Some(index) => index
            .keys()
            .filter_map(|text| Word::new(text.as_str()).ok())
            .collect(),
        // Degraded: every legal guess is a possible answer
        None => guesses
            .iter()
            .filter_map(|text| Word::new(text.as_str()).ok())
            .collect(),
    };
    debug!("answer pool for length {length}: {} words", answers.len());

    Ok(Lexicon::new(length, guesses, answers, ranks))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CorpusError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Lowercase the index keys and drop entries of the wrong length
fn normalize_index(raw: FxHashMap<String, u32>, length: usize) -> FxHashMap<String, u32> {
    raw.into_iter()
        .filter_map(|(text, rank)| {
            Word::new(text.trim())
                .ok()
                .filter(|word| word.len() == length)
                .map(|word| (word.text().to_string(), rank))
        })
        .collect()
}
