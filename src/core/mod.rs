//! Core domain types for Sqnces
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod evaluation;
mod sequence;
mod variant;
mod word;

pub use evaluation::{Evaluation, Tile, TileKind};
pub use sequence::{SEQUENCE_LEN, Sequence, SequenceError};
pub use variant::{Variant, VariantError, builtin_variant};
pub use word::{Word, WordError};
