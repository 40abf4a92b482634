//! Analysis algorithms over the candidate set
//!
//! Filtering by evaluation history, the frequency likelihood model, weighted
//! entropy of hypothetical guesses, and the expected-turns ranking built on
//! top of them.

mod entropy;
mod filter;
mod frequency;
mod recommend;
mod score;

pub use entropy::{guess_entropy, shannon_entropy};
pub use filter::{filter_candidates, is_consistent};
pub use frequency::{FrequencyModel, SIGMOID_SLOPE, UNRANKED};
pub use recommend::{Recommendation, rank_candidates, rank_candidates_with};
pub use score::expected_score;
