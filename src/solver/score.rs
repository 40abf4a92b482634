//! Expected-turns scoring
//!
//! Maps a candidate guess to the expected number of turns the game will end
//! on, combining the chance the guess is itself the target with a regression
//! from "bits of information gained" to "expected additional turns". The
//! regression constants were fit offline and are fixed parameters of the
//! model, not derived at runtime.

/// Coefficient of the logarithmic term of the turns regression
const LOG_COEFF: f64 = 0.713_049;

/// Scale applied to the bits-gained argument inside the logarithm
const LOG_SCALE: f64 = 0.863_437;

/// Coefficient of the linear term of the turns regression
const LINEAR_COEFF: f64 = 0.056_182;

/// Expected turn the game ends on if this word is guessed next
///
/// Lower is better. `x = current_entropy - guess_entropy` is the uncertainty
/// left over after the guess resolves; a guess that cannot discriminate
/// (`guess_entropy == 0`) leaves all of it.
///
/// If the word is the target, the game ends on the upcoming turn. Otherwise
/// at least one more turn follows, plus the regression estimate for the
/// remaining uncertainty:
///
/// ```text
/// p·(t+1) + (1-p)·((t+1) + 1 + 0.713049·ln(1 + 0.863437·x) + 0.056182·x)
/// ```
#[must_use]
pub fn expected_score(
    word_probability: f64,
    guess_entropy: f64,
    current_entropy: f64,
    turns_taken: usize,
) -> f64 {
    let x = current_entropy - guess_entropy;
    let upcoming_turn = (turns_taken + 1) as f64;

    word_probability * upcoming_turn
        + (1.0 - word_probability)
            * (upcoming_turn + 1.0 + LOG_COEFF * LOG_SCALE.mul_add(x, 1.0).ln() + LINEAR_COEFF * x)
}
