//! Command implementations

pub mod analyze;
pub mod play;
pub mod recommend;

pub use analyze::{AnalysisResult, analyze_word};
pub use play::run_play;
pub use recommend::run_recommend;
