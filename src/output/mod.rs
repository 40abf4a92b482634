//! Terminal output formatting
//!
//! Display utilities for evaluations, metrics, and recommendation tables.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis, print_evaluation, print_keyboard, print_metrics, print_recommendations,
};
