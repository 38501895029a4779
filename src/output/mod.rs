//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_learning_stats, print_scores_report, print_solve_result, print_training_result,
};
