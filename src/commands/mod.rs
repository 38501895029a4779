//! Command implementations

pub mod assist;
pub mod play;
pub mod scores;
pub mod solve;
pub mod train;
pub mod versus;

pub use assist::run_assist;
pub use play::run_play;
pub use scores::{ObservationError, ScoresReport, parse_observation, score_observations};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use train::{TrainingResult, run_training};
pub use versus::{Winner, run_versus};
