//! Watch mode: the bot plays random rounds in a terminal UI

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
