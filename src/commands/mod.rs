//! Command implementations

pub mod play;

pub use play::{GameEnd, run_play};
