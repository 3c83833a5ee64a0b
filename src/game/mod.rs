//! Game flow: secret generation and the turn state machine

mod generator;
mod state;

pub use generator::SequenceGenerator;
pub use state::{GameState, Phase, Turn};
