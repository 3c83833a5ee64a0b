//! Core domain types for Mastermind
//!
//! Pieces, sequences and the scoring rule. Everything here is pure and does no I/O.

mod piece;
mod score;
mod sequence;

pub use piece::Piece;
pub use score::Score;
pub use sequence::Sequence;

/// Number of pegs in every secret and guess
pub const WIDTH: usize = 4;

/// Guesses allowed before the game is lost
pub const MAX_ATTEMPTS: u8 = 8;
