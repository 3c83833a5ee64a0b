//! Master Mind
//!
//! A console code-breaking game: guess the hidden four-peg colour sequence in
//! at most eight attempts, guided by right-spot and wrong-spot feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Score, Sequence};
//! use mastermind::game::{GameState, Phase};
//!
//! let mut game = GameState::new(Sequence::parse("RRGB").unwrap());
//!
//! let turn = game.submit(Sequence::parse("RGGR").unwrap()).unwrap();
//! assert_eq!(turn.score, Score::new(2, 1));
//! assert_eq!(game.phase(), Phase::AwaitingGuess);
//! assert_eq!(game.current_attempt(), 2);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Secret generation and turn state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
