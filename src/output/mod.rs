//! Terminal output formatting
//!
//! Rendering helpers and the game's printed text.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_end, print_guess_error, print_input_closed, print_prompt, print_turn, print_welcome,
};
pub use formatters::Presentation;
