//! Interactive line-oriented game
//!
//! Reads one guess per line, rejects malformed input for free, and stops on a
//! win, a loss, or end of input.

use crate::core::Sequence;
use crate::error::{GameError, PlayError};
use crate::game::{GameState, Phase};
use crate::output::{
    Presentation, print_game_end, print_guess_error, print_input_closed, print_prompt, print_turn,
    print_welcome,
};
use log::debug;
use std::io::{BufRead, Write};

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Won { attempts: u8 },
    Lost,
    /// Input ran out before the game was decided
    InputClosed,
}

/// Run one game to completion
///
/// # Errors
///
/// Returns `PlayError::Io` if writing output or reading input fails, and
/// `PlayError::Game` if `game` has already ended. Malformed guesses,
/// including lines that are not valid UTF-8, are reported to the player and
/// never end the game.
pub fn run_play<R, W>(
    mut game: GameState,
    mut input: R,
    out: &mut W,
    presentation: Presentation,
) -> Result<GameEnd, PlayError>
where
    R: BufRead,
    W: Write,
{
    if game.phase().is_over() {
        return Err(GameError::GameOver.into());
    }

    print_welcome(out, presentation)?;

    let mut raw = Vec::new();
    loop {
        print_prompt(out, game.current_attempt(), presentation)?;

        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            debug!("Input closed on attempt {}", game.current_attempt());
            print_input_closed(out)?;
            return Ok(GameEnd::InputClosed);
        }

        // Invalid bytes become U+FFFD and are rejected like any unknown colour
        let line = String::from_utf8_lossy(&raw);
        let guess = match Sequence::parse(&line) {
            Ok(guess) => guess,
            Err(err) => {
                debug!("Rejected guess {:?}: {err}", line.trim());
                print_guess_error(out, &err, presentation)?;
                continue;
            }
        };

        let turn = game.submit(guess)?;
        print_turn(out, &turn, presentation)?;

        match turn.phase {
            Phase::AwaitingGuess => {}
            Phase::Won => {
                print_game_end(out, Phase::Won, game.secret(), presentation)?;
                return Ok(GameEnd::Won {
                    attempts: turn.attempt,
                });
            }
            Phase::Lost => {
                print_game_end(out, Phase::Lost, game.secret(), presentation)?;
                return Ok(GameEnd::Lost);
            }
        }
    }
}
