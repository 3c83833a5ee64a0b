//! Turn state machine
//!
//! A `GameState` owns the secret and the attempt counter. Each validly-shaped
//! guess is fed to [`GameState::submit`], which scores it and advances the
//! phase. Malformed input never reaches this type, so it never costs an attempt.

use super::SequenceGenerator;
use crate::core::{MAX_ATTEMPTS, Score, Sequence};
use crate::error::GameError;
use log::{debug, info};
use rand::Rng;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    Won,
    Lost,
}

impl Phase {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// 1-indexed attempt this guess was made on
    pub attempt: u8,
    pub guess: Sequence,
    pub score: Score,
    /// Phase after the guess was applied
    pub phase: Phase,
}

/// One live game
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Sequence,
    attempts_used: u8,
    phase: Phase,
}

impl GameState {
    /// Start a game against a known secret
    #[must_use]
    pub fn new(secret: Sequence) -> Self {
        debug!("New game started");
        Self {
            secret,
            attempts_used: 0,
            phase: Phase::AwaitingGuess,
        }
    }

    /// Start a game with a freshly drawn secret
    pub fn start<R: Rng>(generator: &mut SequenceGenerator<R>) -> Self {
        Self::new(generator.generate())
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Sequence {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The attempt about to be made, as shown to the player (1-indexed)
    #[inline]
    #[must_use]
    pub const fn current_attempt(&self) -> u8 {
        self.attempts_used + 1
    }

    /// Score a guess and advance the game
    ///
    /// A winning guess moves to `Won` without consuming an attempt. Any other
    /// guess consumes one, and the game moves to `Lost` once all
    /// [`MAX_ATTEMPTS`] are used.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game already ended; state is left untouched.
    pub fn submit(&mut self, guess: Sequence) -> Result<Turn, GameError> {
        if self.phase.is_over() {
            return Err(GameError::GameOver);
        }

        let attempt = self.current_attempt();
        let score = Score::evaluate(&self.secret, &guess);
        debug!(
            "Attempt {attempt}/{MAX_ATTEMPTS}: {guess} scored {} right, {} wrong",
            score.right(),
            score.wrong()
        );

        if score.is_perfect() {
            self.phase = Phase::Won;
            info!("Game won on attempt {attempt}");
        } else {
            self.attempts_used += 1;
            if self.attempts_used >= MAX_ATTEMPTS {
                self.phase = Phase::Lost;
                info!("Game lost after {MAX_ATTEMPTS} attempts");
            }
        }

        Ok(Turn {
            attempt,
            guess,
            score,
            phase: self.phase,
        })
    }
}
