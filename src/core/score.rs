//! Guess scoring under Mastermind rules
//!
//! A score is a pair of counts:
//! - right spot: guess peg has the secret's colour at the same position
//! - wrong spot: guess peg's colour is still available elsewhere in the secret
//!
//! Every secret peg and every guess peg is consumed at most once, so repeated
//! colours are never counted beyond their supply in either sequence.

use super::{Sequence, WIDTH};

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    right: u8,
    wrong: u8,
}

impl Score {
    /// Every peg in the right spot
    pub const PERFECT: Self = Self {
        right: WIDTH as u8,
        wrong: 0,
    };

    /// Build a score from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `right + wrong` exceeds [`WIDTH`]
    #[inline]
    #[must_use]
    pub const fn new(right: u8, wrong: u8) -> Self {
        debug_assert!((right + wrong) as usize <= WIDTH, "Score exceeds board width");
        Self { right, wrong }
    }

    /// Pegs with the right colour in the right spot
    #[inline]
    #[must_use]
    pub const fn right(self) -> u8 {
        self.right
    }

    /// Pegs with a right colour in the wrong spot
    #[inline]
    #[must_use]
    pub const fn wrong(self) -> u8 {
        self.wrong
    }

    /// Check if the guess matched the secret exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.right as usize == WIDTH
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: every exact position match consumes that secret peg and
    ///    that guess peg.
    /// 2. Second pass: each unconsumed guess peg takes the lowest-index
    ///    unconsumed secret peg of the same colour, if any.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Score, Sequence};
    ///
    /// let secret = Sequence::parse("RGBY").unwrap();
    /// let guess = Sequence::parse("YBGR").unwrap();
    ///
    /// assert_eq!(Score::evaluate(&secret, &guess), Score::new(0, 4));
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Sequence, guess: &Sequence) -> Self {
        let secret = secret.pieces();
        let guess = guess.pieces();

        let mut secret_used = [false; WIDTH];
        let mut guess_used = [false; WIDTH];
        let mut right = 0u8;
        let mut wrong = 0u8;

        // First pass: exact matches
        // Allow: Index needed to access secret[i], guess[i] and both used flags
        #[allow(clippy::needless_range_loop)]
        for i in 0..WIDTH {
            if secret[i] == guess[i] {
                secret_used[i] = true;
                guess_used[i] = true;
                right += 1;
            }
        }

        // Second pass: colour present elsewhere
        for (i, &piece) in guess.iter().enumerate() {
            if guess_used[i] {
                continue;
            }

            let available = secret
                .iter()
                .zip(&secret_used)
                .position(|(&candidate, &used)| !used && candidate == piece);

            if let Some(j) = available {
                secret_used[j] = true;
                wrong += 1;
            }
        }

        Self::new(right, wrong)
    }
}
