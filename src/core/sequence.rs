//! Fixed-width piece sequences
//!
//! The same type is used for the hidden secret and for each guess.

use super::{Piece, WIDTH};
use crate::error::GuessError;
use std::fmt;
use std::str::FromStr;

/// An ordered row of exactly [`WIDTH`] pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence([Piece; WIDTH]);

impl Sequence {
    #[inline]
    #[must_use]
    pub const fn new(pieces: [Piece; WIDTH]) -> Self {
        Self(pieces)
    }

    /// Parse a guess such as `"RRBY"` (case-insensitive)
    ///
    /// Surrounding whitespace is ignored. Length is counted in characters.
    ///
    /// # Errors
    /// Returns `GuessError::Length` if the input is not exactly [`WIDTH`]
    /// characters, or `GuessError::UnknownSymbol` for the first character
    /// that is not a colour code.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Piece, Sequence};
    ///
    /// let guess = Sequence::parse("rgby").unwrap();
    /// assert_eq!(guess.pieces()[3], Piece::Yellow);
    ///
    /// assert!(Sequence::parse("RX").is_err());
    /// assert!(Sequence::parse("RGBZ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let trimmed = input.trim();

        let actual = trimmed.chars().count();
        if actual != WIDTH {
            return Err(GuessError::Length {
                expected: WIDTH,
                actual,
            });
        }

        let mut pieces = [Piece::Red; WIDTH];
        for (position, (slot, symbol)) in pieces.iter_mut().zip(trimmed.chars()).enumerate() {
            *slot = Piece::from_code(symbol)
                .ok_or(GuessError::UnknownSymbol { symbol, position })?;
        }

        Ok(Self(pieces))
    }

    #[inline]
    #[must_use]
    pub const fn pieces(&self) -> &[Piece; WIDTH] {
        &self.0
    }

    /// Letter codes only, e.g. `RGBY`
    #[must_use]
    pub fn codes(&self) -> String {
        self.0.iter().map(|piece| piece.code()).collect()
    }
}

/// Colour-count oracles for checking the scorer
#[cfg(test)]
impl Sequence {
    /// How many times each colour occurs
    pub(crate) fn color_counts(&self) -> rustc_hash::FxHashMap<Piece, u8> {
        let mut counts = rustc_hash::FxHashMap::default();
        for &piece in &self.0 {
            *counts.entry(piece).or_insert(0) += 1;
        }
        counts
    }

    /// Largest number of pegs that can be paired one-to-one by colour with
    /// `other`, ignoring position
    pub(crate) fn shared_colors(&self, other: &Self) -> u8 {
        let theirs = other.color_counts();
        self.color_counts()
            .into_iter()
            .map(|(piece, count)| count.min(theirs.get(&piece).copied().unwrap_or(0)))
            .sum()
    }
}

impl FromStr for Sequence {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Piece::{Blue, Green, Orange, Red, Yellow};

    #[test]
    fn parse_valid() {
        let seq = Sequence::parse("RGBY").unwrap();
        assert_eq!(seq.pieces(), &[Red, Green, Blue, Yellow]);
    }

    #[test]
    fn parse_lowercase_and_mixed_case() {
        assert_eq!(
            Sequence::parse("rrbo").unwrap(),
            Sequence::new([Red, Red, Blue, Orange])
        );
        assert_eq!(
            Sequence::parse("rGbY").unwrap(),
            Sequence::parse("RGBY").unwrap()
        );
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            Sequence::parse("  oooo\n").unwrap(),
            Sequence::new([Orange; WIDTH])
        );
    }

    #[test]
    fn parse_too_short() {
        assert_eq!(
            Sequence::parse("RX"),
            Err(GuessError::Length {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn parse_too_long_and_empty() {
        assert!(matches!(
            Sequence::parse("RGBYO"),
            Err(GuessError::Length { actual: 5, .. })
        ));
        assert!(matches!(
            Sequence::parse(""),
            Err(GuessError::Length { actual: 0, .. })
        ));
    }

    #[test]
    fn parse_unknown_symbol() {
        assert_eq!(
            Sequence::parse("RGBZ"),
            Err(GuessError::UnknownSymbol {
                symbol: 'Z',
                position: 3
            })
        );
    }

    #[test]
    fn parse_reports_first_unknown_symbol() {
        assert_eq!(
            Sequence::parse("XR?Y"),
            Err(GuessError::UnknownSymbol {
                symbol: 'X',
                position: 0
            })
        );
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        // Four chars, but multi-byte
        assert!(matches!(
            Sequence::parse("🔴🟢🔵🟡"),
            Err(GuessError::UnknownSymbol { symbol: '🔴', .. })
        ));
    }

    #[test]
    fn from_str_matches_parse() {
        let seq: Sequence = "gggg".parse().unwrap();
        assert_eq!(seq, Sequence::new([Green; WIDTH]));
    }

    #[test]
    fn display_prints_codes() {
        let seq = Sequence::new([Yellow, Blue, Green, Red]);
        assert_eq!(seq.to_string(), "YBGR");
        assert_eq!(seq.codes(), "YBGR");
    }

    #[test]
    fn color_counts_with_repeats() {
        let counts = Sequence::parse("RRGB").unwrap().color_counts();
        assert_eq!(counts.get(&Red), Some(&2));
        assert_eq!(counts.get(&Green), Some(&1));
        assert_eq!(counts.get(&Blue), Some(&1));
        assert_eq!(counts.get(&Yellow), None);
    }

    #[test]
    fn shared_colors_bounded_by_supply() {
        let secret = Sequence::parse("RRGB").unwrap();
        let guess = Sequence::parse("RGGG").unwrap();
        // R: min(2, 1) + G: min(1, 3) + B: min(1, 0)
        assert_eq!(secret.shared_colors(&guess), 2);
        assert_eq!(guess.shared_colors(&secret), 2);
    }
}
