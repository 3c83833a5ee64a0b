//! Mastermind piece colours
//!
//! A closed set of five colours. Each colour carries a one-letter code used for
//! parsing guesses and a glyph used for rendering.

use std::fmt;

/// A single coloured peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
}

impl Piece {
    /// Every colour, in code-listing order
    pub const ALL: [Self; 5] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
    ];

    /// Single-letter code (always uppercase)
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
        }
    }

    /// Emoji glyph for the colour
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Red => '🔴',
            Self::Green => '🟢',
            Self::Blue => '🔵',
            Self::Yellow => '🟡',
            Self::Orange => '🟠',
        }
    }

    /// Human-readable colour name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
        }
    }

    /// Look up a piece by its code, ignoring case
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Piece;
    ///
    /// assert_eq!(Piece::from_code('b'), Some(Piece::Blue));
    /// assert_eq!(Piece::from_code('Z'), None);
    /// ```
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        Self::ALL.into_iter().find(|piece| piece.code() == upper)
    }

    /// Comma-separated listing of every colour with its code, e.g. `Red (R), Green (G), ...`
    #[must_use]
    pub fn legend() -> String {
        Self::ALL
            .iter()
            .map(|piece| format!("{} ({})", piece.name(), piece.code()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
