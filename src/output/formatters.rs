//! Formatting utilities for terminal output

use crate::core::Sequence;

/// How sequences and score markers are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Colour glyphs followed by letter codes, emoji markers
    #[default]
    Glyphs,
    /// Letter codes only, ASCII markers
    Plain,
}

impl Presentation {
    const fn right_marker(self) -> &'static str {
        match self {
            Self::Glyphs => "⬛",
            Self::Plain => "*",
        }
    }

    const fn wrong_marker(self) -> &'static str {
        match self {
            Self::Glyphs => "⬜",
            Self::Plain => "o",
        }
    }
}

/// Format a sequence, e.g. `🔴🟢🔵🟡 (RGBY)` or `RGBY`
#[must_use]
pub fn render_sequence(sequence: &Sequence, presentation: Presentation) -> String {
    match presentation {
        Presentation::Glyphs => {
            let glyphs: String = sequence.pieces().iter().map(|piece| piece.glyph()).collect();
            format!("{glyphs} ({})", sequence.codes())
        }
        Presentation::Plain => sequence.codes(),
    }
}

/// One filled marker per right-spot peg
#[must_use]
pub fn right_markers(count: u8, presentation: Presentation) -> String {
    presentation.right_marker().repeat(usize::from(count))
}

/// One hollow marker per wrong-spot peg
#[must_use]
pub fn wrong_markers(count: u8, presentation: Presentation) -> String {
    presentation.wrong_marker().repeat(usize::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_sequence_glyphs() {
        let seq = Sequence::parse("RGBO").unwrap();
        assert_eq!(
            render_sequence(&seq, Presentation::Glyphs),
            "🔴🟢🔵🟠 (RGBO)"
        );
    }

    #[test]
    fn render_sequence_plain() {
        let seq = Sequence::parse("yyrb").unwrap();
        assert_eq!(render_sequence(&seq, Presentation::Plain), "YYRB");
    }

    #[test]
    fn markers_repeat_per_peg() {
        assert_eq!(right_markers(2, Presentation::Glyphs), "⬛⬛");
        assert_eq!(wrong_markers(3, Presentation::Glyphs), "⬜⬜⬜");
        assert_eq!(right_markers(4, Presentation::Plain), "****");
        assert_eq!(wrong_markers(1, Presentation::Plain), "o");
    }

    #[test]
    fn markers_empty_for_zero() {
        assert_eq!(right_markers(0, Presentation::Glyphs), "");
        assert_eq!(wrong_markers(0, Presentation::Plain), "");
    }
}
