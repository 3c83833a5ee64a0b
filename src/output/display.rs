//! Game text: banners, prompts and per-turn results

use super::formatters::{Presentation, render_sequence, right_markers, wrong_markers};
use crate::core::{MAX_ATTEMPTS, Sequence};
use crate::error::GuessError;
use crate::game::{Phase, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Prefix an emoji tag in glyph mode, nothing in plain mode
fn tagged(tag: &str, text: &str, presentation: Presentation) -> String {
    match presentation {
        Presentation::Glyphs => format!("{tag} | {text}"),
        Presentation::Plain => text.to_string(),
    }
}

/// Print the title banner and the ready message
///
/// # Errors
/// Propagates write failures.
pub fn print_welcome<W: Write>(out: &mut W, presentation: Presentation) -> io::Result<()> {
    writeln!(out, "{}", "===================".bright_cyan())?;
    writeln!(out, "{}", "==[ MASTER MIND ]==".bright_cyan().bold())?;
    writeln!(out, "{}", "===================".bright_cyan())?;
    writeln!(
        out,
        "{}",
        tagged("☑", "I've got a new sequence ready in my mind!", presentation)
    )
}

/// Print the prompt for the attempt about to be made
///
/// # Errors
/// Propagates write failures.
pub fn print_prompt<W: Write>(
    out: &mut W,
    attempt: u8,
    presentation: Presentation,
) -> io::Result<()> {
    writeln!(out)?;
    let prompt = format!("Take a guess! ({attempt}/{MAX_ATTEMPTS})");
    writeln!(out, "{}", tagged("❔", &prompt, presentation).bright_white().bold())?;
    write!(out, "> ")?;
    out.flush()
}

/// Print why the last input was rejected
///
/// # Errors
/// Propagates write failures.
pub fn print_guess_error<W: Write>(
    out: &mut W,
    error: &GuessError,
    presentation: Presentation,
) -> io::Result<()> {
    writeln!(out, "{}", tagged("❌", &error.to_string(), presentation).red())
}

/// Print the score line for one turn
///
/// # Errors
/// Propagates write failures.
pub fn print_turn<W: Write>(
    out: &mut W,
    turn: &Turn,
    presentation: Presentation,
) -> io::Result<()> {
    let right = turn.score.right();
    let wrong = turn.score.wrong();

    let line = format!(
        "Your guess [{}] result: RIGHT SPOT: {} ({right}), WRONG SPOT: {} ({wrong})!",
        render_sequence(&turn.guess, presentation),
        right_markers(right, presentation),
        wrong_markers(wrong, presentation),
    );
    writeln!(out, "{}", tagged("🤔", &line, presentation))
}

/// Print the win or loss banner and reveal the secret
///
/// Does nothing while the game is still running.
///
/// # Errors
/// Propagates write failures.
pub fn print_game_end<W: Write>(
    out: &mut W,
    phase: Phase,
    secret: &Sequence,
    presentation: Presentation,
) -> io::Result<()> {
    let (title, lines, reveal) = match phase {
        Phase::AwaitingGuess => return Ok(()),
        Phase::Won => (
            tagged_title("✅", "YOU WIN!", presentation).bright_green().bold(),
            ["That's impressive! :o", "You truly have a master mind."],
            "The sequence was indeed:",
        ),
        Phase::Lost => (
            tagged_title("❌", "GAME OVER", presentation).bright_red().bold(),
            [
                "Sadly, you did not win this time.",
                "Heads up, just try again! :D",
            ],
            "The sequence I thought of was:",
        ),
    };

    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "{reveal}")?;
    writeln!(out, "{}", render_sequence(secret, presentation).bold())?;
    writeln!(out, "{}", "=".repeat(24).bright_cyan())
}

fn tagged_title(tag: &str, text: &str, presentation: Presentation) -> String {
    match presentation {
        Presentation::Glyphs => format!("===[ {tag} {text} {tag} ]==="),
        Presentation::Plain => format!("===[ {text} ]==="),
    }
}

/// Print the notice shown when input ends mid-game
///
/// # Errors
/// Propagates write failures.
pub fn print_input_closed<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Input closed, leaving the game. Bye!".bright_black())
}
