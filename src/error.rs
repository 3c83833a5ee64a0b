use crate::core::Piece;

/// Reasons a line of input is not a valid guess.
///
/// Both variants are recoverable: the player is re-prompted and no attempt
/// is consumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error(
        "Your guess must be a string of {expected} colour letters, got {actual}. E.g. `RRBY` (for Red Red Blue and Yellow)"
    )]
    Length { expected: usize, actual: usize },

    #[error(
        "Your guess contains a colour (`{symbol}`) that does not exist. You can choose one of the following colours: {}",
        Piece::legend()
    )]
    UnknownSymbol { symbol: char, position: usize },
}

/// Errors raised by the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
}

/// Failures that end an interactive session.
///
/// Malformed guesses are not among them; those are reported and re-prompted.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// The operating system could not provide entropy to seed the secret generator.
#[derive(Debug, thiserror::Error)]
#[error("failed to seed the random generator from the operating system: {0}")]
pub struct EntropyError(pub String);
