//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur when beginning a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BeginError {
    /// The freshly reset deck could not supply the two starting cards.
    #[error("not enough cards to start a game")]
    NotEnoughCards,
}

impl From<DrawError> for BeginError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::NotEnoughCards,
        }
    }
}

/// Errors that can occur when reading game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The game has never been begun.
    #[error("game not started, call begin first")]
    NotStarted,
}

/// Errors that can occur when checking a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The game has never been begun.
    #[error("game not started, call begin first")]
    NotStarted,
    /// The game is over and must be begun again.
    #[error("game is over, call begin to play again")]
    GameOver,
}

impl From<QueryError> for GuessError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotStarted => Self::NotStarted,
        }
    }
}

/// Errors that can occur when parsing a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseGuessError {
    /// The input is neither higher nor lower.
    #[error("invalid guess, expected higher or lower")]
    InvalidGuess,
}
