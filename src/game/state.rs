//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// [`begin`](crate::Game::begin) has not been called yet.
    NotStarted,
    /// Waiting for the next guess.
    InProgress,
    /// The game has ended. Call [`begin`](crate::Game::begin) to play again.
    GameOver(GameOverReason),
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The player guessed wrong.
    WrongGuess,
    /// Every card was resolved correctly. The player wins.
    DeckExhausted,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongGuess => f.write_str("wrong guess"),
            Self::DeckExhausted => f.write_str("deck is empty (you win)"),
        }
    }
}
