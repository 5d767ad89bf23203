//! Turn result types.

use core::fmt;

use crate::card::Card;
use crate::guess::Guess;

/// Why a turn ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnReason {
    /// Both cards had the same value and the tie was scored as correct.
    Tie,
    /// The guess was wrong. The game is over.
    WrongGuess,
    /// The last card was resolved. The game is over and the player wins.
    DeckExhausted,
}

impl fmt::Display for TurnReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tie => f.write_str("tie counts as correct"),
            Self::WrongGuess => f.write_str("wrong guess"),
            Self::DeckExhausted => f.write_str("deck is empty (you win)"),
        }
    }
}

/// Outcome of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// The current card the guess was made against.
    pub current: Card,
    /// The challenging card that was revealed.
    pub challenger: Card,
    /// The guess that was made.
    pub guess: Guess,
    /// Whether the guess was scored as correct.
    pub correct: bool,
    /// Score after the turn.
    pub score: usize,
    /// Cards left in the deck after the turn.
    pub remaining: usize,
    /// Whether the turn ended the game.
    pub game_over: bool,
    /// Present when the game ended or a tie was scored.
    pub reason: Option<TurnReason>,
}
