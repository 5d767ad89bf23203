//! Game configuration options.

/// How a turn is scored when both cards have the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TieRule {
    /// A tie counts as a correct guess whichever way the player guessed.
    #[default]
    AlwaysCorrect,
    /// A tie counts as a wrong guess and ends the game.
    Incorrect,
}

/// Configuration options for a Higher/Lower game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo::{GameOptions, TieRule};
///
/// let options = GameOptions::default().with_ties(TieRule::Incorrect);
/// assert_eq!(options.ties, TieRule::Incorrect);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Scoring of equal-valued cards.
    pub ties: TieRule,
}

impl GameOptions {
    /// Sets the tie rule.
    #[must_use]
    pub const fn with_ties(mut self, ties: TieRule) -> Self {
        self.ties = ties;
        self
    }
}
