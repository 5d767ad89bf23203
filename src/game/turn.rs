//! Guess resolution.

use core::cmp::Ordering;

use tracing::{debug, trace};

use super::{Game, GameOverReason, GameState};
use crate::card::Card;
use crate::error::{DrawError, GuessError};
use crate::guess::Guess;
use crate::options::TieRule;
use crate::result::{TurnReason, TurnResult};

impl Game {
    /// Resolves a guess about the challenging card.
    ///
    /// A guess is correct when the challenging card is higher and the player
    /// guessed [`Guess::Higher`], or lower and the player guessed
    /// [`Guess::Lower`]. Under the default [`TieRule::AlwaysCorrect`], equal
    /// values are correct whichever way the player guessed.
    ///
    /// A correct guess scores a point and the challenging card becomes the
    /// current card. A new challenging card is then drawn, or, if the deck is
    /// empty, the game ends as a win. A wrong guess ends the game and leaves
    /// both cards where they were.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been begun or is already over.
    /// The game is left untouched in both cases.
    pub fn check_higher_or_lower(&mut self, guess: Guess) -> Result<TurnResult, GuessError> {
        match self.state {
            GameState::NotStarted => return Err(GuessError::NotStarted),
            GameState::GameOver(_) => return Err(GuessError::GameOver),
            GameState::InProgress => {}
        }

        let (current, challenger) = self.table()?;
        let ordering = challenger.value().cmp(&current.value());
        let correct = match ordering {
            Ordering::Greater => guess == Guess::Higher,
            Ordering::Less => guess == Guess::Lower,
            Ordering::Equal => self.options.ties == TieRule::AlwaysCorrect,
        };

        trace!(%current, %challenger, %guess, correct, "guess resolved");

        if !correct {
            return Ok(self.end(current, challenger, guess, GameOverReason::WrongGuess));
        }

        self.score += 1;
        self.current = Some(challenger);

        if self.deck.is_empty() {
            return Ok(self.end(current, challenger, guess, GameOverReason::DeckExhausted));
        }
        let next = match self.deck.draw() {
            Ok(card) => card,
            Err(DrawError::EmptyDeck) => {
                return Ok(self.end(current, challenger, guess, GameOverReason::DeckExhausted));
            }
        };
        self.challenger = Some(next);

        Ok(TurnResult {
            current,
            challenger,
            guess,
            correct: true,
            score: self.score,
            remaining: self.deck.remaining(),
            game_over: false,
            reason: (ordering == Ordering::Equal).then_some(TurnReason::Tie),
        })
    }

    fn end(
        &mut self,
        current: Card,
        challenger: Card,
        guess: Guess,
        reason: GameOverReason,
    ) -> TurnResult {
        self.state = GameState::GameOver(reason);
        debug!(score = self.score, %reason, "game over");

        let (correct, reason) = match reason {
            GameOverReason::WrongGuess => (false, TurnReason::WrongGuess),
            GameOverReason::DeckExhausted => (true, TurnReason::DeckExhausted),
        };

        TurnResult {
            current,
            challenger,
            guess,
            correct,
            score: self.score,
            remaining: self.deck.remaining(),
            game_over: true,
            reason: Some(reason),
        }
    }
}
