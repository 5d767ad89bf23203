//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{BeginError, QueryError};
use crate::options::GameOptions;

pub mod state;
mod turn;

pub use state::{GameOverReason, GameState};

/// A Higher/Lower game engine.
///
/// The game exclusively owns its deck and random number generator. Callers
/// drive it one call at a time: [`begin`](Self::begin), then repeated
/// [`check_higher_or_lower`](Self::check_higher_or_lower) until the game is
/// over, then optionally [`begin`](Self::begin) again on the same instance.
///
/// # Example
///
/// ```
/// use hilo::{Game, GameOptions, Guess};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.begin().unwrap();
/// assert_eq!(game.remaining_cards(), Ok(52));
///
/// let result = game.check_higher_or_lower(Guess::Higher).unwrap();
/// assert_eq!(result.game_over, !result.correct);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet drawn.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The face-up card the player guesses against.
    current: Option<Card>,
    /// The card being guessed about.
    challenger: Option<Card>,
    /// Correct guesses this game.
    score: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The game starts in [`GameState::NotStarted`]; call
    /// [`begin`](Self::begin) to deal the first two cards.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::from_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game that shuffles with the given generator.
    #[must_use]
    pub fn from_rng(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self {
            deck: Deck::new(),
            options,
            state: GameState::NotStarted,
            current: None,
            challenger: None,
            score: 0,
            rng,
        }
    }

    /// Starts a new game, discarding any previous one.
    ///
    /// Resets and shuffles the deck, zeroes the score and draws the current
    /// card followed by the challenging card.
    ///
    /// # Errors
    ///
    /// Returns [`BeginError::NotEnoughCards`] if the reset deck cannot supply
    /// two cards. A full deck always can.
    pub fn begin(&mut self) -> Result<(), BeginError> {
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        self.score = 0;

        let (current, challenger) = match self.deal_pair() {
            Ok(pair) => pair,
            Err(err) => {
                self.state = GameState::NotStarted;
                self.current = None;
                self.challenger = None;
                return Err(err);
            }
        };

        self.current = Some(current);
        self.challenger = Some(challenger);
        self.state = GameState::InProgress;

        debug!(%current, %challenger, remaining = self.deck.remaining(), "game begun");
        Ok(())
    }

    fn deal_pair(&mut self) -> Result<(Card, Card), BeginError> {
        if self.deck.remaining() < 2 {
            return Err(BeginError::NotEnoughCards);
        }
        let current = self.deck.draw()?;
        let challenger = self.deck.draw()?;
        Ok((current, challenger))
    }

    /// Returns the current game state. Never fails.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the face-up card the player guesses against.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotStarted`] before the first [`begin`](Self::begin).
    pub fn current_card(&self) -> Result<Card, QueryError> {
        self.current.ok_or(QueryError::NotStarted)
    }

    /// Returns the challenging card.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotStarted`] before the first [`begin`](Self::begin).
    pub fn challenging_card(&self) -> Result<Card, QueryError> {
        self.challenger.ok_or(QueryError::NotStarted)
    }

    /// Returns the number of correct guesses this game.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotStarted`] before the first [`begin`](Self::begin).
    pub fn score(&self) -> Result<usize, QueryError> {
        self.ensure_started()?;
        Ok(self.score)
    }

    /// Returns the number of cards left in the deck.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotStarted`] before the first [`begin`](Self::begin).
    pub fn remaining_cards(&self) -> Result<usize, QueryError> {
        self.ensure_started()?;
        Ok(self.deck.remaining())
    }

    /// Returns whether the game has ended.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotStarted`] before the first [`begin`](Self::begin).
    pub fn is_game_over(&self) -> Result<bool, QueryError> {
        self.ensure_started()?;
        Ok(matches!(self.state, GameState::GameOver(_)))
    }

    const fn ensure_started(&self) -> Result<(), QueryError> {
        match self.state {
            GameState::NotStarted => Err(QueryError::NotStarted),
            GameState::InProgress | GameState::GameOver(_) => Ok(()),
        }
    }

    fn table(&self) -> Result<(Card, Card), QueryError> {
        Ok((self.current_card()?, self.challenging_card()?))
    }
}
