//! A Higher/Lower card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a 54-card [`Deck`] (52 cards
//! plus two Jokers) and resolves guesses about whether a freshly revealed
//! challenging card outranks the current card.
//!
//! # Example
//!
//! ```
//! use hilo::{Game, GameOptions, Guess};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.begin().unwrap();
//!
//! let current = game.current_card().unwrap();
//! let challenger = game.challenging_card().unwrap();
//! let guess = if challenger.value() >= current.value() {
//!     Guess::Higher
//! } else {
//!     Guess::Lower
//! };
//!
//! let result = game.check_higher_or_lower(guess).unwrap();
//! assert!(result.correct);
//! assert_eq!(result.score, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod guess;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_COUNT, Rank, Suit};
pub use deck::Deck;
pub use error::{BeginError, DrawError, GuessError, ParseGuessError, QueryError};
pub use game::{Game, GameOverReason, GameState};
pub use guess::Guess;
pub use options::{GameOptions, TieRule};
pub use result::{TurnReason, TurnResult};
