//! The draw pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// Suits given to the two Jokers. Any suit would do.
const JOKER_SUITS: [Suit; 2] = [Suit::Clubs, Suit::Spades];

/// An ordered stack of cards.
///
/// The top of the deck is the end of the sequence: [`Deck::draw`] pops from
/// it. A full deck holds every suit and standard rank pair once plus two
/// Jokers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.reset();
        deck
    }

    /// Restores the deck to its full, unshuffled order.
    ///
    /// Suits are laid down in [`Suit::ALL`] order, each with the ranks of
    /// [`Rank::STANDARD`], followed by the two Jokers.
    pub fn reset(&mut self) {
        self.cards.clear();

        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                self.cards.push(Card::new(suit, rank));
            }
        }

        for suit in JOKER_SUITS {
            self.cards.push(Card::new(suit, Rank::Joker));
        }
    }

    /// Shuffles the deck in place with a Fisher–Yates pass.
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniformly chosen index in `0..=i`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[cfg(test)]
    pub(crate) fn set_draw_order(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
