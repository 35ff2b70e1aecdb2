//! A competitor's hand.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::write_cards;
use crate::error::PlayError;
use crate::sort::merge_sort;

/// An ordered sequence of cards held by one competitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends dealt cards to the hand.
    pub fn receive<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Sorts the hand ascending by rank, then suit.
    pub fn sort(&mut self) {
        merge_sort(&mut self.cards);
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the hand has no cards, or
    /// [`PlayError::InvalidIndex`] if `index` is out of bounds. The hand is
    /// not modified on error.
    pub fn play(&mut self, index: usize) -> Result<Card, PlayError> {
        let len = self.cards.len();
        if len == 0 {
            return Err(PlayError::EmptyHand);
        }
        if index >= len {
            return Err(PlayError::InvalidIndex { index, len });
        }
        Ok(self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the lowest card (the first card of a sorted hand).
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(empty)");
        }
        write_cards(f, &self.cards)
    }
}
