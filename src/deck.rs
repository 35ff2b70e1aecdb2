//! The draw pile.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DeckError};

/// A standard 52-card deck. Cards are dealt from the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with every rank and suit exactly once.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The last card is dealt first. Used to stage exact draw orders.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more than [`DECK_SIZE`] cards or any
    /// card appears twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards { len: cards.len() });
        }

        let mut seen: u64 = 0;
        for card in &cards {
            let bit = 1u64 << card_index(card);
            if seen & bit != 0 {
                return Err(DeckError::DuplicateCard(*card));
            }
            seen |= bit;
        }

        Ok(Self { cards })
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `n` cards from the top of the deck.
    ///
    /// The first returned card is the first one drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than `n` cards
    /// remain. The deck is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DealError::InsufficientCards {
                requested: n,
                remaining,
            });
        }

        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        Ok(dealt)
    }

    /// Returns the remaining cards, next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// Position of a card in a fresh deck, 0..52.
const fn card_index(card: &Card) -> u32 {
    card.suit as u32 * 13 + (card.rank.value() as u32 - 2)
}

pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}
