//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards than a standard deck holds.
    #[error("a deck holds at most 52 cards, got {len}")]
    TooManyCards {
        /// Number of cards supplied.
        len: usize,
    },
    /// The same card appears twice.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur while dealing the opening hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Hand size is zero or more than half a deck.
    #[error("hand size must be between 1 and 26 cards")]
    InvalidHandSize,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when playing a card from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Index is outside the hand.
    #[error("invalid card index {index} for a hand of {len} cards")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// The hand has no cards left.
    #[error("no cards to play")]
    EmptyHand,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for playing a round.
    #[error("invalid game state for playing a round")]
    InvalidState,
    /// A competitor was asked to play from an empty hand.
    #[error("attempted to play from an empty hand")]
    EmptyHand,
}

/// Errors that abort a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Setup failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A round could not be completed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
