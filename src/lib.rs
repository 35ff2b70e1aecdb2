//! A two-player high-card duel with optional `no_std` support.
//!
//! Each side is dealt a hand from a shuffled 52-card deck. Hands are kept in
//! order with a merge sort, both sides reveal one card per round, and the
//! higher rank scores. The [`Game`] type drives dealing, rounds, and the final
//! tally; card choices come from a [`Chooser`] and notifications go to an
//! [`EventSink`].
//!
//! # Example
//!
//! ```
//! use mergewar::{Game, GameEvent, GameOptions, Scripted};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut events: Vec<GameEvent> = Vec::new();
//! let summary = game.run(&mut Scripted::always(0), &mut events).unwrap();
//! assert_eq!(summary.rounds_played, 5);
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
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod sort;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_HAND_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError, GameError, PlayError, RoundError};
pub use event::{EventSink, GameEvent};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::{Control, GameOptions, Policy};
pub use player::{Chooser, Competitor, Scripted};
pub use result::{GameSummary, RoundOutcome, RoundResult, Side};
