use crate::card::MAX_HAND_SIZE;
use crate::error::DealError;
use crate::event::{EventSink, GameEvent};

use super::{Game, GameState};

impl Game {
    /// Shuffles the deck, deals the opening hands, and sorts them.
    ///
    /// The hand size and both hands are checked against the deck before it
    /// is shuffled or any card moves, so a failed deal leaves the deck
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state, the hand size is
    /// outside 1 to 26, or the deck cannot supply two full hands.
    pub fn deal<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let hand_size = self.options.hand_size;
        if hand_size == 0 || hand_size > MAX_HAND_SIZE {
            return Err(DealError::InvalidHandSize);
        }

        let remaining = self.deck.len();
        let cards_needed = hand_size * 2;
        if cards_needed > remaining {
            return Err(DealError::InsufficientCards {
                requested: cards_needed,
                remaining,
            });
        }

        if self.shuffle_on_deal {
            self.deck.shuffle(&mut self.rng);
        }

        let player_cards = self.deck.deal(hand_size)?;
        let opponent_cards = self.deck.deal(hand_size)?;
        self.player.hand_mut().receive(player_cards);
        self.opponent.hand_mut().receive(opponent_cards);
        log::debug!(
            "dealt {hand_size} cards to each side, {} left in the deck",
            self.deck.len()
        );

        self.state = GameState::Sorting;
        self.sort_hands();
        self.state = GameState::RoundInProgress;

        sink.notify(&GameEvent::Dealt { hand_size });
        Ok(())
    }
}
