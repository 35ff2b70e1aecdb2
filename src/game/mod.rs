//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::GameError;
use crate::event::EventSink;
use crate::options::GameOptions;
use crate::player::{Chooser, Competitor};
use crate::result::{GameSummary, Side};

mod deal;
mod round;
pub mod state;

pub use state::GameState;

/// A game between the player and the opponent.
///
/// The game owns the deck and both competitors for its whole lifetime. Use
/// [`GameOptions`] to configure the hand size and who controls each side.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Whether the deck is shuffled once the deal has been validated.
    shuffle_on_deal: bool,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Number of the next round to be played, starting at 1.
    round: u32,
    /// The player's side.
    player: Competitor,
    /// The opponent's side.
    opponent: Competitor,
    /// Random number generator for shuffling and random picks.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a full deck.
    ///
    /// The deck is shuffled from `seed` when the hands are dealt, after the
    /// hand size has been checked.
    ///
    /// # Example
    ///
    /// ```
    /// use mergewar::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self::with_deck(options, Deck::new(), seed);
        game.shuffle_on_deal = true;
        game
    }

    /// Creates a game that deals from `deck` in its current order.
    ///
    /// `seed` still drives [`Policy::Random`](crate::Policy::Random) picks.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck, seed: u64) -> Self {
        Self {
            deck,
            shuffle_on_deal: false,
            options,
            state: GameState::Dealing,
            round: 1,
            player: Competitor::new(Side::Player, options.player),
            opponent: Competitor::new(Side::Opponent, options.opponent),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays a whole game: deals, then plays rounds until one hand is empty.
    ///
    /// Invalid manual choices are re-prompted through `chooser` and never
    /// abort the game.
    ///
    /// # Example
    ///
    /// ```
    /// use mergewar::{Game, GameEvent, GameOptions, Scripted};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// let mut events: Vec<GameEvent> = Vec::new();
    /// let summary = game.run(&mut Scripted::always(0), &mut events).unwrap();
    /// assert_eq!(summary.rounds_played, 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the hands cannot be dealt or a round fails an
    /// internal invariant.
    pub fn run<C, S>(&mut self, chooser: &mut C, sink: &mut S) -> Result<GameSummary, GameError>
    where
        C: Chooser + ?Sized,
        S: EventSink + ?Sized,
    {
        self.deal(sink)?;

        while self.state != GameState::GameOver {
            self.play_round(chooser, sink)?;
            self.advance(sink)?;
        }

        Ok(self.summary())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of the next round to be played.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the player's side.
    #[must_use]
    pub const fn player(&self) -> &Competitor {
        &self.player
    }

    /// Returns the opponent's side.
    #[must_use]
    pub const fn opponent(&self) -> &Competitor {
        &self.opponent
    }

    /// Returns the cards not yet dealt.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current tally.
    #[must_use]
    pub const fn summary(&self) -> GameSummary {
        GameSummary {
            rounds_played: self.round - 1,
            player_wins: self.player.rounds_won(),
            opponent_wins: self.opponent.rounds_won(),
        }
    }

    fn sort_hands(&mut self) {
        self.player.hand_mut().sort();
        self.opponent.hand_mut().sort();
        log::trace!(
            "sorted hands: player [{}], opponent [{}]",
            self.player.hand(),
            self.opponent.hand()
        );
    }
}
