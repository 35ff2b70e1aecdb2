use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{PlayError, RoundError};
use crate::event::{EventSink, GameEvent};
use crate::player::{Chooser, Competitor};
use crate::result::{RoundOutcome, RoundResult, Side};

use super::{Game, GameState};

/// Takes one card from `competitor`, asking again until the choice is valid.
fn take_card<C, S>(
    competitor: &mut Competitor,
    chooser: &mut C,
    rng: &mut ChaCha8Rng,
    sink: &mut S,
) -> Result<Card, RoundError>
where
    C: Chooser + ?Sized,
    S: EventSink + ?Sized,
{
    loop {
        let hand_size = competitor.hand().len();
        if hand_size == 0 {
            return Err(RoundError::EmptyHand);
        }

        let choice = competitor.select_card(chooser, rng);
        if let Some(index) = choice {
            match competitor.hand_mut().play(index) {
                Ok(card) => return Ok(card),
                Err(PlayError::EmptyHand) => return Err(RoundError::EmptyHand),
                Err(PlayError::InvalidIndex { .. }) => {}
            }
        }

        let side = competitor.side();
        log::warn!("rejected card choice {choice:?} from {side:?} for a hand of {hand_size}");
        sink.notify(&GameEvent::InvalidChoice {
            side,
            index: choice,
            hand_size,
        });
    }
}

impl Game {
    /// Plays one round: both sides reveal a card and the higher rank scores.
    ///
    /// The player picks first, then the opponent. Equal ranks score nothing.
    /// The game is left in [`GameState::RoundResolved`]; call
    /// [`advance`](Self::advance) to continue.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, or if either hand is empty
    /// while a round is in progress.
    pub fn play_round<C, S>(&mut self, chooser: &mut C, sink: &mut S) -> Result<RoundResult, RoundError>
    where
        C: Chooser + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state != GameState::RoundInProgress {
            return Err(RoundError::InvalidState);
        }
        if self.player.hand().is_empty() || self.opponent.hand().is_empty() {
            return Err(RoundError::EmptyHand);
        }

        let round = self.round;
        sink.notify(&GameEvent::RoundStarted {
            round,
            hand: self.player.hand().clone(),
            opponent_cards: self.opponent.hand().len(),
        });

        let player_card = take_card(&mut self.player, chooser, &mut self.rng, sink)?;
        sink.notify(&GameEvent::CardRevealed {
            side: Side::Player,
            card: player_card,
        });

        let opponent_card = take_card(&mut self.opponent, chooser, &mut self.rng, sink)?;
        sink.notify(&GameEvent::CardRevealed {
            side: Side::Opponent,
            card: opponent_card,
        });

        let outcome = RoundOutcome::resolve(&player_card, &opponent_card);
        match outcome.winner() {
            Some(Side::Player) => self.player.record_win(),
            Some(Side::Opponent) => self.opponent.record_win(),
            None => {}
        }
        self.round += 1;
        self.state = GameState::RoundResolved;

        log::debug!("round {round}: {player_card} vs {opponent_card} -> {outcome:?}");
        sink.notify(&GameEvent::RoundResolved {
            round,
            outcome,
            player_wins: self.player.rounds_won(),
            opponent_wins: self.opponent.rounds_won(),
        });

        Ok(RoundResult {
            round,
            player_card,
            opponent_card,
            outcome,
        })
    }

    /// Re-sorts both hands and moves on to the next round, or ends the game
    /// once either hand is empty.
    ///
    /// Returns `true` if another round can be played.
    ///
    /// # Errors
    ///
    /// Returns an error if the current round has not been resolved.
    pub fn advance<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool, RoundError> {
        if self.state != GameState::RoundResolved {
            return Err(RoundError::InvalidState);
        }

        self.sort_hands();

        if self.player.hand().is_empty() || self.opponent.hand().is_empty() {
            self.state = GameState::GameOver;
            let summary = self.summary();
            log::info!(
                "game over after {} rounds: player {} - opponent {}",
                summary.rounds_played,
                summary.player_wins,
                summary.opponent_wins
            );
            sink.notify(&GameEvent::GameOver { summary });
            return Ok(false);
        }

        self.state = GameState::RoundInProgress;
        Ok(true)
    }
}
