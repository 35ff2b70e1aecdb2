//! Notifications emitted while a game runs.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::{GameSummary, RoundOutcome, Side};

/// Something the game wants to show.
///
/// The [`Display`](fmt::Display) impl renders the message a terminal front
/// end would print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Both hands were dealt and sorted.
    Dealt {
        /// Cards dealt to each side.
        hand_size: usize,
    },
    /// A round is about to be played.
    RoundStarted {
        /// The round number.
        round: u32,
        /// The player's sorted hand.
        hand: Hand,
        /// How many cards the opponent holds.
        opponent_cards: usize,
    },
    /// The chooser gave an unusable answer and will be asked again.
    InvalidChoice {
        /// The side that was asked.
        side: Side,
        /// The rejected index, or `None` if the input was not a number.
        index: Option<usize>,
        /// Cards in the hand at the time.
        hand_size: usize,
    },
    /// A side revealed its card.
    CardRevealed {
        /// Who played.
        side: Side,
        /// The card played.
        card: Card,
    },
    /// A round was scored.
    RoundResolved {
        /// The round number.
        round: u32,
        /// Who won.
        outcome: RoundOutcome,
        /// Player's total after this round.
        player_wins: u32,
        /// Opponent's total after this round.
        opponent_wins: u32,
    },
    /// The game has ended.
    GameOver {
        /// Final tally.
        summary: GameSummary,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealt { hand_size } => write!(f, "Dealt {hand_size} cards to each side."),
            Self::RoundStarted {
                round,
                hand,
                opponent_cards,
            } => write!(
                f,
                "Round {round}\nPlayer's hand: {hand}\nOpponent's hand: {opponent_cards} cards"
            ),
            Self::InvalidChoice {
                side,
                index,
                hand_size,
            } => {
                let last = hand_size.saturating_sub(1);
                let who = match side {
                    Side::Player => "you",
                    Side::Opponent => "the opponent",
                };
                match index {
                    Some(index) => write!(
                        f,
                        "Error: invalid card index {index}. Please enter an index from 0 to {last} for {who}."
                    ),
                    None => write!(
                        f,
                        "Error: not a number. Please enter an index from 0 to {last} for {who}."
                    ),
                }
            }
            Self::CardRevealed { side, card } => match side {
                Side::Player => write!(f, "You played: {card}"),
                Side::Opponent => write!(f, "Opponent played: {card}"),
            },
            Self::RoundResolved { outcome, .. } => match outcome {
                RoundOutcome::PlayerWins => f.write_str("You win this round!"),
                RoundOutcome::OpponentWins => f.write_str("Opponent wins this round!"),
                RoundOutcome::Tie => f.write_str("Same rank, nobody scores this round."),
            },
            Self::GameOver { summary } => {
                writeln!(f, "Game over!")?;
                writeln!(f, "You won {} rounds.", summary.player_wins)?;
                write!(f, "Opponent won {} rounds.", summary.opponent_wins)?;
                match summary.winner() {
                    Some(Side::Player) => write!(f, "\nYou win the game!"),
                    Some(Side::Opponent) => write!(f, "\nOpponent wins the game."),
                    None => write!(f, "\nThe game is a draw."),
                }
            }
        }
    }
}

/// Receiver for [`GameEvent`]s.
pub trait EventSink {
    /// Handles one event.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Records every event in order.
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
