//! Round and game result types.

use core::fmt;

use crate::card::Card;

/// A side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player.
    Player,
    /// The opponent.
    Opponent,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("You"),
            Self::Opponent => f.write_str("Opponent"),
        }
    }
}

/// Outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player's card had the higher rank.
    PlayerWins,
    /// The opponent's card had the higher rank.
    OpponentWins,
    /// Both cards had the same rank. Nobody scores.
    Tie,
}

impl RoundOutcome {
    /// Compares two played cards by rank only.
    #[must_use]
    pub fn resolve(player: &Card, opponent: &Card) -> Self {
        match player.rank.cmp(&opponent.rank) {
            core::cmp::Ordering::Greater => Self::PlayerWins,
            core::cmp::Ordering::Less => Self::OpponentWins,
            core::cmp::Ordering::Equal => Self::Tie,
        }
    }

    /// Returns the side that scores, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::PlayerWins => Some(Side::Player),
            Self::OpponentWins => Some(Side::Opponent),
            Self::Tie => None,
        }
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number, starting at 1.
    pub round: u32,
    /// The card the player revealed.
    pub player_card: Card,
    /// The card the opponent revealed.
    pub opponent_card: Card,
    /// Who won the round.
    pub outcome: RoundOutcome,
}

/// Final tally of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Number of rounds played.
    pub rounds_played: u32,
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the opponent.
    pub opponent_wins: u32,
}

impl GameSummary {
    /// Returns the side with more round wins, or `None` on an equal tally.
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        if self.player_wins > self.opponent_wins {
            Some(Side::Player)
        } else if self.opponent_wins > self.player_wins {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}
