//! Competitors and card selection.

use alloc::vec::Vec;

use rand::Rng;

use crate::hand::Hand;
use crate::options::{Control, Policy};
use crate::result::Side;

/// External source of card indices for a manually controlled side.
///
/// `choose_index` is called once per attempt with the side to move and its
/// current hand size. Returning `None` means the input could not be read as
/// an index; the game asks again, exactly as it does for an out-of-range
/// index.
pub trait Chooser {
    /// Picks an index in `0..max_exclusive` for `side`.
    fn choose_index(&mut self, side: Side, max_exclusive: usize) -> Option<usize>;
}

impl<F> Chooser for F
where
    F: FnMut(Side, usize) -> Option<usize>,
{
    fn choose_index(&mut self, side: Side, max_exclusive: usize) -> Option<usize> {
        self(side, max_exclusive)
    }
}

/// A chooser that replays a fixed list of answers, then a fallback index.
///
/// After the script runs out it answers the fallback index, clamped to the
/// last card of the hand, so a finished script can never stall a round.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    answers: Vec<Option<usize>>,
    fallback: usize,
    asked: Vec<Side>,
}

impl Scripted {
    /// Creates a chooser from a list of raw answers, falling back to index 0.
    #[must_use]
    pub fn new<I: IntoIterator<Item = Option<usize>>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            fallback: 0,
            asked: Vec::new(),
        }
    }

    /// Creates a chooser that always answers `index`, or the last card when
    /// the hand is smaller.
    #[must_use]
    pub fn always(index: usize) -> Self {
        Self {
            fallback: index,
            ..Self::default()
        }
    }

    /// Returns how many times the chooser has been asked.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.asked.len()
    }

    /// Returns the side of every request, in order.
    #[must_use]
    pub fn asked(&self) -> &[Side] {
        &self.asked
    }
}

impl Chooser for Scripted {
    fn choose_index(&mut self, side: Side, max_exclusive: usize) -> Option<usize> {
        let answer = match self.answers.get(self.asked.len()) {
            Some(answer) => *answer,
            None => Some(self.fallback.min(max_exclusive.saturating_sub(1))),
        };
        self.asked.push(side);
        answer
    }
}

impl Policy {
    /// Picks an index into `hand`, or `None` if the hand is empty.
    pub fn select<R: Rng + ?Sized>(self, hand: &Hand, rng: &mut R) -> Option<usize> {
        if hand.is_empty() {
            return None;
        }
        match self {
            Self::Lowest => Some(0),
            Self::Random => Some(rng.random_range(0..hand.len())),
        }
    }
}

/// One side of the table: a hand, a win counter, and how cards are chosen.
#[derive(Debug, Clone)]
pub struct Competitor {
    /// Which side of the table this is.
    side: Side,
    /// Cards held.
    hand: Hand,
    /// Rounds won so far.
    rounds_won: u32,
    /// Card selection.
    control: Control,
}

impl Competitor {
    /// Creates a competitor with an empty hand.
    #[must_use]
    pub const fn new(side: Side, control: Control) -> Self {
        Self {
            side,
            hand: Hand::new(),
            rounds_won: 0,
            control,
        }
    }

    /// Returns which side this competitor plays.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the competitor's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the competitor's hand mutably.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// Returns how this competitor picks cards.
    #[must_use]
    pub const fn control(&self) -> Control {
        self.control
    }

    /// Returns whether this competitor needs an external chooser.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        matches!(self.control, Control::Manual)
    }

    /// Asks for the index of the next card to play.
    ///
    /// Manual competitors defer to `chooser`, naming their side. Its answer
    /// may be out of range and must be validated by [`Hand::play`]. Automatic
    /// competitors always answer with a valid index while the hand is
    /// non-empty.
    pub fn select_card<C, R>(&self, chooser: &mut C, rng: &mut R) -> Option<usize>
    where
        C: Chooser + ?Sized,
        R: Rng + ?Sized,
    {
        match self.control {
            Control::Manual => chooser.choose_index(self.side, self.hand.len()),
            Control::Auto(policy) => policy.select(&self.hand, rng),
        }
    }

    pub(crate) const fn record_win(&mut self) {
        self.rounds_won += 1;
    }
}
