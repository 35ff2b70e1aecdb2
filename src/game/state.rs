//! Game state types.

/// Game state.
///
/// A game moves `Dealing -> Sorting -> RoundInProgress -> RoundResolved`,
/// then back to `RoundInProgress` while both hands still hold cards, or on to
/// `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the opening hands to be dealt.
    Dealing,
    /// Hands have been dealt and are being sorted.
    Sorting,
    /// Waiting for both sides to play a card.
    RoundInProgress,
    /// The round has been scored; hands are re-sorted on advance.
    RoundResolved,
    /// No further rounds can be played.
    GameOver,
}
