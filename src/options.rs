//! Game configuration options.

/// Automatic card-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Policy {
    /// Always play the lowest remaining card.
    #[default]
    Lowest,
    /// Play a uniformly random card.
    Random,
}

/// How a competitor picks the card to play each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The index is supplied by an external [`Chooser`](crate::Chooser).
    Manual,
    /// The index is picked by a built-in policy.
    Auto(Policy),
}

/// Configuration options for a game.
///
/// Deck composition, the tie rule, and the win condition are fixed; only the
/// hand size and who controls each side can be changed.
///
/// ```
/// use mergewar::{Control, GameOptions, Policy};
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_opponent(Control::Auto(Policy::Random));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each side (1 to 26).
    pub hand_size: usize,
    /// Control of the player's side.
    pub player: Control,
    /// Control of the opponent's side.
    pub opponent: Control,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            player: Control::Manual,
            opponent: Control::Auto(Policy::Lowest),
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each side.
    ///
    /// # Example
    ///
    /// ```
    /// use mergewar::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(10);
    /// assert_eq!(options.hand_size, 10);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets how the player's cards are chosen.
    ///
    /// # Example
    ///
    /// ```
    /// use mergewar::{Control, GameOptions, Policy};
    ///
    /// let options = GameOptions::default().with_player(Control::Auto(Policy::Lowest));
    /// assert_eq!(options.player, Control::Auto(Policy::Lowest));
    /// ```
    #[must_use]
    pub const fn with_player(mut self, control: Control) -> Self {
        self.player = control;
        self
    }

    /// Sets how the opponent's cards are chosen.
    ///
    /// # Example
    ///
    /// ```
    /// use mergewar::{Control, GameOptions, Policy};
    ///
    /// let options = GameOptions::default().with_opponent(Control::Auto(Policy::Random));
    /// assert_eq!(options.opponent, Control::Auto(Policy::Random));
    /// ```
    #[must_use]
    pub const fn with_opponent(mut self, control: Control) -> Self {
        self.opponent = control;
        self
    }
}
