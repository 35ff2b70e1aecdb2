//! Game integration tests.

use std::collections::HashSet;

use mergewar::{
    Card, Control, DECK_SIZE, DealError, Deck, DeckError, Game, GameEvent, GameOptions, GameState, Hand,
    PlayError, Policy, Rank, RoundError, RoundOutcome, Scripted, Side, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds an unshuffled game whose deck deals `draws` in order.
fn staged_game(options: GameOptions, draws: &[Card]) -> Game {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Game::with_deck(options, Deck::from_cards(cards).unwrap(), 1)
}

fn count(events: &[GameEvent], pred: impl Fn(&GameEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}

#[test]
fn card_order_is_rank_then_suit() {
    assert!(card(Rank::Ace, Suit::Clubs) > card(Rank::King, Suit::Spades));
    assert!(card(Rank::Seven, Suit::Clubs) < card(Rank::Seven, Suit::Diamonds));
    assert!(card(Rank::Seven, Suit::Hearts) < card(Rank::Seven, Suit::Spades));
    assert_ne!(
        card(Rank::Seven, Suit::Hearts).cmp(&card(Rank::Seven, Suit::Clubs)),
        std::cmp::Ordering::Equal
    );

    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Queen.value(), 12);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(Rank::Ace.value(), 14);

    assert_eq!(card(Rank::King, Suit::Hearts).to_string(), "K of Hearts");
    assert_eq!(card(Rank::Ten, Suit::Spades).to_string(), "10 of Spades");
}

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&card(rank, suit)));
        }
    }
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(a, b);
    assert_ne!(a, Deck::new());

    let mut shuffled = a.cards().to_vec();
    shuffled.sort();
    let mut fresh = Deck::new().cards().to_vec();
    fresh.sort();
    assert_eq!(shuffled, fresh);
}

#[test]
fn deal_removes_cards_from_deck() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(11));

    let dealt = deck.deal(5).unwrap();
    assert_eq!(dealt.len(), 5);
    assert_eq!(deck.len(), DECK_SIZE - 5);
    for c in &dealt {
        assert!(!deck.contains(c));
    }
}

#[test]
fn deal_draws_from_the_end() {
    let mut deck = Deck::from_cards(vec![
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
    ])
    .unwrap();

    let dealt = deck.deal(2).unwrap();
    assert_eq!(
        dealt,
        vec![card(Rank::Four, Suit::Clubs), card(Rank::Three, Suit::Clubs)]
    );
    assert_eq!(deck.cards(), &[card(Rank::Two, Suit::Clubs)]);
}

#[test]
fn from_cards_rejects_impossible_decks() {
    let mut cards = Deck::new().cards().to_vec();
    cards.push(card(Rank::Ace, Suit::Spades));
    assert_eq!(
        Deck::from_cards(cards).unwrap_err(),
        DeckError::TooManyCards { len: 53 }
    );

    let twice = vec![
        card(Rank::Five, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Five, Suit::Hearts),
    ];
    assert_eq!(
        Deck::from_cards(twice).unwrap_err(),
        DeckError::DuplicateCard(card(Rank::Five, Suit::Hearts))
    );

    let full = Deck::from_cards(Deck::new().cards().to_vec()).unwrap();
    assert_eq!(full, Deck::new());
    assert!(Deck::from_cards(Vec::new()).unwrap().is_empty());
}

#[test]
fn deal_shortfall_is_an_error_and_leaves_deck_alone() {
    let mut deck = Deck::new();
    deck.deal(50).unwrap();

    assert_eq!(
        deck.deal(3).unwrap_err(),
        DealError::InsufficientCards {
            requested: 3,
            remaining: 2
        }
    );
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.deal(2).unwrap().len(), 2);
    assert!(deck.is_empty());
}

#[test]
fn hand_play_validates_index() {
    let mut hand = Hand::new();
    assert_eq!(hand.play(0).unwrap_err(), PlayError::EmptyHand);

    hand.receive([
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Two, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
    ]);
    hand.sort();
    assert_eq!(
        hand.cards(),
        &[
            card(Rank::Two, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
        ]
    );

    let before = hand.clone();
    assert_eq!(
        hand.play(3).unwrap_err(),
        PlayError::InvalidIndex { index: 3, len: 3 }
    );
    assert_eq!(hand, before);

    assert_eq!(hand.play(1).unwrap(), card(Rank::Nine, Suit::Clubs));
    assert_eq!(hand.len(), 2);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_size(12)
        .with_player(Control::Auto(Policy::Random))
        .with_opponent(Control::Manual);

    assert_eq!(options.hand_size, 12);
    assert_eq!(options.player, Control::Auto(Policy::Random));
    assert_eq!(options.opponent, Control::Manual);

    let defaults = GameOptions::default();
    assert_eq!(defaults.hand_size, 5);
    assert_eq!(defaults.player, Control::Manual);
    assert_eq!(defaults.opponent, Control::Auto(Policy::Lowest));
}

#[test]
fn deal_errors() {
    let mut events: Vec<GameEvent> = Vec::new();

    let mut game = Game::new(GameOptions::default().with_hand_size(0), 1);
    assert_eq!(game.deal(&mut events).unwrap_err(), DealError::InvalidHandSize);

    let mut game = Game::new(GameOptions::default().with_hand_size(27), 1);
    assert_eq!(game.deal(&mut events).unwrap_err(), DealError::InvalidHandSize);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.state(), GameState::Dealing);

    let mut game = staged_game(
        GameOptions::default().with_hand_size(2),
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Clubs),
        ],
    );
    assert_eq!(
        game.deal(&mut events).unwrap_err(),
        DealError::InsufficientCards {
            requested: 4,
            remaining: 3
        }
    );
    assert_eq!(game.cards_remaining(), 3);
    assert_eq!(game.state(), GameState::Dealing);

    let mut game = Game::new(GameOptions::default(), 1);
    game.deal(&mut events).unwrap();
    assert_eq!(game.deal(&mut events).unwrap_err(), DealError::InvalidState);
    assert_eq!(count(&events, |e| matches!(e, GameEvent::Dealt { .. })), 1);
}

#[test]
fn rejected_hand_size_leaves_deck_unshuffled() {
    let mut game = Game::new(GameOptions::default().with_hand_size(30), 6);
    assert_eq!(game.deck(), &Deck::new());

    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(game.deal(&mut events).unwrap_err(), DealError::InvalidHandSize);
    assert_eq!(game.deck(), &Deck::new());
    assert!(events.is_empty());
}

#[test]
fn dealt_cards_partition_the_deck() {
    let mut game = Game::new(GameOptions::default().with_hand_size(26), 5);
    game.deal(&mut Vec::<GameEvent>::new()).unwrap();

    assert_eq!(game.state(), GameState::RoundInProgress);
    assert_eq!(game.cards_remaining(), 0);

    let mut seen = HashSet::new();
    for c in game.player().hand().cards() {
        assert!(seen.insert(*c));
    }
    for c in game.opponent().hand().cards() {
        assert!(seen.insert(*c));
    }
    assert_eq!(seen.len(), DECK_SIZE);

    assert!(game.player().hand().cards().is_sorted());
    assert!(game.opponent().hand().cards().is_sorted());
}

#[test]
fn round_steps_require_matching_state() {
    let mut events: Vec<GameEvent> = Vec::new();
    let mut chooser = Scripted::always(0);
    let mut game = Game::new(GameOptions::default(), 9);

    assert_eq!(
        game.play_round(&mut chooser, &mut events).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(game.advance(&mut events).unwrap_err(), RoundError::InvalidState);

    game.deal(&mut events).unwrap();
    assert_eq!(game.advance(&mut events).unwrap_err(), RoundError::InvalidState);

    game.play_round(&mut chooser, &mut events).unwrap();
    assert_eq!(game.state(), GameState::RoundResolved);
    assert_eq!(
        game.play_round(&mut chooser, &mut events).unwrap_err(),
        RoundError::InvalidState
    );
    assert!(game.advance(&mut events).unwrap());
    assert_eq!(game.state(), GameState::RoundInProgress);
}

#[test]
fn higher_rank_wins_the_round() {
    let mut game = staged_game(
        GameOptions::default().with_hand_size(1),
        &[card(Rank::King, Suit::Clubs), card(Rank::Five, Suit::Spades)],
    );

    let mut events: Vec<GameEvent> = Vec::new();
    game.deal(&mut events).unwrap();
    let result = game
        .play_round(&mut Scripted::always(0), &mut events)
        .unwrap();

    assert_eq!(result.round, 1);
    assert_eq!(result.player_card, card(Rank::King, Suit::Clubs));
    assert_eq!(result.opponent_card, card(Rank::Five, Suit::Spades));
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
    assert_eq!(game.player().rounds_won(), 1);
    assert_eq!(game.opponent().rounds_won(), 0);
}

#[test]
fn equal_rank_scores_nobody() {
    let mut game = staged_game(
        GameOptions::default().with_hand_size(1),
        &[card(Rank::Seven, Suit::Spades), card(Rank::Seven, Suit::Clubs)],
    );

    let mut events: Vec<GameEvent> = Vec::new();
    game.deal(&mut events).unwrap();
    let result = game
        .play_round(&mut Scripted::always(0), &mut events)
        .unwrap();

    assert_eq!(result.outcome, RoundOutcome::Tie);
    assert_eq!(result.outcome.winner(), None);
    assert_eq!(game.player().rounds_won(), 0);
    assert_eq!(game.opponent().rounds_won(), 0);

    assert!(!game.advance(&mut events).unwrap());
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.summary().winner(), None);
}

#[test]
fn scripted_game_with_lowest_opponent() {
    let mut game = staged_game(
        GameOptions::default().with_hand_size(3),
        &[
            card(Rank::Ten, Suit::Spades),     // player
            card(Rank::Three, Suit::Diamonds), // player
            card(Rank::Queen, Suit::Clubs),    // player
            card(Rank::Four, Suit::Hearts),    // opponent
            card(Rank::Jack, Suit::Diamonds),  // opponent
            card(Rank::Two, Suit::Spades),     // opponent
        ],
    );

    let mut events: Vec<GameEvent> = Vec::new();
    let mut chooser = Scripted::new([Some(2), Some(0), Some(0)]);
    let summary = game.run(&mut chooser, &mut events).unwrap();

    let revealed: Vec<(Side, Card)> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::CardRevealed { side, card } => Some((*side, *card)),
            _ => None,
        })
        .collect();
    assert_eq!(
        revealed,
        vec![
            (Side::Player, card(Rank::Queen, Suit::Clubs)),
            (Side::Opponent, card(Rank::Two, Suit::Spades)),
            (Side::Player, card(Rank::Three, Suit::Diamonds)),
            (Side::Opponent, card(Rank::Four, Suit::Hearts)),
            (Side::Player, card(Rank::Ten, Suit::Spades)),
            (Side::Opponent, card(Rank::Jack, Suit::Diamonds)),
        ]
    );

    assert_eq!(summary.rounds_played, 3);
    assert_eq!(summary.player_wins, 1);
    assert_eq!(summary.opponent_wins, 2);
    assert_eq!(summary.winner(), Some(Side::Opponent));
    assert_eq!(chooser.calls(), 3);
}

#[test]
fn invalid_choices_are_reprompted() {
    let mut game = Game::new(GameOptions::default().with_hand_size(2), 4);
    let mut events: Vec<GameEvent> = Vec::new();
    game.deal(&mut events).unwrap();

    let hand_before = game.player().hand().clone();
    let mut chooser = Scripted::new([Some(9), None, Some(1)]);
    let result = game.play_round(&mut chooser, &mut events).unwrap();

    assert_eq!(chooser.calls(), 3);
    assert_eq!(result.player_card, hand_before.cards()[1]);
    assert_eq!(
        count(&events, |e| matches!(e, GameEvent::InvalidChoice { .. })),
        2
    );
    assert!(events.contains(&GameEvent::InvalidChoice {
        side: Side::Player,
        index: Some(9),
        hand_size: 2
    }));
    assert!(events.contains(&GameEvent::InvalidChoice {
        side: Side::Player,
        index: None,
        hand_size: 2
    }));
}

#[test]
fn manual_opponent_is_asked_by_side() {
    let options = GameOptions::default()
        .with_hand_size(2)
        .with_opponent(Control::Manual);
    let mut game = staged_game(
        options,
        &[
            card(Rank::Nine, Suit::Hearts),    // player
            card(Rank::Three, Suit::Clubs),    // player
            card(Rank::Jack, Suit::Spades),    // opponent
            card(Rank::Eight, Suit::Diamonds), // opponent
        ],
    );

    let mut events: Vec<GameEvent> = Vec::new();
    let mut chooser = Scripted::new([Some(0), Some(5), Some(1), Some(0), Some(0)]);
    let summary = game.run(&mut chooser, &mut events).unwrap();

    assert_eq!(
        chooser.asked(),
        &[
            Side::Player,
            Side::Opponent,
            Side::Opponent,
            Side::Player,
            Side::Opponent,
        ]
    );
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::InvalidChoice { .. }))
            .collect::<Vec<_>>(),
        vec![&GameEvent::InvalidChoice {
            side: Side::Opponent,
            index: Some(5),
            hand_size: 2
        }]
    );

    let revealed: Vec<(Side, Card)> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::CardRevealed { side, card } => Some((*side, *card)),
            _ => None,
        })
        .collect();
    assert_eq!(
        revealed,
        vec![
            (Side::Player, card(Rank::Three, Suit::Clubs)),
            (Side::Opponent, card(Rank::Jack, Suit::Spades)),
            (Side::Player, card(Rank::Nine, Suit::Hearts)),
            (Side::Opponent, card(Rank::Eight, Suit::Diamonds)),
        ]
    );
    assert_eq!(summary.player_wins, 1);
    assert_eq!(summary.opponent_wins, 1);
    assert_eq!(summary.winner(), None);
}

#[test]
fn finished_script_falls_back_to_a_valid_index() {
    let mut game = Game::new(GameOptions::default().with_hand_size(3), 12);
    let mut events: Vec<GameEvent> = Vec::new();
    let mut chooser = Scripted::new([Some(9)]);
    let summary = game.run(&mut chooser, &mut events).unwrap();

    assert_eq!(summary.rounds_played, 3);
    assert_eq!(chooser.calls(), 4);
    assert_eq!(
        count(&events, |e| matches!(e, GameEvent::InvalidChoice { .. })),
        1
    );
}

#[test]
fn always_clamps_to_the_last_card() {
    let mut game = Game::new(GameOptions::default().with_hand_size(4), 21);
    let mut events: Vec<GameEvent> = Vec::new();
    game.deal(&mut events).unwrap();

    let mut chooser = Scripted::always(9);
    while game.state() == GameState::RoundInProgress {
        let expected = *game.player().hand().cards().last().unwrap();
        let result = game.play_round(&mut chooser, &mut events).unwrap();
        assert_eq!(result.player_card, expected);
        game.advance(&mut events).unwrap();
    }

    assert_eq!(chooser.calls(), 4);
    assert_eq!(
        count(&events, |e| matches!(e, GameEvent::InvalidChoice { .. })),
        0
    );
}

#[test]
fn five_card_game_is_reproducible() {
    let play = || {
        let mut game = Game::new(GameOptions::default(), 2024);
        let mut events: Vec<GameEvent> = Vec::new();
        let summary = game.run(&mut Scripted::always(0), &mut events).unwrap();
        (game, summary, events)
    };

    let (game, summary, events) = play();
    let (_, summary_again, events_again) = play();

    assert_eq!(summary, summary_again);
    assert_eq!(events, events_again);

    assert_eq!(summary.rounds_played, 5);
    assert_eq!(game.round(), 6);
    assert_eq!(game.state(), GameState::GameOver);
    assert!(game.player().hand().is_empty());
    assert!(game.opponent().hand().is_empty());
    assert_eq!(game.cards_remaining(), DECK_SIZE - 10);
    assert!(summary.player_wins + summary.opponent_wins <= 5);

    assert_eq!(count(&events, |e| matches!(e, GameEvent::Dealt { .. })), 1);
    assert_eq!(
        count(&events, |e| matches!(e, GameEvent::RoundStarted { .. })),
        5
    );
    assert_eq!(
        count(&events, |e| matches!(e, GameEvent::CardRevealed { .. })),
        10
    );
    assert_eq!(
        count(&events, |e| matches!(e, GameEvent::RoundResolved { .. })),
        5
    );
    assert_eq!(
        count(&events, |e| matches!(e, GameEvent::GameOver { .. })),
        1
    );
    assert_eq!(events.last(), Some(&GameEvent::GameOver { summary }));
}

#[test]
fn lowest_policy_plays_sorted_front() {
    let mut game = Game::new(
        GameOptions::default()
            .with_hand_size(8)
            .with_player(Control::Auto(Policy::Lowest)),
        77,
    );
    let mut events: Vec<GameEvent> = Vec::new();
    game.deal(&mut events).unwrap();

    while game.state() == GameState::RoundInProgress {
        let expected_player = *game.player().hand().cards().first().unwrap();
        let expected_opponent = *game.opponent().hand().cards().first().unwrap();

        let result = game
            .play_round(&mut |_: Side, _: usize| -> Option<usize> { panic!("no manual side") }, &mut events)
            .unwrap();
        assert_eq!(result.player_card, expected_player);
        assert_eq!(result.opponent_card, expected_opponent);

        game.advance(&mut events).unwrap();
    }

    assert_eq!(game.summary().rounds_played, 8);
}

#[test]
fn random_opponent_is_seeded() {
    let play = |seed| {
        let options = GameOptions::default()
            .with_hand_size(10)
            .with_opponent(Control::Auto(Policy::Random));
        let mut game = Game::new(options, seed);
        let mut events: Vec<GameEvent> = Vec::new();
        game.run(&mut Scripted::always(0), &mut events).unwrap();
        events
    };

    assert_eq!(play(31), play(31));
}

#[test]
fn random_opponent_plays_from_its_hand() {
    let options = GameOptions::default()
        .with_hand_size(26)
        .with_player(Control::Auto(Policy::Random))
        .with_opponent(Control::Auto(Policy::Random));
    let mut game = Game::new(options, 8);
    let mut events: Vec<GameEvent> = Vec::new();
    game.deal(&mut events).unwrap();

    let opponent_cards: HashSet<Card> = game.opponent().hand().cards().iter().copied().collect();
    let mut played = HashSet::new();
    let mut chooser = Scripted::default();
    while game.state() == GameState::RoundInProgress {
        let result = game.play_round(&mut chooser, &mut events).unwrap();
        assert!(opponent_cards.contains(&result.opponent_card));
        assert!(played.insert(result.opponent_card));
        game.advance(&mut events).unwrap();
    }

    let summary = game.summary();
    assert_eq!(summary.rounds_played, 26);
    assert_eq!(played, opponent_cards);
    assert_eq!(chooser.calls(), 0);
}

#[test]
fn event_messages_render() {
    let summary = mergewar::GameSummary {
        rounds_played: 5,
        player_wins: 3,
        opponent_wins: 1,
    };
    let over = GameEvent::GameOver { summary }.to_string();
    assert!(over.starts_with("Game over!"));
    assert!(over.contains("You won 3 rounds."));
    assert!(over.contains("Opponent won 1 rounds."));

    let revealed = GameEvent::CardRevealed {
        side: Side::Opponent,
        card: card(Rank::Ace, Suit::Spades),
    };
    assert_eq!(revealed.to_string(), "Opponent played: A of Spades");
}
