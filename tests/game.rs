//! Game integration tests.

use std::collections::HashSet;

use cardhand::{Card, DECK_SIZE, DealError, Deck, Game, GameOptions, NewDeckPolicy, Suit};

fn assert_disjoint(game: &Game) {
    let deck = game.deck();
    for card in game.hand().cards() {
        assert!(!deck.contains(card), "{card} is in both hand and deck");
    }
}

#[test]
fn options_builder_sets_fields() {
    let ace = Card::new(Suit::Hearts, 1).unwrap();
    let options = GameOptions::default()
        .with_hand_size(7)
        .with_shuffle_new_decks(true)
        .with_new_deck_policy(NewDeckPolicy::Redeal)
        .with_report_suit(Suit::Clubs)
        .with_special_card(ace)
        .with_flush_size(4);

    assert_eq!(options.hand_size, 7);
    assert!(options.shuffle_new_decks);
    assert_eq!(options.new_deck_policy, NewDeckPolicy::Redeal);
    assert_eq!(options.report_suit, Suit::Clubs);
    assert_eq!(options.special_card, ace);
    assert_eq!(options.flush_size, 4);
}

#[test]
fn default_options_match_legacy_game() {
    let options = GameOptions::default();
    assert_eq!(options.hand_size, 5);
    assert!(!options.shuffle_new_decks);
    assert_eq!(options.new_deck_policy, NewDeckPolicy::KeepHand);
    assert_eq!(options.report_suit, Suit::Hearts);
    assert_eq!(options.special_card, Card::QUEEN_OF_SPADES);
    assert_eq!(options.flush_size, 5);
}

#[test]
fn new_game_deals_first_hand() {
    let game = Game::new(GameOptions::default(), 1).unwrap();
    assert_eq!(game.hand().len(), 5);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 5);
    assert_disjoint(&game);

    game.new_hand().unwrap();
    game.new_game().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 5);
    assert_disjoint(&game);
}

#[test]
fn same_seed_same_game() {
    let a = Game::new(GameOptions::default(), 42).unwrap();
    let b = Game::new(GameOptions::default(), 42).unwrap();
    assert_eq!(a.hand(), b.hand());

    a.new_hand().unwrap();
    b.new_hand().unwrap();
    assert_eq!(a.hand(), b.hand());
    assert_eq!(a.deck(), b.deck());
}

#[test]
fn new_hand_draws_from_current_deck() {
    let game = Game::new(GameOptions::default(), 7).unwrap();
    let first = game.hand();

    game.new_hand().unwrap();
    let second = game.hand();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 10);

    let first_cards: HashSet<Card> = first.cards().iter().copied().collect();
    assert!(second.cards().iter().all(|c| !first_cards.contains(c)));
    assert_disjoint(&game);
}

#[test]
fn new_hand_fails_when_deck_runs_low() {
    let game = Game::new(GameOptions::default(), 13).unwrap();
    for _ in 0..9 {
        game.new_hand().unwrap();
    }
    assert_eq!(game.cards_remaining(), 2);

    let hand = game.hand();
    let deck = game.deck();
    assert_eq!(
        game.new_hand().unwrap_err(),
        DealError::InsufficientCards {
            requested: 5,
            remaining: 2
        }
    );
    assert_eq!(game.hand(), hand);
    assert_eq!(game.deck(), deck);

    game.new_deck().unwrap();
    game.new_hand().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 5);
}

#[test]
fn new_deck_keeps_hand_by_default() {
    let game = Game::new(GameOptions::default(), 3).unwrap();
    let hand = game.hand();

    game.new_deck().unwrap();
    assert_eq!(game.hand(), hand);
    assert_eq!(game.deck(), Deck::standard());
    for card in hand.cards() {
        assert!(game.deck().contains(card));
    }
}

#[test]
fn new_deck_can_redeal() {
    let options = GameOptions::default().with_new_deck_policy(NewDeckPolicy::Redeal);
    let game = Game::new(options, 3).unwrap();
    game.new_hand().unwrap();

    game.new_deck().unwrap();
    assert_eq!(game.hand().len(), 5);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 5);
    assert_disjoint(&game);
}

#[test]
fn shuffled_new_decks() {
    let options = GameOptions::default().with_shuffle_new_decks(true);
    let game = Game::new(options, 8).unwrap();
    game.new_deck().unwrap();

    let deck = game.deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, Deck::standard());
}

#[test]
fn oversized_hand_is_rejected() {
    let options = GameOptions::default().with_hand_size(DECK_SIZE + 1);
    let Err(err) = Game::new(options, 0) else {
        panic!("a hand larger than the deck was dealt");
    };
    assert_eq!(
        err,
        DealError::InsufficientCards {
            requested: DECK_SIZE + 1,
            remaining: DECK_SIZE
        }
    );
}

#[test]
fn whole_deck_hand() {
    let options = GameOptions::default()
        .with_hand_size(DECK_SIZE)
        .with_flush_size(13);
    let game = Game::new(options, 4).unwrap();

    assert_eq!(game.cards_remaining(), 0);
    let report = game.report();
    assert_eq!(report.sum, 4 * (1..=13).sum::<u32>());
    assert!(report.has_special_card);
    assert!(report.is_flush);
}

#[test]
fn report_matches_hand_queries() {
    let game = Game::new(GameOptions::default(), 99).unwrap();
    let hand = game.hand();
    let report = game.report();

    assert_eq!(report.hand, hand.to_string());
    assert_eq!(report.sum, hand.sum());
    assert_eq!(report.suit, Suit::Hearts);
    assert_eq!(report.suit_cards, hand.cards_of_suit(Suit::Hearts));
    assert_eq!(report.special_card, Card::QUEEN_OF_SPADES);
    assert_eq!(report.has_special_card, hand.contains(Suit::Spades, 12));
    assert_eq!(report.flush_size, 5);
    assert_eq!(report.is_flush, hand.has_flush_of_size(5));
}

#[test]
fn report_uses_configured_checks() {
    let options = GameOptions::default()
        .with_hand_size(DECK_SIZE)
        .with_report_suit(Suit::Clubs)
        .with_special_card(Card::new(Suit::Diamonds, 7).unwrap())
        .with_flush_size(12);
    let game = Game::new(options, 5).unwrap();
    let report = game.report();

    assert_eq!(report.suit, Suit::Clubs);
    assert_eq!(report.suit_cards.matches('C').count(), 13);
    assert!(report.has_special_card);
    assert_eq!(report.flush_size, 12);
    assert!(!report.is_flush);
}

#[test]
fn snapshot_reads_deck_and_hand_together() {
    let game = Game::new(GameOptions::default(), 6).unwrap();
    let (deck, hand) = game.snapshot();
    assert_eq!(deck, game.deck());
    assert_eq!(hand, game.hand());
}

#[test]
fn shared_game_never_puts_a_card_in_both_hand_and_deck() {
    let options = GameOptions::default()
        .with_shuffle_new_decks(true)
        .with_new_deck_policy(NewDeckPolicy::Redeal);
    let game = Game::new(options, 2024).unwrap();

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..2_000 {
                game.new_game().unwrap();
            }
        });
        scope.spawn(|| {
            for _ in 0..2_000 {
                if game.new_hand().is_err() {
                    game.new_deck().unwrap();
                }
            }
        });
        scope.spawn(|| {
            for _ in 0..2_000 {
                let (deck, hand) = game.snapshot();
                assert!(deck.len() + hand.len() <= DECK_SIZE);
                for card in hand.cards() {
                    assert!(!deck.contains(card), "{card} is in both hand and deck");
                }
            }
        });
    });

    assert_disjoint(&game);
}
