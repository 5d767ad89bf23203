//! Game integration tests.

use std::collections::HashSet;

use hilo::{
    Card, DECK_SIZE, Deck, DrawError, Game, GameOptions, GameOverReason, GameState, Guess,
    GuessError, JOKER_COUNT, ParseGuessError, QueryError, Rank, Suit, TurnReason, TurnResult,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn started(seed: u64) -> Game {
    let mut game = Game::new(GameOptions::default(), seed);
    game.begin().unwrap();
    game
}

/// Guesses with knowledge of the challenging card, so every guess is correct.
fn sure_guess(game: &Game) -> Guess {
    let current = game.current_card().unwrap();
    let challenger = game.challenging_card().unwrap();
    if challenger.value() >= current.value() {
        Guess::Higher
    } else {
        Guess::Lower
    }
}

/// Guesses against the challenging card, except on ties where no guess is wrong.
fn losing_guess(game: &Game) -> Guess {
    match sure_guess(game) {
        Guess::Higher => Guess::Lower,
        Guess::Lower => Guess::Higher,
    }
}

fn play_out(game: &mut Game) -> Vec<TurnResult> {
    let mut turns = Vec::new();
    while game.is_game_over() == Ok(false) {
        let guess = sure_guess(game);
        turns.push(game.check_higher_or_lower(guess).unwrap());
    }
    turns
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_by_key(|card| (card.suit().name(), card.value()));
    cards
}

#[test]
fn full_deck_has_every_card_once_plus_two_jokers() {
    let deck = Deck::new();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let (jokers, standard): (Vec<Card>, Vec<Card>) =
        deck.cards().iter().copied().partition(|card| card.is_joker());
    assert_eq!(jokers.len(), JOKER_COUNT);

    let pairs: HashSet<(Suit, Rank)> = standard.iter().map(|c| (c.suit(), c.rank())).collect();
    assert_eq!(pairs.len(), 52);
    assert_eq!(standard.len(), 52);
    for suit in Suit::ALL {
        for rank in Rank::STANDARD {
            assert!(pairs.contains(&(suit, rank)), "missing {rank} of {suit}");
        }
    }
}

#[test]
fn rank_values_ignore_suit() {
    let deck = Deck::new();
    for card in deck.cards() {
        assert_eq!(card.value(), card.rank().value());
    }
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Queen.value(), 12);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::Joker.value(), 15);
}

#[test]
fn cards_render_rank_of_suit_and_bare_joker() {
    let deck = Deck::new();
    let first = deck.cards().first().unwrap();
    let last = deck.cards().last().unwrap();
    assert_eq!(first.to_string(), "2 of Clubs");
    assert_eq!(last.to_string(), "Joker");
}

#[test]
fn highest_card_in_deck_is_a_joker_whatever_its_suit() {
    let deck = Deck::new();
    let highest = deck.cards().iter().max_by_key(|card| card.value()).unwrap();
    assert!(highest.is_joker());

    let ace_of_clubs = deck.cards()[12];
    let two_of_spades = deck.cards()[39];
    assert_eq!(ace_of_clubs.to_string(), "Ace of Clubs");
    assert_eq!(two_of_spades.to_string(), "2 of Spades");
    assert!(ace_of_clubs.value() > two_of_spades.value());
}

#[test]
fn shuffle_changes_order_but_not_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let unshuffled = Deck::new();

    for _ in 0..20 {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        assert_ne!(deck.cards(), unshuffled.cards());
        assert_eq!(sorted(deck.cards()), sorted(unshuffled.cards()));
    }
}

#[test]
fn drawing_everything_then_once_more_fails() {
    let mut deck = Deck::new();
    for drawn in 1..=DECK_SIZE {
        deck.draw().unwrap();
        assert_eq!(deck.remaining(), DECK_SIZE - drawn);
    }
    assert_eq!(deck.draw(), Err(DrawError::EmptyDeck));

    deck.reset();
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn queries_before_begin_fail() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.current_card(), Err(QueryError::NotStarted));
    assert_eq!(game.challenging_card(), Err(QueryError::NotStarted));
    assert_eq!(game.score(), Err(QueryError::NotStarted));
    assert_eq!(game.remaining_cards(), Err(QueryError::NotStarted));
    assert_eq!(game.is_game_over(), Err(QueryError::NotStarted));
}

#[test]
fn guess_before_begin_fails_without_starting() {
    let mut game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.check_higher_or_lower(Guess::Higher),
        Err(GuessError::NotStarted)
    );
    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.score(), Err(QueryError::NotStarted));
}

#[test]
fn begin_deals_two_cards() {
    let game = started(5);

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.remaining_cards(), Ok(DECK_SIZE - 2));
    assert_eq!(game.score(), Ok(0));
    assert_eq!(game.is_game_over(), Ok(false));
    assert_ne!(game.current_card(), game.challenging_card());
}

#[test]
fn same_seed_plays_the_same_game() {
    let mut a = started(77);
    let mut b = started(77);

    assert_eq!(play_out(&mut a), play_out(&mut b));
}

#[test]
fn different_seeds_deal_differently() {
    let mut a = started(1);
    let mut b = started(2);

    assert_ne!(play_out(&mut a), play_out(&mut b));
}

#[test]
fn perfect_play_exhausts_the_deck() {
    let mut game = started(9);
    let turns = play_out(&mut game);

    assert_eq!(turns.len(), DECK_SIZE - 1);
    assert!(turns.iter().all(|turn| turn.correct));

    let (last, rest) = turns.split_last().unwrap();
    assert!(rest.iter().all(|turn| !turn.game_over));
    assert!(
        rest.iter()
            .all(|turn| turn.reason.is_none() || turn.reason == Some(TurnReason::Tie))
    );
    assert!(last.game_over);
    assert_eq!(last.remaining, 0);
    assert_eq!(last.score, DECK_SIZE - 1);
    assert_eq!(last.reason, Some(TurnReason::DeckExhausted));

    assert_eq!(
        game.state(),
        GameState::GameOver(GameOverReason::DeckExhausted)
    );
    assert_eq!(game.remaining_cards(), Ok(0));
    assert_eq!(
        game.check_higher_or_lower(Guess::Higher),
        Err(GuessError::GameOver)
    );
}

#[test]
fn each_correct_turn_draws_one_card() {
    let mut game = started(12);
    let mut remaining = game.remaining_cards().unwrap();

    for _ in 0..10 {
        let challenger = game.challenging_card().unwrap();
        let guess = sure_guess(&game);
        let result = game.check_higher_or_lower(guess).unwrap();

        remaining -= 1;
        assert_eq!(result.remaining, remaining);
        assert_eq!(game.current_card(), Ok(challenger));
    }
    assert_eq!(game.score(), Ok(10));
}

#[test]
fn wrong_guess_ends_game_and_begin_restarts_it() {
    let mut game = started(31);

    let result = loop {
        let current = game.current_card().unwrap();
        let challenger = game.challenging_card().unwrap();
        let score = game.score().unwrap();
        let guess = losing_guess(&game);
        let result = game.check_higher_or_lower(guess).unwrap();
        if result.game_over {
            assert_eq!(result.score, score);
            assert_eq!(game.current_card(), Ok(current));
            assert_eq!(game.challenging_card(), Ok(challenger));
            break result;
        }
        assert_eq!(result.reason, Some(TurnReason::Tie));
    };

    assert!(!result.correct);
    assert_eq!(result.reason, Some(TurnReason::WrongGuess));
    assert_eq!(game.state(), GameState::GameOver(GameOverReason::WrongGuess));
    assert_eq!(game.is_game_over(), Ok(true));

    let score = game.score().unwrap();
    assert_eq!(
        game.check_higher_or_lower(Guess::Lower),
        Err(GuessError::GameOver)
    );
    assert_eq!(game.score(), Ok(score));

    game.begin().unwrap();
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.score(), Ok(0));
    assert_eq!(game.remaining_cards(), Ok(DECK_SIZE - 2));
}

#[test]
fn parse_guess_accepts_short_and_long_forms() {
    assert_eq!("h".parse::<Guess>(), Ok(Guess::Higher));
    assert_eq!("Higher\n".parse::<Guess>(), Ok(Guess::Higher));
    assert_eq!("  L".parse::<Guess>(), Ok(Guess::Lower));
    assert_eq!("lower".parse::<Guess>(), Ok(Guess::Lower));
    assert_eq!("".parse::<Guess>(), Err(ParseGuessError::InvalidGuess));
    assert_eq!("q".parse::<Guess>(), Err(ParseGuessError::InvalidGuess));
    assert_eq!("hl".parse::<Guess>(), Err(ParseGuessError::InvalidGuess));
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(deck.remaining(), DECK_SIZE);
        prop_assert_eq!(sorted(deck.cards()), sorted(Deck::new().cards()));
    }

    #[test]
    fn begin_always_leaves_fifty_two_cards(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), seed);
        game.begin().unwrap();
        prop_assert_eq!(game.remaining_cards(), Ok(DECK_SIZE - 2));
        prop_assert_eq!(game.state(), GameState::InProgress);
    }
}
