//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use poker_hands::domain::*;
use poker_hands::infra::DeterministicRng;

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

fn hand(cards: &[&str]) -> Hand {
    Hand::from_cards(cards.iter().map(|s| c(s)))
}

/// Card/Suit/Rank: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("XYZ".parse::<Card>().is_err());
    assert!("1c".parse::<Card>().is_err());
    assert!("Acx".parse::<Card>().is_err());
}

#[test]
fn card_from_value_validates_rank() {
    assert_eq!(
        Card::from_value(1, Suit::Spades),
        Ok(Card::new(Rank::Ace, Suit::Spades))
    );
    assert_eq!(
        Card::from_value(0, Suit::Spades),
        Err(DomainError::MalformedCard(0))
    );
    assert_eq!(
        Card::from_value(14, Suit::Hearts),
        Err(DomainError::MalformedCard(14))
    );
}

/// Deck: стандартная колода 52 карты, все уникальны.
#[test]
fn deck_standard_52_basic_properties() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.remaining(), 52);
    assert!(!deck.is_empty());

    let set: HashSet<_> = deck.cards().iter().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn deck_draw_one_until_exhausted() {
    let mut deck = Deck::standard_52();
    let mut seen = HashSet::new();
    for _ in 0..52 {
        let card = deck.draw_one().expect("52 cards available");
        assert!(seen.insert(card), "card {card} drawn twice");
    }
    assert_eq!(deck.remaining(), 0);
    assert_eq!(
        deck.draw_one(),
        Err(DomainError::DeckExhausted {
            requested: 1,
            remaining: 0
        })
    );
}

#[test]
fn deck_draw_n_is_atomic() {
    let mut deck = Deck::standard_52();
    let first = deck.draw_n(50).unwrap();
    assert_eq!(first.len(), 50);

    // Просим больше, чем осталось: ничего не берётся.
    assert_eq!(
        deck.draw_n(3),
        Err(DomainError::DeckExhausted {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(deck.remaining(), 2);

    assert_eq!(deck.draw_n(2).unwrap().len(), 2);
    assert_eq!(deck.draw_n(0).unwrap(), Vec::<Card>::new());
}

#[test]
fn deck_shuffle_resets_cursor() {
    let mut deck = Deck::standard_52();
    deck.draw_n(10).unwrap();
    deck.shuffle(&mut DeterministicRng::from_seed(7));
    assert_eq!(deck.remaining(), 52);
    assert_ne!(deck, Deck::standard_52());
}

/// Курсор из сохранённой колоды может быть за её концом.
#[test]
fn deserialized_deck_with_cursor_past_end_is_exhausted() {
    let mut value = serde_json::to_value(Deck::standard_52()).unwrap();
    value["next"] = serde_json::json!(60);
    let mut deck: Deck = serde_json::from_value(value).unwrap();

    assert_eq!(deck.remaining(), 0);
    assert!(deck.draw_one().is_err());
    assert_eq!(
        deck.draw_n(0),
        Err(DomainError::DeckExhausted {
            requested: 0,
            remaining: 0
        })
    );
    assert!(deck.draw_n(3).is_err());
}

/// Hand::new сливает закрытые и общие карты и сортирует по рангу.
#[test]
fn hand_merges_and_sorts_ascending() {
    let private = [c("Kd"), c("As")];
    let shared = [c("7c"), c("2h"), c("Tc")];
    let h = Hand::new(&private, &shared);

    let ranks: Vec<Rank> = h.iter().map(|c| c.rank).collect();
    assert_eq!(
        ranks,
        vec![Rank::Ace, Rank::Two, Rank::Seven, Rank::Ten, Rank::King]
    );
    assert_eq!(h.to_string(), "As, 2h, 7c, Tc, Kd");

    assert!(Hand::new(&[], &[]).is_empty());
}

#[test]
fn rank_and_suit_buckets() {
    let h = hand(&["Ac", "Ad", "Kc", "Kh", "Ks", "2c"]);

    let ranks = h.rank_buckets();
    assert_eq!(ranks.count(Rank::Ace), 2);
    assert_eq!(ranks.count(Rank::King), 3);
    assert_eq!(ranks.count(Rank::Queen), 0);
    assert_eq!(ranks.total(), 6);
    // Корзины идут по возрастанию ранга: туз первым.
    assert_eq!(ranks.iter().next().map(|(r, _)| r), Some(Rank::Ace));

    let suits = h.suit_buckets();
    assert_eq!(suits.get(Suit::Clubs).len(), 3);
    assert_eq!(suits.get(Suit::Diamonds).len(), 1);
    assert!(suits.get(Suit::Hearts).iter().all(|c| c.suit == Suit::Hearts));
}

#[test]
fn straight_runs_find_broadway_through_ace() {
    let h = hand(&["Ts", "Jd", "Qh", "Kc", "Ah", "3d"]);
    let runs = h.straight_runs();
    assert_eq!(runs.len(), 1);

    let ranks: Vec<Rank> = runs[0].iter().map(|c| c.rank).collect();
    assert_eq!(
        ranks,
        vec![Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
    );
}

#[test]
fn straight_runs_have_no_wheel() {
    let h = hand(&["Ac", "2d", "3h", "4s", "5c"]);
    assert!(h.straight_runs().is_empty());
}

#[test]
fn straight_runs_ordered_lowest_first() {
    let h = hand(&["9c", "Td", "Jh", "Qs", "Kc", "Ad"]);
    let runs = h.straight_runs();
    assert_eq!(runs.len(), 2);
    // 9..K, затем T..A (туз в начале окна).
    assert_eq!(runs[0][0].rank, Rank::Nine);
    assert_eq!(runs[1][0].rank, Rank::Ace);
}

#[test]
fn straight_runs_need_five_cards() {
    assert!(hand(&["Tc", "Jd", "Qh", "Ks"]).straight_runs().is_empty());
    assert!(Hand::default().straight_runs().is_empty());
}
