//! RNG tests for poker-hands
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт после shuffle
//! - работу Deck + shuffle + RandomSource

use poker_hands::domain::deck::Deck;
use poker_hands::engine::RandomSource;
use poker_hands::infra::{DeterministicRng, SystemRng};

//
// TEST 1: DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2: different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3: byte seed is reproducible too
//
#[test]
fn deterministic_rng_from_bytes() {
    let mut seed = [0u8; 32];
    seed[..8].copy_from_slice(&555u64.to_le_bytes());

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    DeterministicRng::from_bytes(seed).shuffle(&mut a);
    DeterministicRng::from_bytes(seed).shuffle(&mut b);

    assert_eq!(a, b);
}

//
// TEST 4: shuffled deck has 52 unique cards
//
#[test]
fn deck_shuffle_keeps_all_cards() {
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut DeterministicRng::from_seed(999));

    assert_eq!(deck.len(), 52);
    assert_ne!(deck.cards(), Deck::standard_52().cards());

    let unique: std::collections::HashSet<_> = deck.cards().iter().collect();
    assert_eq!(unique.len(), 52, "Shuffled deck must contain 52 unique cards");
}

//
// TEST 5: same seed, same deck order
//
#[test]
fn deck_shuffle_is_reproducible() {
    let mut d1 = Deck::standard_52();
    let mut d2 = Deck::standard_52();

    d1.shuffle(&mut DeterministicRng::from_seed(31337));
    d2.shuffle(&mut DeterministicRng::from_seed(31337));

    assert_eq!(d1, d2);
}

//
// TEST 6: SystemRng shuffles a real deck
//
#[test]
fn system_rng_shuffle_keeps_all_cards() {
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut SystemRng);

    let unique: std::collections::HashSet<_> = deck.cards().iter().collect();
    assert_eq!(unique.len(), 52);
    assert_eq!(deck.remaining(), 52);
}

//
// TEST 7: shuffle on empty / 1-element slice must not crash
//
#[test]
fn shuffle_degenerate_slices_ok() {
    let mut rng = DeterministicRng::from_seed(42);

    let mut empty: Vec<u32> = vec![];
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![123];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![123]);
}
