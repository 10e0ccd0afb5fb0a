use core::cmp::Ordering;

use crate::domain::card::{Card, Rank};
use crate::domain::hand::{Hand, HAND_SIZE};

use super::compare::{compare_grouped, compare_high_cards};
use super::extract::{into_five, pad, take_group, top_five};
use super::hand_rank::{Group, HandCategory, QualifyingHand};

/// Оценщик категории: рука → комбинация или `None`.
pub type EvaluateFn = fn(&Hand) -> Option<QualifyingHand>;

/// Сравнение двух комбинаций одной категории.
pub type CompareFn = fn(&QualifyingHand, &QualifyingHand) -> Ordering;

/// Строка таблицы категорий.
#[derive(Clone, Copy)]
pub struct CategoryEntry {
    pub category: HandCategory,
    pub evaluate: EvaluateFn,
    pub compare: CompareFn,
}

/// Закрытая таблица всех десяти категорий, индекс = score.
pub static CATEGORY_TABLE: [CategoryEntry; 10] = [
    CategoryEntry {
        category: HandCategory::HighCard,
        evaluate: high_card,
        compare: compare_high_cards,
    },
    CategoryEntry {
        category: HandCategory::OnePair,
        evaluate: one_pair,
        compare: compare_grouped,
    },
    CategoryEntry {
        category: HandCategory::TwoPair,
        evaluate: two_pair,
        compare: compare_grouped,
    },
    CategoryEntry {
        category: HandCategory::ThreeOfAKind,
        evaluate: three_of_a_kind,
        compare: compare_grouped,
    },
    CategoryEntry {
        category: HandCategory::Straight,
        evaluate: straight,
        compare: compare_high_cards,
    },
    CategoryEntry {
        category: HandCategory::Flush,
        evaluate: flush,
        compare: compare_high_cards,
    },
    CategoryEntry {
        category: HandCategory::FullHouse,
        evaluate: full_house,
        compare: compare_grouped,
    },
    CategoryEntry {
        category: HandCategory::FourOfAKind,
        evaluate: four_of_a_kind,
        compare: compare_grouped,
    },
    CategoryEntry {
        category: HandCategory::StraightFlush,
        evaluate: straight_flush,
        compare: compare_high_cards,
    },
    CategoryEntry {
        category: HandCategory::RoyalFlush,
        evaluate: royal_flush,
        compare: compare_high_cards,
    },
];

pub fn entry(category: HandCategory) -> &'static CategoryEntry {
    &CATEGORY_TABLE[category.score() as usize]
}

/// Найти лучшую комбинацию заданной категории в руке.
///
/// Рука не меняется: каждый оценщик строит свои корзины.
pub fn evaluate(category: HandCategory, hand: &Hand) -> Option<QualifyingHand> {
    (entry(category).evaluate)(hand)
}

/// Все категории, под которые подходит рука, от слабой к сильной.
pub fn evaluate_all(hand: &Hand) -> Vec<QualifyingHand> {
    CATEGORY_TABLE
        .iter()
        .filter_map(|e| (e.evaluate)(hand))
        .collect()
}

/// Сильнейшая категория руки. `None` только если в руке меньше 5 карт.
pub fn evaluate_best(hand: &Hand) -> Option<QualifyingHand> {
    CATEGORY_TABLE.iter().rev().find_map(|e| (e.evaluate)(hand))
}

/// Полный порядок над комбинациями: сначала score, затем сравнение
/// внутри категории.
pub fn compare_hands(a: &QualifyingHand, b: &QualifyingHand) -> Ordering {
    a.score()
        .cmp(&b.score())
        .then_with(|| (entry(a.category).compare)(a, b))
}

// ---------------------------------------------------------------------------
// Оценщики категорий
// ---------------------------------------------------------------------------

fn high_card(hand: &Hand) -> Option<QualifyingHand> {
    let cards = top_five(hand.cards())?;
    Some(QualifyingHand::new(HandCategory::HighCard, cards, Vec::new()))
}

/// Одна группа из `size` карт плюс добор кикерами.
fn single_group(hand: &Hand, category: HandCategory, size: usize) -> Option<QualifyingHand> {
    let mut buckets = hand.rank_buckets();
    let (rank, mut picked) = take_group(&mut buckets, size, &[])?;
    pad(&mut buckets, &mut picked);
    let cards = into_five(picked)?;
    Some(QualifyingHand::new(category, cards, vec![Group::new(rank, size)]))
}

fn one_pair(hand: &Hand) -> Option<QualifyingHand> {
    single_group(hand, HandCategory::OnePair, 2)
}

fn three_of_a_kind(hand: &Hand) -> Option<QualifyingHand> {
    single_group(hand, HandCategory::ThreeOfAKind, 3)
}

fn four_of_a_kind(hand: &Hand) -> Option<QualifyingHand> {
    single_group(hand, HandCategory::FourOfAKind, 4)
}

fn two_pair(hand: &Hand) -> Option<QualifyingHand> {
    let mut buckets = hand.rank_buckets();
    let (high, mut picked) = take_group(&mut buckets, 2, &[])?;
    // Вторая пара обязательно другого ранга.
    let (low, second) = take_group(&mut buckets, 2, &[high])?;
    picked.extend(second);
    pad(&mut buckets, &mut picked);
    let cards = into_five(picked)?;
    Some(QualifyingHand::new(
        HandCategory::TwoPair,
        cards,
        vec![Group::new(high, 2), Group::new(low, 2)],
    ))
}

fn full_house(hand: &Hand) -> Option<QualifyingHand> {
    let mut buckets = hand.rank_buckets();
    let (trips, mut picked) = take_group(&mut buckets, 3, &[])?;
    let (pair, second) = take_group(&mut buckets, 2, &[])?;
    picked.extend(second);
    let cards = into_five(picked)?;
    Some(QualifyingHand::new(
        HandCategory::FullHouse,
        cards,
        vec![Group::new(trips, 3), Group::new(pair, 2)],
    ))
}

fn straight(hand: &Hand) -> Option<QualifyingHand> {
    let cards = hand.straight_runs().pop()?;
    Some(QualifyingHand::new(HandCategory::Straight, cards, Vec::new()))
}

fn flush(hand: &Hand) -> Option<QualifyingHand> {
    hand.suit_buckets()
        .iter()
        .filter(|(_, cards)| cards.len() >= HAND_SIZE)
        .filter_map(|(_, cards)| top_five(cards))
        .map(|cards| QualifyingHand::new(HandCategory::Flush, cards, Vec::new()))
        .max_by(compare_high_cards)
}

fn is_suited(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

const ROYAL_RANKS: [Rank; HAND_SIZE] = [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];

fn straight_flush(hand: &Hand) -> Option<QualifyingHand> {
    let cards = hand
        .straight_runs()
        .into_iter()
        .filter(|run| is_suited(run))
        .last()?;
    Some(QualifyingHand::new(HandCategory::StraightFlush, cards, Vec::new()))
}

fn royal_flush(hand: &Hand) -> Option<QualifyingHand> {
    let cards = hand
        .straight_runs()
        .into_iter()
        .filter(|run| is_suited(run) && run.map(|c| c.rank) == ROYAL_RANKS)
        .last()?;
    Some(QualifyingHand::new(HandCategory::RoyalFlush, cards, Vec::new()))
}
