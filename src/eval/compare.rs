//! Сравнение двух рук одной категории.
//!
//! Везде действует правило: туз хранится как 1 (и стоит в начале
//! отсортированной руки), но сравнивается как 14.

use core::cmp::Ordering;

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HAND_SIZE;

use super::hand_rank::{Group, QualifyingHand};

/// Сколько тузов стоит в начале отсортированной комбинации.
fn leading_aces(cards: &[Card]) -> usize {
    cards.iter().take_while(|c| c.rank.is_ace()).count()
}

/// Карты в порядке сравнения: сначала тузы, затем остальные с конца.
fn top_down(cards: &[Card]) -> impl Iterator<Item = &Card> {
    let aces = leading_aces(cards);
    cards[..aces].iter().chain(cards[aces..].iter().rev())
}

/// Кикеры сверху вниз. Из каждой группы пропускается ровно `size` карт
/// её ранга; лишние карты того же ранга остаются кикерами.
fn kickers(cards: &[Card], groups: &[Group]) -> Vec<u8> {
    let mut to_skip: Vec<(Rank, usize)> = groups.iter().map(|g| (g.rank, g.size)).collect();
    top_down(cards)
        .filter_map(|card| {
            match to_skip
                .iter_mut()
                .find(|(rank, left)| *rank == card.rank && *left > 0)
            {
                Some((_, left)) => {
                    *left -= 1;
                    None
                }
                None => Some(card.rank.high_value()),
            }
        })
        .collect()
}

/// Последовательность рангов (туз = 14) в порядке сравнения:
/// ранги групп в порядке поиска, затем кикеры сверху вниз.
pub fn tie_break_sequence(cards: &[Card], groups: &[Group]) -> Vec<u8> {
    groups
        .iter()
        .map(|g| g.rank.high_value())
        .chain(kickers(cards, groups))
        .collect()
}

/// High card / Flush / Straight / Straight flush / Royal flush:
/// позиции сверху вниз, первая разница решает.
///
/// Тузы в начале хранения на самом деле старшие карты, поэтому сначала
/// сравнивается их количество, а потом оставшиеся позиции с конца.
pub fn compare_high_cards(a: &QualifyingHand, b: &QualifyingHand) -> Ordering {
    let aces_a = leading_aces(&a.cards);
    let aces_b = leading_aces(&b.cards);
    if aces_a != aces_b {
        return aces_a.cmp(&aces_b);
    }

    for i in (aces_a..HAND_SIZE).rev() {
        match a.cards[i]
            .rank
            .high_value()
            .cmp(&b.cards[i].rank.high_value())
        {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Пара / две пары / сет / фулл-хаус / каре:
/// ранги групп в порядке поиска, затем кикеры без карт групп.
pub fn compare_grouped(a: &QualifyingHand, b: &QualifyingHand) -> Ordering {
    for (ga, gb) in a.groups.iter().zip(&b.groups) {
        match ga.rank.high_value().cmp(&gb.rank.high_value()) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    kickers(&a.cards, &a.groups).cmp(&kickers(&b.cards, &b.groups))
}
