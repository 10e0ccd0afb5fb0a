use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Размер любой оцениваемой комбинации.
pub const HAND_SIZE: usize = 5;

/// Набор карт игрока (свои + общие), всегда отсортированный по рангу
/// по возрастанию. Туз (1) поэтому всегда в начале.
///
/// Сортировка стабильная: карты одного ранга остаются в порядке добавления.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Слить закрытые и общие карты в одну руку.
    pub fn new(private_cards: &[Card], shared_cards: &[Card]) -> Self {
        let mut cards = Vec::with_capacity(private_cards.len() + shared_cards.len());
        cards.extend_from_slice(private_cards);
        cards.extend_from_slice(shared_cards);
        Self::from_cards(cards)
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Hand {
            cards: cards.into_iter().collect(),
        };
        hand.sort();
        hand
    }

    /// Добавить карту; порядок восстанавливается сразу.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.sort();
    }

    /// Убрать карту по индексу. Порядок остальных не меняется.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    fn sort(&mut self) {
        self.cards.sort_by_key(|c| c.rank);
    }

    /// Разложить карты по рангам. Каждый вызов строит свежую копию.
    pub fn rank_buckets(&self) -> RankBuckets {
        let mut buckets: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
        for card in &self.cards {
            buckets.entry(card.rank).or_default().push(*card);
        }
        RankBuckets { buckets }
    }

    /// Разложить карты по мастям; внутри масти карты по возрастанию ранга.
    pub fn suit_buckets(&self) -> SuitBuckets {
        let mut buckets: BTreeMap<Suit, Vec<Card>> = BTreeMap::new();
        for card in &self.cards {
            buckets.entry(card.suit).or_default().push(*card);
        }
        SuitBuckets { buckets }
    }

    /// Все 5-карточные окна внутри последовательностей подряд идущих рангов,
    /// от младшего окна к старшему.
    ///
    /// Правила:
    /// - соседние карты должны отличаться по рангу ровно на 1
    ///   (пара внутри последовательности её обрывает);
    /// - туз не продолжает последовательность вниз (A-2-3-4-5 не стрит);
    /// - если старшая карта руки король, а младшая туз, то туз
    ///   дописывается сверху к последней последовательности (T-J-Q-K-A).
    ///
    /// Каждое окно отсортировано так же, как рука: туз в начале.
    pub fn straight_runs(&self) -> Vec<[Card; HAND_SIZE]> {
        let mut windows = Vec::new();
        let (Some(&lowest), Some(&highest)) = (self.cards.first(), self.cards.last()) else {
            return windows;
        };

        let mut run: Vec<Card> = vec![lowest];
        for pair in self.cards.windows(2) {
            let (prev, cur) = (pair[0], pair[1]);
            if !prev.rank.is_ace() && cur.rank.value() == prev.rank.value() + 1 {
                run.push(cur);
            } else {
                push_windows(&run, &mut windows);
                run = vec![cur];
            }
        }

        if highest.rank == Rank::King && lowest.rank.is_ace() {
            run.push(lowest);
        }
        push_windows(&run, &mut windows);

        windows
    }
}

fn push_windows(run: &[Card], out: &mut Vec<[Card; HAND_SIZE]>) {
    for window in run.windows(HAND_SIZE) {
        let mut five = [window[0]; HAND_SIZE];
        five.copy_from_slice(window);
        five.sort_by_key(|c| c.rank);
        out.push(five);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Карты руки, сгруппированные по рангу.
///
/// Это рабочая копия для одного вызова оценщика: из неё можно забирать
/// карты, исходная рука при этом не меняется.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankBuckets {
    buckets: BTreeMap<Rank, Vec<Card>>,
}

impl RankBuckets {
    pub fn count(&self, rank: Rank) -> usize {
        self.buckets.get(&rank).map_or(0, Vec::len)
    }

    pub fn get(&self, rank: Rank) -> &[Card] {
        self.buckets.get(&rank).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Забрать до `n` первых карт ранга `rank`. Пустые корзины удаляются.
    pub fn take(&mut self, rank: Rank, n: usize) -> Vec<Card> {
        let Some(bucket) = self.buckets.get_mut(&rank) else {
            return Vec::new();
        };
        let n = n.min(bucket.len());
        let taken: Vec<Card> = bucket.drain(..n).collect();
        if bucket.is_empty() {
            self.buckets.remove(&rank);
        }
        taken
    }

    /// Сколько карт осталось во всех корзинах.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Корзины по возрастанию ранга (туз первым).
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &[Card])> {
        self.buckets.iter().map(|(r, cards)| (*r, cards.as_slice()))
    }
}

/// Карты руки, сгруппированные по масти.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuitBuckets {
    buckets: BTreeMap<Suit, Vec<Card>>,
}

impl SuitBuckets {
    pub fn get(&self, suit: Suit) -> &[Card] {
        self.buckets.get(&suit).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suit, &[Card])> {
        self.buckets.iter().map(|(s, cards)| (*s, cards.as_slice()))
    }
}
