use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HAND_SIZE;

use super::compare::tie_break_sequence;

/// Категория покерной руки по силе.
///
/// Дискриминант равен фиксированному score категории.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Все категории от слабой к сильной.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub const fn score(self) -> u8 {
        self as u8
    }

    /// Человеческое описание категории.
    pub const fn describe(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Группа одинаковых рангов внутри комбинации (пара, сет, каре).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Group {
    pub rank: Rank,
    pub size: usize,
}

impl Group {
    pub const fn new(rank: Rank, size: usize) -> Self {
        Self { rank, size }
    }
}

/// Ключ для сравнения двух рук ОДНОЙ категории.
///
/// Ранги уже приведены к силе (туз = 14) и идут в порядке сравнения,
/// поэтому достаточно лексикографического `Ord`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TieBreakKey(pub Vec<u8>);

impl TieBreakKey {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// Найденная 5-карточная комбинация.
///
/// `cards` отсортированы как в руке (по возрастанию, туз первым),
/// `groups` содержит найденные группы в порядке поиска.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualifyingHand {
    pub category: HandCategory,
    pub cards: [Card; HAND_SIZE],
    pub groups: Vec<Group>,
    pub key: TieBreakKey,
}

impl QualifyingHand {
    pub fn new(category: HandCategory, mut cards: [Card; HAND_SIZE], groups: Vec<Group>) -> Self {
        cards.sort_by_key(|c| c.rank);
        let key = TieBreakKey(tie_break_sequence(&cards, &groups));
        Self {
            category,
            cards,
            groups,
            key,
        }
    }

    pub fn score(&self) -> u8 {
        self.category.score()
    }
}

impl fmt::Display for QualifyingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
