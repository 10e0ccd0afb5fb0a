use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Масть карты. На силу руки не влияет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Ранг карты.
///
/// Туз хранится как 1 и в отсортированной руке стоит самым младшим,
/// но при любом игровом сравнении считается старшим (14).
/// Поэтому derive(Ord) здесь задаёт порядок хранения, а не порядок силы:
/// для силы есть [`Rank::high_value`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Все ранги в порядке хранения: A, 2, …, K.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Порядок, в котором ищутся группы и добор: сначала тузы, потом K → 2.
    pub const PRIORITY: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Хранимое значение 1..=13 (туз = 1).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Значение для сравнения силы: туз = 14, остальные как есть.
    pub const fn high_value(self) -> u8 {
        match self {
            Rank::Ace => 14,
            r => r as u8,
        }
    }

    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace)
    }
}

impl TryFrom<u8> for Rank {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Rank::ALL[(value - 1) as usize]),
            _ => Err(DomainError::MalformedCard(value)),
        }
    }
}

/// Обычная покерная карта (52-карточная колода).
///
/// Сравнение "по рангу" делает рука ([`crate::domain::Hand`]) через
/// `sort_by_key`, поэтому `Ord` у карты намеренно нет: две карты одного
/// ранга разных мастей не равны.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Собрать карту из числового ранга 1..=13 (1 = туз).
    pub fn from_value(value: u8, suit: Suit) -> Result<Self, DomainError> {
        Ok(Self::new(Rank::try_from(value)?, suit))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            r => char::from(b'0' + r.value()),
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c".
impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r_ch), Some(s_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(DomainError::MalformedCardString(s.to_string()));
        };

        let rank = match r_ch {
            'A' | 'a' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            _ => return Err(DomainError::MalformedCardString(s.to_string())),
        };

        let suit = match s_ch {
            'c' | 'C' => Suit::Clubs,
            'd' | 'D' => Suit::Diamonds,
            'h' | 'H' => Suit::Hearts,
            's' | 'S' => Suit::Spades,
            _ => return Err(DomainError::MalformedCardString(s.to_string())),
        };

        Ok(Card { rank, suit })
    }
}
