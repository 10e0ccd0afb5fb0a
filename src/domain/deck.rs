use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::errors::DomainError;
use crate::engine::RandomSource;

/// Колода из 52 карт с курсором выдачи.
///
/// Карты выдаются строго последовательно и без возврата; перемешивание
/// делает внешний RNG (см. `infra::rng`) и сбрасывает курсор.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// Стандартная колода в порядке:
    /// Clubs A..K, Diamonds A..K, Hearts A..K, Spades A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards, next: 0 }
    }

    /// Перемешать все 52 карты и начать выдачу заново.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
        self.next = 0;
    }

    /// Всего карт в колоде (выданные тоже считаются).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Сколько карт ещё можно выдать.
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.next)
    }

    /// Все карты в текущем порядке.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Взять одну карту.
    pub fn draw_one(&mut self) -> Result<Card, DomainError> {
        let card = self
            .cards
            .get(self.next)
            .copied()
            .ok_or(DomainError::DeckExhausted {
                requested: 1,
                remaining: 0,
            })?;
        self.next += 1;
        Ok(card)
    }

    /// Взять `n` карт. Либо все, либо ничего: при нехватке курсор не двигается.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        let remaining = self.remaining();
        let taken = (n <= remaining)
            .then(|| self.cards.get(self.next..self.next + n))
            .flatten()
            .ok_or(DomainError::DeckExhausted {
                requested: n,
                remaining,
            })?
            .to_vec();
        self.next += n;
        Ok(taken)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}
