use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::DomainError;
use crate::engine::EngineError;

/// Конфиг раздачи: сколько участников и сколько карт каждому/на стол.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DealConfig {
    /// Количество участников (хотя бы один).
    pub players: usize,
    /// Закрытых карт на участника (0–2).
    pub private_cards: usize,
    /// Общих карт на столе (0–5).
    pub shared_cards: usize,
}

impl DealConfig {
    pub const MAX_PRIVATE_CARDS: usize = 2;
    pub const MAX_SHARED_CARDS: usize = 5;

    pub fn new(players: usize, private_cards: usize, shared_cards: usize) -> Self {
        Self {
            players,
            private_cards,
            shared_cards,
        }
    }

    /// Сколько карт уйдёт из колоды за раздачу. `None` при переполнении.
    pub fn total_cards(&self) -> Option<usize> {
        self.players
            .checked_mul(self.private_cards)?
            .checked_add(self.shared_cards)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.players == 0 {
            return Err(EngineError::InvalidConfig("нужен хотя бы один участник"));
        }
        if self.private_cards > Self::MAX_PRIVATE_CARDS {
            return Err(EngineError::InvalidConfig("не больше 2 закрытых карт"));
        }
        if self.shared_cards > Self::MAX_SHARED_CARDS {
            return Err(EngineError::InvalidConfig("не больше 5 общих карт"));
        }
        match self.total_cards() {
            Some(total) if total <= Deck::SIZE => Ok(()),
            _ => Err(EngineError::InvalidConfig("в колоде не хватит карт")),
        }
    }
}

impl Default for DealConfig {
    /// Холдем на двоих: по 2 карты и 5 на стол.
    fn default() -> Self {
        Self::new(2, 2, 5)
    }
}

/// Результат раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealtRound {
    /// Закрытые карты, по участникам.
    pub private: Vec<Vec<Card>>,
    /// Общие карты.
    pub shared: Vec<Card>,
}

impl DealtRound {
    /// Рука каждого участника: его карты + общие.
    pub fn hands(&self) -> Vec<Hand> {
        self.private
            .iter()
            .map(|own| Hand::new(own, &self.shared))
            .collect()
    }
}

/// Раздать карты по конфигу.
///
/// Закрытые карты идут по кругу (по одной каждому), затем общие.
/// Если карт не хватает, из колоды не берётся ничего.
pub fn deal(config: &DealConfig, deck: &mut Deck) -> Result<DealtRound, EngineError> {
    config.validate()?;

    let needed = config
        .total_cards()
        .ok_or(EngineError::InvalidConfig("в колоде не хватит карт"))?;
    if needed > deck.remaining() {
        return Err(DomainError::DeckExhausted {
            requested: needed,
            remaining: deck.remaining(),
        }
        .into());
    }

    let mut private: Vec<Vec<Card>> = vec![Vec::with_capacity(config.private_cards); config.players];
    for _ in 0..config.private_cards {
        for own in private.iter_mut() {
            own.push(deck.draw_one()?);
        }
    }
    let shared = deck.draw_n(config.shared_cards)?;

    log::trace!(
        "dealt {} players x {} private + {} shared, {} left in deck",
        config.players,
        config.private_cards,
        config.shared_cards,
        deck.remaining()
    );

    Ok(DealtRound { private, shared })
}
