//! Оценка и ранжирование покерных рук.
//!
//! Слои:
//! - [`domain`]: карты, колода, рука игрока (корзины по рангу/масти, стриты);
//! - [`eval`]: десять категорий комбинаций и сравнение внутри категории;
//! - [`engine`]: раздача по конфигу и шоудаун с определением победителей;
//! - [`infra`]: RNG для перемешивания.
//!
//! Туз хранится как ранг 1 (самый младший в отсортированной руке),
//! но во всех игровых сравнениях считается старшим.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, Deck, DomainError, Hand, ParticipantId, Rank, Suit};
pub use engine::{deal, rank_hands, DealConfig, EngineError, ShowdownResult};
pub use eval::{evaluate, HandCategory, QualifyingHand, TieBreakKey};
