//! Покерный движок поверх оценщика: раздача карт и шоудаун.
//!
//! Основные операции:
//!   - `deal` – раздать закрытые и общие карты из колоды
//!   - `rank_hands` – найти лучшую комбинацию каждого и победителей

pub mod dealer;
pub mod errors;
pub mod showdown;

pub use dealer::{deal, DealConfig, DealtRound};
pub use errors::EngineError;
pub use showdown::{rank_hands, ParticipantResult, ShowdownResult};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
