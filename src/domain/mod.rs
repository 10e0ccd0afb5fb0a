//! Доменная модель: карты, колода, рука игрока.

pub mod card;
pub mod deck;
pub mod errors;
pub mod hand;

/// Номер участника шоудауна (индекс его руки во входном списке).
pub type ParticipantId = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use errors::DomainError;
pub use hand::*;
