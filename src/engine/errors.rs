use crate::domain::{DomainError, ParticipantId};

use thiserror::Error;

/// Ошибки движка: раздача и шоудаун.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Некорректная конфигурация раздачи: {0}")]
    InvalidConfig(&'static str),

    #[error("Нет участников для шоудауна")]
    NoParticipants,

    /// У участника не нашлось ни одной комбинации (меньше 5 карт).
    /// Это нарушение внутреннего инварианта, а не игровой исход.
    #[error("У участника {0} нет ни одной комбинации")]
    NoQualifyingHand(ParticipantId),
}
