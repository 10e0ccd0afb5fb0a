use thiserror::Error;

/// Нарушения структурных инвариантов доменных типов.
///
/// "Нет подходящей комбинации" сюда не относится: это обычный `None`
/// из оценщика, а не ошибка.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Недопустимый ранг карты: {0} (ожидается 1..=13)")]
    MalformedCard(u8),

    #[error("Не удалось разобрать карту из строки {0:?}")]
    MalformedCardString(String),

    #[error("Колода исчерпана: запрошено {requested}, осталось {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
}
