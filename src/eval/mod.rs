//! Модуль оценки покерных рук.
//!
//! Десять категорий описаны закрытой таблицей [`CATEGORY_TABLE`]:
//! тег категории, функция поиска комбинации и функция сравнения.
//!
//! Основные функции:
//!   `evaluate(category, hand) -> Option<QualifyingHand>`
//!   `compare_hands(a, b) -> Ordering`

pub mod compare;
pub mod evaluator;
pub mod extract;
pub mod hand_rank;

pub use evaluator::{
    compare_hands, entry, evaluate, evaluate_all, evaluate_best, CategoryEntry, CATEGORY_TABLE,
};
pub use hand_rank::{Group, HandCategory, QualifyingHand, TieBreakKey};
