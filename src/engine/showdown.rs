use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::domain::ParticipantId;
use crate::engine::EngineError;
use crate::eval::{compare_hands, evaluate_all, QualifyingHand};

/// Лучшая комбинация одного участника.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantResult {
    pub participant: ParticipantId,
    pub best: QualifyingHand,
}

/// Итог шоудауна.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownResult {
    /// По одному результату на участника, в порядке входа.
    pub per_participant: Vec<ParticipantResult>,
    /// Все участники с максимальной рукой, по возрастанию id.
    /// Больше одного значит делёж банка.
    pub winners: Vec<ParticipantId>,
}

impl ShowdownResult {
    pub fn best_of(&self, participant: ParticipantId) -> Option<&QualifyingHand> {
        self.per_participant
            .iter()
            .find(|r| r.participant == participant)
            .map(|r| &r.best)
    }

    pub fn is_winner(&self, participant: ParticipantId) -> bool {
        self.winners.contains(&participant)
    }

    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Найти лучшую руку каждого участника и всех победителей.
///
/// Ожидается, что у каждого участника хотя бы 5 карт: тогда старшая
/// карта находится всегда, а её отсутствие даёт ошибку `NoQualifyingHand`.
pub fn rank_hands(hands: &[Hand]) -> Result<ShowdownResult, EngineError> {
    if hands.is_empty() {
        return Err(EngineError::NoParticipants);
    }

    let per_participant = best_per_participant(hands)?;

    // Пул кандидатов: score, затем сравнение внутри категории.
    let mut pool: Vec<&ParticipantResult> = per_participant.iter().collect();
    pool.sort_by(|a, b| compare_hands(&a.best, &b.best));

    let top = pool.last().ok_or(EngineError::NoParticipants)?;
    let mut winners: Vec<_> = pool
        .iter()
        .rev()
        .take_while(|r| compare_hands(&r.best, &top.best) == Ordering::Equal)
        .map(|r| r.participant)
        .collect();
    winners.sort_unstable();

    log::debug!("showdown winners: {winners:?} with {}", top.best);

    Ok(ShowdownResult {
        per_participant,
        winners,
    })
}

/// Все категории руки, из них остаётся сильнейшая по score.
fn best_of(participant: ParticipantId, hand: &Hand) -> Result<ParticipantResult, EngineError> {
    let best = evaluate_all(hand)
        .into_iter()
        .max_by_key(|q| q.score())
        .ok_or(EngineError::NoQualifyingHand(participant))?;

    log::debug!("participant {participant}: {best}");

    Ok(ParticipantResult { participant, best })
}

#[cfg(not(feature = "parallel"))]
fn best_per_participant(hands: &[Hand]) -> Result<Vec<ParticipantResult>, EngineError> {
    hands
        .iter()
        .enumerate()
        .map(|(i, hand)| best_of(i, hand))
        .collect()
}

/// Участники независимы друг от друга, поэтому их можно считать параллельно.
#[cfg(feature = "parallel")]
fn best_per_participant(hands: &[Hand]) -> Result<Vec<ParticipantResult>, EngineError> {
    use rayon::prelude::*;

    hands
        .par_iter()
        .enumerate()
        .map(|(i, hand)| best_of(i, hand))
        .collect()
}
