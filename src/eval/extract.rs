//! Общие шаги извлечения комбинации: "найти группу, потом добрать".

use crate::domain::card::{Card, Rank};
use crate::domain::hand::{Hand, RankBuckets, HAND_SIZE};

/// Найти группу из `size` карт одного ранга и забрать её из корзин.
///
/// Сначала проверяются тузы, затем K → 2. Ранги из `exclude` пропускаются.
pub fn take_group(buckets: &mut RankBuckets, size: usize, exclude: &[Rank]) -> Option<(Rank, Vec<Card>)> {
    let rank = Rank::PRIORITY
        .into_iter()
        .find(|r| !exclude.contains(r) && buckets.count(*r) >= size)?;
    Some((rank, buckets.take(rank, size)))
}

/// Добрать `picked` до пяти карт из оставшихся: все тузы, потом K → 2.
pub fn pad(buckets: &mut RankBuckets, picked: &mut Vec<Card>) {
    for rank in Rank::PRIORITY {
        if picked.len() >= HAND_SIZE {
            break;
        }
        let need = HAND_SIZE - picked.len();
        picked.extend(buckets.take(rank, need));
    }
}

/// Ровно пять карт или ничего.
pub fn into_five(cards: Vec<Card>) -> Option<[Card; HAND_SIZE]> {
    <[Card; HAND_SIZE]>::try_from(cards).ok()
}

/// Пять старших карт произвольного набора (туз старший).
pub fn top_five(cards: &[Card]) -> Option<[Card; HAND_SIZE]> {
    let mut buckets = Hand::from_cards(cards.iter().copied()).rank_buckets();
    let mut picked = Vec::with_capacity(HAND_SIZE);
    pad(&mut buckets, &mut picked);
    into_five(picked)
}
