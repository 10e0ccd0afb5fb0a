use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// RNG из окружения (thread rng). Для реальных раздач.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed из 32 байт (например, сохранённый вместе с историей раздачи).
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(bytes),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
