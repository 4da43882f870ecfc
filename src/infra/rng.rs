use crate::engine::RandomSource;

/// Боевой RNG: системный `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        use rand::thread_rng;

        slice.shuffle(&mut thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея раундов.
/// Одинаковый seed даёт одинаковый порядок колоды.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// RNG-заглушка: не перемешивает вовсе.
/// Колода остаётся в стандартном порядке — удобно в тестах.
#[derive(Clone, Debug, Default)]
pub struct NoShuffleRng;

impl RandomSource for NoShuffleRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}
