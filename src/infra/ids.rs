use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::RoundId;

/// Простая генерация ID раундов на монотонном счётчике.
/// Удобно для локальных тестов и одиночного сервиса;
/// в кластере сервис может подставлять свои ID.
#[derive(Debug)]
pub struct IdGenerator {
    round_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            round_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_round_id(&self) -> RoundId {
        self.round_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
