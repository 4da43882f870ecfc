//! Инфраструктурный слой вокруг движка блэкджека:
//! - генерация ID раундов;
//! - RNG-реализации для движка;
//! - in-memory леджер для тестов и локального запуска.

pub mod ids;
pub mod ledger;
pub mod rng;

pub use ids::IdGenerator;
pub use ledger::InMemoryLedger;
pub use rng::{DeterministicRng, NoShuffleRng, SystemRng};
