//! Доменная модель блэкджека: карты, колода, руки, раунд, токены.

pub mod card;
pub mod deck;
pub mod hand;
pub mod round;
pub mod tokens;

// Базовые идентификаторы. Пользователей создаёт внешний слой сессий,
// раунды нумерует infra::IdGenerator.
pub type UserId = u64;
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use round::*;
pub use tokens::*;
