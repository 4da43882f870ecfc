use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::tokens::Tokens;
use crate::eval;

/// Статус руки в текущем раунде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandStatus {
    /// Рука ждёт решений игрока.
    Active,
    /// Игрок остановился (включая принудительный stand после дабла).
    Stand,
    /// Перебор — рука проиграла независимо от дилера.
    Bust,
    /// Натуральный блэкджек с раздачи (две карты, 21).
    Blackjack,
}

/// Одна рука игрока (или дилера — тогда ставка нулевая и не используется).
///
/// Инварианты:
/// - `cards` только растёт: карты добавляются, никогда не убираются;
/// - `bet` фиксируется при создании и меняется ровно один раз — при дабле.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub bet: Tokens,
    pub status: HandStatus,
    pub is_doubled: bool,
}

impl Hand {
    pub fn new(bet: Tokens, cards: Vec<Card>) -> Self {
        Self {
            cards,
            bet,
            status: HandStatus::Active,
            is_doubled: false,
        }
    }

    /// Рука дилера: ставка не имеет смысла.
    pub fn dealer(cards: Vec<Card>) -> Self {
        Self::new(Tokens::ZERO, cards)
    }

    /// Лучший счёт руки (с мягкой/жёсткой обработкой тузов).
    pub fn score(&self) -> u8 {
        eval::score(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        eval::is_bust(&self.cards)
    }

    /// Рука закончила участие в фазе хода игрока.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.status, HandStatus::Active)
    }
}
