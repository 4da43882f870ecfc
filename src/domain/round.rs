use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::domain::tokens::Tokens;
use crate::domain::{RoundId, UserId};

/// Фаза раунда. Движется строго вперёд:
/// Idle → PlayerTurn → DealerTurn → Settled.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    /// Раунд ещё не начался (между раундами).
    Idle,
    /// Игрок принимает решения по своим рукам.
    PlayerTurn,
    /// Все руки игрока закрыты, дилер добирает и идёт расчёт.
    DealerTurn,
    /// Раунд рассчитан, выплата проведена.
    Settled,
}

/// Один раунд блэкджека для одного пользователя.
///
/// Раунд владеет рукой дилера и всеми руками игрока.
/// Инвариант: пока фаза PlayerTurn, `current_hand` указывает на Active-руку;
/// после выхода из PlayerTurn индекс не имеет смысла.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub round_id: RoundId,
    pub user_id: UserId,
    pub phase: RoundPhase,
    /// Исходная ставка, заявленная при `Deal`.
    pub initial_bet: Tokens,
    pub dealer_hand: Hand,
    /// Индекс 0 — исходная рука; сплиты вставляют новые руки на текущую позицию.
    pub player_hands: Vec<Hand>,
    pub current_hand: usize,
}

impl Round {
    pub fn new(round_id: RoundId, user_id: UserId, initial_bet: Tokens) -> Self {
        Self {
            round_id,
            user_id,
            phase: RoundPhase::Idle,
            initial_bet,
            dealer_hand: Hand::dealer(Vec::new()),
            player_hands: Vec::new(),
            current_hand: 0,
        }
    }

    /// Текущая активная рука игрока (только в фазе PlayerTurn).
    pub fn active_hand(&self) -> Option<&Hand> {
        if self.phase != RoundPhase::PlayerTurn {
            return None;
        }
        self.player_hands.get(self.current_hand)
    }

    /// Раунд завершён и может быть заменён новым `Deal`.
    pub fn is_settled(&self) -> bool {
        self.phase == RoundPhase::Settled
    }
}
