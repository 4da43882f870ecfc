use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::tokens::Tokens;
use crate::domain::{RoundId, UserId};
use crate::engine::actions::ActionKind;
use crate::engine::settlement::HandOutcome;

/// Тип события в раунде.
///
/// События добавляются ровно по одному на совершённый переход состояния
/// и только ПОСЛЕ успеха парного вызова леджера — отклонённое действие
/// не оставляет следа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Раунд начался, исходная ставка уже списана.
    RoundStarted {
        round_id: RoundId,
        user_id: UserId,
        bet: Tokens,
    },

    /// Стартовая раздача: две карты игроку, дилеру видна только верхняя.
    InitialDeal {
        player_cards: Vec<Card>,
        dealer_upcard: Card,
    },

    /// Действие игрока по конкретной руке.
    /// `card` заполнена для hit/double (вытянутая карта).
    PlayerActed {
        hand_index: usize,
        action: ActionKind,
        card: Option<Card>,
    },

    /// Сплит: рука на этой позиции заменена двумя новыми,
    /// каждая добрала по указанной карте.
    HandSplit {
        hand_index: usize,
        drawn: (Card, Card),
    },

    /// Дилер доиграл (или вскрылся при натуральном блэкджеке).
    DealerPlayed {
        cards: Vec<Card>,
        score: u8,
    },

    /// Итог по одной руке игрока.
    HandSettled {
        hand_index: usize,
        outcome: HandOutcome,
        payout: Tokens,
    },

    /// Раунд завершён, выплата проведена.
    RoundFinished {
        total_payout: Tokens,
        net_change: i64,
    },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда — контракт для внешнего хранилища истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }
}

impl Default for RoundHistory {
    fn default() -> Self {
        Self::new()
    }
}
