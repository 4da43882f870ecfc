use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::HandStatus;
use crate::domain::round::RoundPhase;
use crate::domain::tokens::Tokens;
use crate::domain::{RoundId, UserId};
use crate::engine::round_flow::{RoundEngine, RoundStatus};
use crate::engine::settlement::RoundAudit;
use crate::engine::validation::legal_actions;
use crate::engine::ActionKind;

/// DTO одной руки игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandViewDto {
    pub cards: Vec<Card>,
    pub bet: Tokens,
    pub status: HandStatus,
    pub is_doubled: bool,
    pub score: u8,
}

/// DTO руки дилера.
///
/// Пока идёт ход игрока, видна только верхняя карта; скрытая карта
/// и счёт появляются после выхода из PlayerTurn.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DealerViewDto {
    pub upcard: Card,
    /// Полная рука дилера — только когда она вскрыта.
    pub cards: Option<Vec<Card>>,
    pub score: Option<u8>,
}

/// Снимок раунда после каждого действия — то, что рендерит внешний UI.
/// Чистые данные, никакой логики отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSnapshotDto {
    pub round_id: RoundId,
    pub user_id: UserId,
    pub phase: RoundPhase,
    /// Индекс текущей руки (только в PlayerTurn).
    pub current_hand: Option<usize>,
    pub hands: Vec<HandViewDto>,
    pub dealer: DealerViewDto,
    /// Действия, легальные прямо сейчас (подсказка для UI).
    pub legal_actions: Vec<ActionKind>,
}

/// Снять снимок с живого раунда.
pub fn snapshot_round(engine: &RoundEngine) -> Option<RoundSnapshotDto> {
    let round = &engine.round;
    let upcard = *round.dealer_hand.cards.first()?;

    let revealed = round.phase != RoundPhase::PlayerTurn;
    let dealer = DealerViewDto {
        upcard,
        cards: revealed.then(|| round.dealer_hand.cards.clone()),
        score: revealed.then(|| round.dealer_hand.score()),
    };

    let hands = round
        .player_hands
        .iter()
        .map(|h| HandViewDto {
            cards: h.cards.clone(),
            bet: h.bet,
            status: h.status,
            is_doubled: h.is_doubled,
            score: h.score(),
        })
        .collect();

    let current_hand = if round.phase == RoundPhase::PlayerTurn {
        Some(round.current_hand)
    } else {
        None
    };

    Some(RoundSnapshotDto {
        round_id: round.round_id,
        user_id: round.user_id,
        phase: round.phase,
        current_hand,
        hands,
        dealer,
        legal_actions: legal_actions(round),
    })
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Раунд продолжается — вернуть обновлённый снимок.
    RoundState(RoundSnapshotDto),

    /// Раунд рассчитан — терминальный снимок плюс аудиторская запись.
    RoundFinished {
        snapshot: RoundSnapshotDto,
        audit: RoundAudit,
    },
}

/// Преобразование статуса движка в ответ API.
pub fn map_round_status_to_response(
    status: RoundStatus,
    snapshot: RoundSnapshotDto,
) -> CommandResponse {
    match status {
        RoundStatus::Ongoing => CommandResponse::RoundState(snapshot),
        RoundStatus::Finished(audit, _history) => CommandResponse::RoundFinished {
            snapshot,
            audit,
        },
    }
}
