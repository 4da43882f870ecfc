use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{Hand, HandStatus};
use crate::domain::round::Round;
use crate::domain::tokens::Tokens;
use crate::domain::{RoundId, UserId};
use crate::eval;

/// Исход одной руки игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandOutcome {
    Win,
    Lose,
    Push,
    /// Натуральный блэкджек с раздачи (оплата 3:2).
    Blackjack,
}

/// Расчёт одной руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandSettlement {
    pub hand_index: usize,
    pub outcome: HandOutcome,
    /// Сколько токенов возвращается игроку по этой руке (0 = проигрыш).
    pub payout: Tokens,
}

/// Итог расчёта всего раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSettlement {
    pub hands: Vec<HandSettlement>,
    /// Суммарная выплата — кредитуется через леджер одним вызовом.
    pub total_payout: Tokens,
    /// Чистый эффект раунда: выплата минус всё реально поставленное
    /// (включая добивки дабла/сплита).
    pub net_change: i64,
}

/// Расчёт рук по общему правилу, в порядке рук, каждая независимо:
/// - перебор руки → Lose, 0;
/// - перебор дилера → Win, bet*2;
/// - счёт выше дилера → Win, bet*2;
/// - счёт ниже дилера → Lose, 0;
/// - равенство → Push, возврат ставки.
pub fn settle_round(player_hands: &[Hand], dealer_cards: &[Card], wagered: Tokens) -> RoundSettlement {
    let dealer_score = eval::score(dealer_cards);
    let dealer_bust = dealer_score > 21;

    let mut hands = Vec::with_capacity(player_hands.len());
    let mut total_payout = Tokens::ZERO;

    for (idx, hand) in player_hands.iter().enumerate() {
        let (outcome, payout) = if hand.status == HandStatus::Bust {
            (HandOutcome::Lose, Tokens::ZERO)
        } else {
            let score = hand.score();
            if dealer_bust || score > dealer_score {
                (HandOutcome::Win, Tokens(hand.bet.0 * 2))
            } else if score < dealer_score {
                (HandOutcome::Lose, Tokens::ZERO)
            } else {
                (HandOutcome::Push, hand.bet)
            }
        };

        total_payout += payout;
        hands.push(HandSettlement {
            hand_index: idx,
            outcome,
            payout,
        });
    }

    RoundSettlement {
        hands,
        total_payout,
        net_change: total_payout.as_delta() - wagered.as_delta(),
    }
}

/// Специальный расчёт немедленного блэкджека с раздачи.
/// Никогда не проходит через общий цикл:
/// - блэкджек против не-блэкджека дилера платит 3:2 (bet * 2.5);
/// - блэкджек против блэкджека дилера — Push, возврат ставки.
pub fn settle_natural(hand: &Hand, dealer_cards: &[Card], wagered: Tokens) -> RoundSettlement {
    let (outcome, payout) = if eval::is_blackjack(dealer_cards) {
        (HandOutcome::Push, hand.bet)
    } else {
        (HandOutcome::Blackjack, blackjack_payout(hand.bet))
    };

    RoundSettlement {
        hands: vec![HandSettlement {
            hand_index: 0,
            outcome,
            payout,
        }],
        total_payout: payout,
        net_change: payout.as_delta() - wagered.as_delta(),
    }
}

/// Выплата 3:2 в целых токенах: bet * 5 / 2 с округлением вниз.
fn blackjack_payout(bet: Tokens) -> Tokens {
    Tokens(bet.0 * 5 / 2)
}

/// Итог по одной руке для аудиторской записи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandAudit {
    pub cards: Vec<Card>,
    pub bet: Tokens,
    pub is_doubled: bool,
    pub outcome: HandOutcome,
    pub payout: Tokens,
}

/// Структурированная запись о завершённом раунде — контракт,
/// на который опирается внешнее хранилище истории.
/// Создаётся ровно один раз, при переходе в Settled.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundAudit {
    pub round_id: RoundId,
    pub user_id: UserId,
    pub initial_bet: Tokens,
    pub hands: Vec<HandAudit>,
    pub dealer_cards: Vec<Card>,
    pub dealer_score: u8,
    pub total_payout: Tokens,
    pub net_change: i64,
}

/// Собрать аудиторскую запись из финального состояния раунда и расчёта.
pub fn build_audit(round: &Round, settlement: &RoundSettlement) -> RoundAudit {
    let hands = round
        .player_hands
        .iter()
        .zip(settlement.hands.iter())
        .map(|(hand, hs)| HandAudit {
            cards: hand.cards.clone(),
            bet: hand.bet,
            is_doubled: hand.is_doubled,
            outcome: hs.outcome,
            payout: hs.payout,
        })
        .collect();

    RoundAudit {
        round_id: round.round_id,
        user_id: round.user_id,
        initial_bet: round.initial_bet,
        hands,
        dealer_cards: round.dealer_hand.cards.clone(),
        dealer_score: round.dealer_hand.score(),
        total_payout: settlement.total_payout,
        net_change: settlement.net_change,
    }
}
