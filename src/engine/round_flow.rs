use log::{debug, warn};

use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, HandStatus};
use crate::domain::round::{Round, RoundPhase};
use crate::domain::tokens::Tokens;
use crate::domain::{RoundId, UserId};
use crate::engine::actions::ActionKind;
use crate::engine::dealer::dealer_play;
use crate::engine::errors::EngineError;
use crate::engine::ledger::Ledger;
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::settlement::{build_audit, settle_natural, settle_round, RoundAudit};
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;
use crate::eval;

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, PartialEq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundAudit, RoundHistory),
}

/// Живое состояние одного раунда: раунд + его колода + журнал.
#[derive(Debug)]
pub struct RoundEngine {
    pub round: Round,
    pub deck: Deck,
    /// Всё реально поставленное в этом раунде: исходная ставка
    /// плюс добивки дабла/сплита. Нужно для net_change.
    pub wagered: Tokens,
    /// Немедленный блэкджек с раздачи — расчёт идёт по особому правилу.
    pub natural: bool,
    pub history: RoundHistory,
    /// Итоговая запись; появляется ровно один раз при переходе в Settled.
    pub audit: Option<RoundAudit>,
}

/// Старт нового раунда:
/// - списывает ставку через леджер (неудача = раунд НЕ создаётся);
/// - строит и тасует свежую колоду;
/// - раздаёт по две карты игроку и дилеру.
///
/// При натуральном блэкджеке фаза становится DealerTurn —
/// вызывающий код (обычно `RoundManager`) сразу зовёт `resolve_round`,
/// так что PlayerTurn полностью пропускается.
pub fn start_round<L: Ledger, R: RandomSource>(
    ledger: &mut L,
    rng: &mut R,
    round_id: RoundId,
    user_id: UserId,
    bet: Tokens,
) -> Result<RoundEngine, EngineError> {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    start_round_with_deck(ledger, deck, round_id, user_id, bet)
}

/// Вариант старта с готовой колодой — для реплея раундов
/// и детерминированных тестов (`Deck::from_draw_order`).
pub fn start_round_with_deck<L: Ledger>(
    ledger: &mut L,
    mut deck: Deck,
    round_id: RoundId,
    user_id: UserId,
    bet: Tokens,
) -> Result<RoundEngine, EngineError> {
    if bet.is_zero() {
        return Err(EngineError::InvalidBet);
    }

    // Дебет до любого создания состояния: если он не прошёл,
    // раунда просто нет.
    ledger.adjust(user_id, -bet.as_delta())?;

    let p1 = deck.draw().ok_or(EngineError::DeckExhausted)?;
    let p2 = deck.draw().ok_or(EngineError::DeckExhausted)?;
    let d1 = deck.draw().ok_or(EngineError::DeckExhausted)?;
    let d2 = deck.draw().ok_or(EngineError::DeckExhausted)?;

    let mut round = Round::new(round_id, user_id, bet);
    round.player_hands.push(Hand::new(bet, vec![p1, p2]));
    round.dealer_hand = Hand::dealer(vec![d1, d2]);
    round.current_hand = 0;

    let mut history = RoundHistory::new();
    history.push(RoundEventKind::RoundStarted {
        round_id,
        user_id,
        bet,
    });
    history.push(RoundEventKind::InitialDeal {
        player_cards: vec![p1, p2],
        dealer_upcard: d1,
    });

    let natural = eval::is_blackjack(&round.player_hands[0].cards);
    if natural {
        round.player_hands[0].status = HandStatus::Blackjack;
        round.phase = RoundPhase::DealerTurn;
    } else {
        round.phase = RoundPhase::PlayerTurn;
    }

    debug!(
        "round {round_id}: deal user={user_id} bet={bet} natural={natural}"
    );

    Ok(RoundEngine {
        round,
        deck,
        wagered: bet,
        natural,
        history,
        audit: None,
    })
}

/// Применить действие игрока к активному раунду.
///
/// Отклонённое действие (InvalidAction/InsufficientFunds) не оставляет
/// никаких следов: ни в раунде, ни в леджере, ни в журнале.
pub fn apply_action<L: Ledger>(
    engine: &mut RoundEngine,
    ledger: &mut L,
    kind: ActionKind,
) -> Result<RoundStatus, EngineError> {
    validate_action(&engine.round, kind)?;

    let idx = engine.round.current_hand;

    match kind {
        ActionKind::Hit => {
            let card = engine.deck.draw().ok_or(EngineError::DeckExhausted)?;
            let hand = &mut engine.round.player_hands[idx];
            hand.cards.push(card);
            engine.history.push(RoundEventKind::PlayerActed {
                hand_index: idx,
                action: kind,
                card: Some(card),
            });

            if engine.round.player_hands[idx].is_bust() {
                engine.round.player_hands[idx].status = HandStatus::Bust;
                advance_or_finish(engine, ledger)
            } else {
                Ok(RoundStatus::Ongoing)
            }
        }

        ActionKind::Stand => {
            engine.round.player_hands[idx].status = HandStatus::Stand;
            engine.history.push(RoundEventKind::PlayerActed {
                hand_index: idx,
                action: kind,
                card: None,
            });
            advance_or_finish(engine, ledger)
        }

        ActionKind::Double => {
            // Колода проверяется до дебета: отклонённое действие не должно
            // оставить списание без карты.
            if engine.deck.remaining() < 1 {
                return Err(EngineError::DeckExhausted);
            }
            let add_on = engine.round.player_hands[idx].bet;
            // Добивка списывается до каких-либо мутаций: неудачный дебет
            // отклоняет действие, но не раунд.
            ledger.adjust(engine.round.user_id, -add_on.as_delta())?;

            let card = engine.deck.draw().ok_or(EngineError::DeckExhausted)?;
            engine.wagered += add_on;
            let hand = &mut engine.round.player_hands[idx];
            hand.bet += add_on;
            hand.is_doubled = true;
            hand.cards.push(card);
            hand.status = if hand.is_bust() {
                HandStatus::Bust
            } else {
                HandStatus::Stand
            };
            engine.history.push(RoundEventKind::PlayerActed {
                hand_index: idx,
                action: kind,
                card: Some(card),
            });
            advance_or_finish(engine, ledger)
        }

        ActionKind::Split => {
            if engine.deck.remaining() < 2 {
                return Err(EngineError::DeckExhausted);
            }
            let bet = engine.round.player_hands[idx].bet;
            ledger.adjust(engine.round.user_id, -bet.as_delta())?;

            let first = engine.deck.draw().ok_or(EngineError::DeckExhausted)?;
            let second = engine.deck.draw().ok_or(EngineError::DeckExhausted)?;
            engine.wagered += bet;

            let (orig_a, orig_b) = {
                let hand = &engine.round.player_hands[idx];
                (hand.cards[0], hand.cards[1])
            };

            // Две новые руки встают на место текущей; первая из них
            // остаётся текущей и может сплитоваться снова.
            engine.round.player_hands[idx] = Hand::new(bet, vec![orig_a, first]);
            engine
                .round
                .player_hands
                .insert(idx + 1, Hand::new(bet, vec![orig_b, second]));

            engine.history.push(RoundEventKind::HandSplit {
                hand_index: idx,
                drawn: (first, second),
            });
            Ok(RoundStatus::Ongoing)
        }

        ActionKind::Deal { .. } => Err(EngineError::RoundInProgress),
    }
}

/// Перейти к следующей руке или, если рук больше нет, к ходу дилера
/// и расчёту. Руки правее текущей всегда Active: сплит вставляет
/// только свежие активные руки.
fn advance_or_finish<L: Ledger>(
    engine: &mut RoundEngine,
    ledger: &mut L,
) -> Result<RoundStatus, EngineError> {
    if engine.round.current_hand + 1 < engine.round.player_hands.len() {
        engine.round.current_hand += 1;
        Ok(RoundStatus::Ongoing)
    } else {
        engine.round.phase = RoundPhase::DealerTurn;
        resolve_round(engine, ledger)
    }
}

/// Доиграть дилера, рассчитать руки и провести выплату.
///
/// Терминальный переход атомарен относительно кредита: дилер добирает
/// на рабочих копиях, и только после успешного кредита копии
/// фиксируются, события пишутся в журнал и фаза становится Settled.
/// Если кредит не прошёл, раунд остаётся в DealerTurn без каких-либо
/// изменений — `resolve_round` можно вызывать повторно.
pub fn resolve_round<L: Ledger>(
    engine: &mut RoundEngine,
    ledger: &mut L,
) -> Result<RoundStatus, EngineError> {
    if engine.round.phase != RoundPhase::DealerTurn {
        return Err(EngineError::InvalidAction);
    }

    let mut dealer = engine.round.dealer_hand.clone();
    let mut deck = engine.deck.clone();

    // При натуральном блэкджеке дилер не добирает — только вскрывается.
    if !engine.natural {
        dealer_play(&mut dealer, &mut deck)?;
    }

    let settlement = if engine.natural {
        settle_natural(&engine.round.player_hands[0], &dealer.cards, engine.wagered)
    } else {
        settle_round(&engine.round.player_hands, &dealer.cards, engine.wagered)
    };

    if !settlement.total_payout.is_zero() {
        if let Err(err) = ledger.adjust(
            engine.round.user_id,
            settlement.total_payout.as_delta(),
        ) {
            warn!(
                "round {}: выплата {} не проведена: {err}",
                engine.round.round_id, settlement.total_payout
            );
            return Err(err.into());
        }
    }

    // Кредит прошёл — фиксируем терминальный переход целиком.
    engine.round.dealer_hand = dealer;
    engine.deck = deck;

    engine.history.push(RoundEventKind::DealerPlayed {
        cards: engine.round.dealer_hand.cards.clone(),
        score: engine.round.dealer_hand.score(),
    });
    for hs in &settlement.hands {
        engine.history.push(RoundEventKind::HandSettled {
            hand_index: hs.hand_index,
            outcome: hs.outcome,
            payout: hs.payout,
        });
    }
    engine.history.push(RoundEventKind::RoundFinished {
        total_payout: settlement.total_payout,
        net_change: settlement.net_change,
    });

    engine.round.phase = RoundPhase::Settled;

    let audit = build_audit(&engine.round, &settlement);
    engine.audit = Some(audit.clone());

    debug!(
        "round {}: settled payout={} net={}",
        engine.round.round_id, settlement.total_payout, settlement.net_change
    );

    Ok(RoundStatus::Finished(audit, engine.history.clone()))
}
