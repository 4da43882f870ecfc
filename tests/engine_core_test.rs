//! Базовые сценарии движка раунда: раздача, hit/stand, натуральный блэкджек.

use blackjack_engine::domain::{Card, Deck, HandStatus, RoundPhase, Tokens};
use blackjack_engine::engine::{
    apply_action, resolve_round, start_round_with_deck, ActionKind, HandOutcome, Ledger,
    RoundEventKind, RoundStatus,
};
use blackjack_engine::infra::InMemoryLedger;

const USER: u64 = 1;

fn deck(draws: &[&str]) -> Deck {
    let cards: Vec<Card> = draws
        .iter()
        .map(|c| c.parse().expect("bad card literal"))
        .collect();
    Deck::from_draw_order(&cards)
}

#[test]
fn deal_debits_bet_and_deals_two_cards_each() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    // Игрок: 7h 9d (16); дилер: 6s 5c (11).
    let engine = start_round_with_deck(
        &mut ledger,
        deck(&["7h", "9d", "6s", "5c", "8h"]),
        1,
        USER,
        Tokens(10),
    )
    .expect("deal failed");

    assert_eq!(ledger.balance(USER).unwrap(), Tokens(90));
    assert_eq!(engine.round.phase, RoundPhase::PlayerTurn);
    assert_eq!(engine.round.current_hand, 0);
    assert_eq!(engine.round.player_hands.len(), 1);
    assert_eq!(engine.round.player_hands[0].cards.len(), 2);
    assert_eq!(engine.round.player_hands[0].score(), 16);
    assert_eq!(engine.round.dealer_hand.cards.len(), 2);
    assert_eq!(engine.wagered, Tokens(10));

    // Журнал: старт + стартовая раздача, ничего лишнего.
    assert_eq!(engine.history.events.len(), 2);
    assert!(matches!(
        engine.history.events[0].kind,
        RoundEventKind::RoundStarted { bet: Tokens(10), .. }
    ));
    assert!(matches!(
        engine.history.events[1].kind,
        RoundEventKind::InitialDeal { .. }
    ));
}

/// Ставка 10, игрок 16, дилер добирает до 19 → проигрыш.
#[test]
fn stand_loses_to_higher_dealer_score() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    let mut engine = start_round_with_deck(
        &mut ledger,
        deck(&["7h", "9d", "6s", "5c", "8h"]),
        1,
        USER,
        Tokens(10),
    )
    .expect("deal failed");

    let status = apply_action(&mut engine, &mut ledger, ActionKind::Stand).expect("stand failed");

    let RoundStatus::Finished(audit, history) = status else {
        panic!("stand на единственной руке должен завершать раунд");
    };

    // Дилер: 6+5=11 → добор 8h → 19.
    assert_eq!(engine.round.phase, RoundPhase::Settled);
    assert_eq!(audit.dealer_score, 19);
    assert_eq!(audit.hands.len(), 1);
    assert_eq!(audit.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(audit.hands[0].payout, Tokens::ZERO);
    assert_eq!(audit.total_payout, Tokens::ZERO);
    assert_eq!(audit.net_change, -10);
    assert_eq!(ledger.balance(USER).unwrap(), Tokens(90));

    // Ровно по одному событию на переход.
    let kinds: Vec<_> = history.events.iter().map(|e| &e.kind).collect();
    assert_eq!(kinds.len(), 6);
    assert!(matches!(kinds[2], RoundEventKind::PlayerActed { action: ActionKind::Stand, .. }));
    assert!(matches!(kinds[3], RoundEventKind::DealerPlayed { score: 19, .. }));
    assert!(matches!(kinds[4], RoundEventKind::HandSettled { .. }));
    assert!(matches!(kinds[5], RoundEventKind::RoundFinished { .. }));
    // Индексы монотонны.
    for (i, e) in history.events.iter().enumerate() {
        assert_eq!(e.index, i as u32);
    }
}

#[test]
fn hit_then_stand_wins_against_dealer() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    // Игрок: 5h 9d (14) → hit 7s → 21; дилер 6s 5c → добор 8d → 19.
    let mut engine = start_round_with_deck(
        &mut ledger,
        deck(&["5h", "9d", "6s", "5c", "7s", "8d"]),
        1,
        USER,
        Tokens(10),
    )
    .expect("deal failed");

    let status = apply_action(&mut engine, &mut ledger, ActionKind::Hit).expect("hit failed");
    assert_eq!(status, RoundStatus::Ongoing);
    assert_eq!(engine.round.player_hands[0].score(), 21);
    assert_eq!(engine.round.player_hands[0].status, HandStatus::Active);

    let status = apply_action(&mut engine, &mut ledger, ActionKind::Stand).expect("stand failed");
    let RoundStatus::Finished(audit, _) = status else {
        panic!("ожидали завершение раунда");
    };

    assert_eq!(audit.hands[0].outcome, HandOutcome::Win);
    assert_eq!(audit.hands[0].payout, Tokens(20));
    assert_eq!(audit.net_change, 10);
    assert_eq!(ledger.balance(USER).unwrap(), Tokens(110));
}

#[test]
fn hit_to_bust_finishes_round_as_loss() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    // Игрок: Kh 9d (19) → hit 5s → 24, перебор.
    let mut engine = start_round_with_deck(
        &mut ledger,
        deck(&["Kh", "9d", "6s", "5c", "5s", "8h"]),
        1,
        USER,
        Tokens(10),
    )
    .expect("deal failed");

    let status = apply_action(&mut engine, &mut ledger, ActionKind::Hit).expect("hit failed");
    let RoundStatus::Finished(audit, _) = status else {
        panic!("перебор единственной руки должен завершать раунд");
    };

    assert_eq!(engine.round.player_hands[0].status, HandStatus::Bust);
    assert_eq!(audit.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(audit.total_payout, Tokens::ZERO);
    assert_eq!(ledger.balance(USER).unwrap(), Tokens(90));
}

/// Блэкджек с раздачи платит 3:2 (ставка 20 → выплата 50).
#[test]
fn natural_blackjack_pays_three_to_two() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    let mut engine = start_round_with_deck(
        &mut ledger,
        deck(&["As", "Kd", "9h", "7c"]),
        1,
        USER,
        Tokens(20),
    )
    .expect("deal failed");

    // PlayerTurn полностью пропускается.
    assert!(engine.natural);
    assert_eq!(engine.round.phase, RoundPhase::DealerTurn);
    assert_eq!(engine.round.player_hands[0].status, HandStatus::Blackjack);

    let status = resolve_round(&mut engine, &mut ledger).expect("resolve failed");
    let RoundStatus::Finished(audit, _) = status else {
        panic!("натуральный блэкджек должен рассчитываться сразу");
    };

    assert_eq!(audit.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(audit.total_payout, Tokens(50));
    assert_eq!(audit.net_change, 30);
    // Дилер вскрыт, но не добирал.
    assert_eq!(audit.dealer_cards.len(), 2);
    assert_eq!(audit.dealer_score, 16);
    assert_eq!(ledger.balance(USER).unwrap(), Tokens(130));
}

#[test]
fn natural_against_dealer_blackjack_is_push() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    let mut engine = start_round_with_deck(
        &mut ledger,
        deck(&["As", "Kd", "Ah", "Qc"]),
        1,
        USER,
        Tokens(20),
    )
    .expect("deal failed");

    let status = resolve_round(&mut engine, &mut ledger).expect("resolve failed");
    let RoundStatus::Finished(audit, _) = status else {
        panic!("ожидали завершение раунда");
    };

    assert_eq!(audit.hands[0].outcome, HandOutcome::Push);
    assert_eq!(audit.total_payout, Tokens(20));
    assert_eq!(audit.net_change, 0);
    assert_eq!(ledger.balance(USER).unwrap(), Tokens(100));
}
