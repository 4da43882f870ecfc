//! Внешний API: команды, снимки со скрытой картой дилера, запросы.

use blackjack_engine::api::{
    execute_action, handle_query, ApiError, CommandResponse, Query, QueryResponse,
};
use blackjack_engine::domain::{Card, Deck, RoundPhase, Tokens};
use blackjack_engine::engine::{ActionKind, ActionRequest, Ledger, RoundManager};
use blackjack_engine::infra::{IdGenerator, InMemoryLedger, NoShuffleRng};

const USER: u64 = 1;

fn deck(draws: &[&str]) -> Deck {
    let cards: Vec<Card> = draws
        .iter()
        .map(|c| c.parse().expect("bad card literal"))
        .collect();
    Deck::from_draw_order(&cards)
}

fn c(s: &str) -> Card {
    s.parse().expect("bad card literal")
}

/// Полный путь команды Deal через API с неперемешанной колодой:
/// стандартный порядок отдаёт As Ks игроку (блэкджек) и Qs Js дилеру.
#[test]
fn deal_command_with_natural_returns_round_finished() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    let mut manager = RoundManager::new();
    let ids = IdGenerator::new();

    let response = execute_action(
        &mut manager,
        &mut ledger,
        &mut NoShuffleRng,
        &ids,
        ActionRequest {
            user_id: USER,
            kind: ActionKind::Deal { bet: Tokens(20) },
        },
    )
    .expect("deal failed");

    let CommandResponse::RoundFinished { snapshot, audit } = response else {
        panic!("блэкджек с раздачи должен завершать раунд в одном ответе");
    };

    assert_eq!(snapshot.round_id, 1);
    assert_eq!(snapshot.phase, RoundPhase::Settled);
    assert_eq!(snapshot.hands[0].cards, vec![c("As"), c("Ks")]);
    // Рука дилера вскрыта в терминальном снимке.
    assert_eq!(snapshot.dealer.cards, Some(vec![c("Qs"), c("Js")]));
    assert_eq!(snapshot.dealer.score, Some(20));
    assert!(snapshot.legal_actions.is_empty());

    assert_eq!(audit.total_payout, Tokens(50));
    assert_eq!(ledger.balance(USER).unwrap(), Tokens(130));
}

#[test]
fn snapshot_hides_dealer_hole_card_during_player_turn() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    let mut manager = RoundManager::new();

    manager
        .deal_with_deck(&mut ledger, deck(&["7h", "9d", "6s", "5c", "8h"]), 1, USER, Tokens(10))
        .expect("deal failed");

    let QueryResponse::RoundState(Some(snapshot)) =
        handle_query(&manager, Query::RoundState { user_id: USER })
    else {
        panic!("ожидали снимок активного раунда");
    };

    assert_eq!(snapshot.phase, RoundPhase::PlayerTurn);
    assert_eq!(snapshot.current_hand, Some(0));
    // Видна только верхняя карта дилера.
    assert_eq!(snapshot.dealer.upcard, c("6s"));
    assert_eq!(snapshot.dealer.cards, None);
    assert_eq!(snapshot.dealer.score, None);
    // 7h 9d — ни пары, ни причин запрещать дабл на двух картах.
    assert_eq!(
        snapshot.legal_actions,
        vec![ActionKind::Hit, ActionKind::Stand, ActionKind::Double]
    );
}

#[test]
fn stand_command_reveals_dealer_and_returns_audit() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    let mut manager = RoundManager::new();
    let ids = IdGenerator::new();

    manager
        .deal_with_deck(&mut ledger, deck(&["7h", "9d", "6s", "5c", "8h"]), 1, USER, Tokens(10))
        .expect("deal failed");

    let response = execute_action(
        &mut manager,
        &mut ledger,
        &mut NoShuffleRng,
        &ids,
        ActionRequest {
            user_id: USER,
            kind: ActionKind::Stand,
        },
    )
    .expect("stand failed");

    let CommandResponse::RoundFinished { snapshot, audit } = response else {
        panic!("stand на единственной руке должен завершать раунд");
    };

    assert_eq!(snapshot.phase, RoundPhase::Settled);
    assert_eq!(snapshot.dealer.cards, Some(vec![c("6s"), c("5c"), c("8h")]));
    assert_eq!(snapshot.dealer.score, Some(19));
    assert_eq!(audit.net_change, -10);

    // Та же запись доступна и через запрос.
    let QueryResponse::LastAudit(Some(last)) =
        handle_query(&manager, Query::LastAudit { user_id: USER })
    else {
        panic!("ожидали аудиторскую запись");
    };
    assert_eq!(last, audit);
}

#[test]
fn queries_for_unknown_user_return_empty() {
    let manager = RoundManager::new();

    assert_eq!(
        handle_query(&manager, Query::RoundState { user_id: 42 }),
        QueryResponse::RoundState(None)
    );
    assert_eq!(
        handle_query(&manager, Query::LastAudit { user_id: 42 }),
        QueryResponse::LastAudit(None)
    );
}

#[test]
fn query_response_serializes_to_json() {
    let manager = RoundManager::new();
    let json = handle_query(&manager, Query::RoundState { user_id: USER })
        .to_json()
        .expect("serialization failed");
    assert_eq!(json, r#"{"RoundState":null}"#);
}

//
// Маппинг ошибок движка в ApiError
//
#[test]
fn action_without_round_maps_to_no_active_round() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(100));
    let mut manager = RoundManager::new();
    let ids = IdGenerator::new();

    let err = execute_action(
        &mut manager,
        &mut ledger,
        &mut NoShuffleRng,
        &ids,
        ActionRequest {
            user_id: USER,
            kind: ActionKind::Hit,
        },
    )
    .unwrap_err();

    assert_eq!(err, ApiError::NoActiveRound(USER));
}

#[test]
fn insufficient_bet_maps_to_rejected() {
    let mut ledger = InMemoryLedger::with_balance(USER, Tokens(5));
    let mut manager = RoundManager::new();
    let ids = IdGenerator::new();

    let err = execute_action(
        &mut manager,
        &mut ledger,
        &mut NoShuffleRng,
        &ids,
        ActionRequest {
            user_id: USER,
            kind: ActionKind::Deal { bet: Tokens(10) },
        },
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::Rejected(_)));
    assert_eq!(ledger.balance(USER).unwrap(), Tokens(5));
}
