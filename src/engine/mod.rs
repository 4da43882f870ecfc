//! Движок раунда блэкджека: state machine действий, автоигра дилера,
//! расчёт и выплата.
//!
//! Высокоуровневые объекты: `RoundEngine` (один раунд) и `RoundManager`
//! (раунды по пользователям).
//! Основные операции:
//!   - `start_round` – начать раунд (списывает ставку);
//!   - `apply_action` – применить hit/stand/double/split;
//!   - `resolve_round` – доиграть дилера, рассчитать и выплатить.

pub mod actions;
pub mod dealer;
pub mod errors;
pub mod ledger;
pub mod round_flow;
pub mod round_history;
pub mod round_manager;
pub mod settlement;
pub mod validation;

pub use actions::{ActionKind, ActionRequest};
pub use errors::EngineError;
pub use ledger::{Ledger, LedgerError};
pub use round_flow::{
    apply_action, resolve_round, start_round, start_round_with_deck, RoundEngine, RoundStatus,
};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use round_manager::RoundManager;
pub use settlement::{HandOutcome, HandSettlement, RoundAudit, RoundSettlement};

/// RNG интерфейс для движка.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
