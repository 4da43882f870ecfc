use thiserror::Error;

use crate::domain::UserId;
use crate::engine::ledger::LedgerError;

/// Ошибки движка раунда.
///
/// Все варианты, кроме `LedgerFailure` / `DeckExhausted` / `Internal`,
/// являются локальной валидацией: раунд и леджер при них не меняются.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимое действие в текущей фазе раунда")]
    InvalidAction,

    #[error("Ставка должна быть больше нуля")]
    InvalidBet,

    #[error("Раунд уже идёт, сначала доиграйте его")]
    RoundInProgress,

    #[error("Недостаточно токенов для этой ставки")]
    InsufficientFunds,

    #[error("У пользователя {0} нет активного раунда")]
    NoActiveRound(UserId),

    #[error("Ошибка леджера: {0}")]
    LedgerFailure(String),

    #[error("В колоде закончились карты")]
    DeckExhausted,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl From<LedgerError> for EngineError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds { .. } => EngineError::InsufficientFunds,
            LedgerError::Unavailable(msg) => EngineError::LedgerFailure(msg),
        }
    }
}
