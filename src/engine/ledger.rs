use thiserror::Error;

use crate::domain::tokens::Tokens;
use crate::domain::UserId;

/// Ошибки леджера (внешнего хранилища балансов).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Дебет увёл бы баланс в минус. Применение НЕ произошло.
    #[error("Недостаточно средств: баланс {balance}, требуется {required}")]
    InsufficientFunds { balance: Tokens, required: Tokens },

    /// Хранилище недоступно или отказало по иной причине.
    #[error("Леджер недоступен: {0}")]
    Unavailable(String),
}

/// Адаптер леджера — единственный компонент, которому разрешено
/// менять персистентный баланс токенов пользователя.
///
/// Движок получает его явным коллаборатором (DI), поэтому в тестах
/// используется `infra::InMemoryLedger`, а в проде — обёртка над БД.
///
/// Контракт `adjust`:
/// - дельта применяется атомарно: либо баланс изменился целиком, либо нет;
/// - отрицательная дельта, уводящая баланс ниже нуля, отклоняется
///   с `InsufficientFunds` без каких-либо изменений.
pub trait Ledger {
    /// Текущий баланс пользователя.
    fn balance(&self, user_id: UserId) -> Result<Tokens, LedgerError>;

    /// Атомарно применить дельту (минус = дебет, плюс = кредит)
    /// и вернуть новый баланс.
    fn adjust(&mut self, user_id: UserId, delta: i64) -> Result<Tokens, LedgerError>;
}
