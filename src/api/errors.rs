use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    /// Неправильные входные данные команды.
    BadRequest(String),

    /// У пользователя нет активного раунда.
    NoActiveRound(UserId),

    /// Действие отклонено движком (фаза/рука/ставка).
    Rejected(String),

    /// Леджер отказал — действие не применилось, можно повторить.
    LedgerUnavailable(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoActiveRound(user_id) => ApiError::NoActiveRound(user_id),
            EngineError::LedgerFailure(msg) => ApiError::LedgerUnavailable(msg),
            EngineError::DeckExhausted | EngineError::Internal(_) => {
                ApiError::Internal(err.to_string())
            }
            other => ApiError::Rejected(other.to_string()),
        }
    }
}
