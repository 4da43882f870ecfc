use serde::{Deserialize, Serialize};

use crate::domain::tokens::Tokens;
use crate::domain::UserId;

/// Тип действия игрока в раунде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    /// Начать новый раунд с этой ставкой.
    Deal { bet: Tokens },
    /// Взять карту в текущую руку.
    Hit,
    /// Остановиться на текущей руке.
    Stand,
    /// Удвоить ставку, взять ровно одну карту и закрыть руку.
    Double,
    /// Разделить пару на две руки.
    Split,
}

/// Типизированный запрос действия от внешнего слоя.
///
/// Вызывающий слой сам конструирует его из своего UI/протокола —
/// движок никогда не разбирает свободные строковые идентификаторы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRequest {
    /// Кто действует.
    pub user_id: UserId,
    /// Само действие.
    pub kind: ActionKind,
}
