use serde::{Deserialize, Serialize};

use crate::api::dto::{snapshot_round, RoundSnapshotDto};
use crate::domain::UserId;
use crate::engine::round_manager::RoundManager;
use crate::engine::settlement::RoundAudit;

/// Запросы к движку (read-only).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Снимок текущего (или последнего рассчитанного) раунда.
    RoundState { user_id: UserId },

    /// Аудиторская запись последнего рассчитанного раунда.
    LastAudit { user_id: UserId },
}

/// Ответы на запросы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    RoundState(Option<RoundSnapshotDto>),
    LastAudit(Option<RoundAudit>),
}

impl QueryResponse {
    /// JSON-форма ответа для транспортного слоя.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Обработать запрос. Запросы никогда не мутируют состояние.
pub fn handle_query(manager: &RoundManager, query: Query) -> QueryResponse {
    match query {
        Query::RoundState { user_id } => {
            QueryResponse::RoundState(manager.round(user_id).and_then(snapshot_round))
        }
        Query::LastAudit { user_id } => {
            QueryResponse::LastAudit(manager.round(user_id).and_then(|e| e.audit.clone()))
        }
    }
}
