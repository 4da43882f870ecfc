use crate::api::dto::{map_round_status_to_response, snapshot_round, CommandResponse};
use crate::api::errors::ApiError;
use crate::engine::actions::{ActionKind, ActionRequest};
use crate::engine::ledger::Ledger;
use crate::engine::round_manager::RoundManager;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;

/// Выполнить типизированный запрос действия.
///
/// Это единственная точка входа для внешнего слоя: он конструирует
/// `ActionRequest {user_id, kind}` из своего UI/протокола и получает
/// обратно снимок раунда (или терминальный снимок с аудитом).
pub fn execute_action<L: Ledger, R: RandomSource>(
    manager: &mut RoundManager,
    ledger: &mut L,
    rng: &mut R,
    ids: &IdGenerator,
    request: ActionRequest,
) -> Result<CommandResponse, ApiError> {
    let user_id = request.user_id;

    let status = match request.kind {
        ActionKind::Deal { bet } => {
            let round_id = ids.next_round_id();
            manager.deal(ledger, rng, round_id, user_id, bet)?
        }
        kind => manager.apply(ledger, user_id, kind)?,
    };

    let engine = manager
        .round(user_id)
        .ok_or_else(|| ApiError::Internal("раунд пропал после действия".into()))?;
    let snapshot = snapshot_round(engine)
        .ok_or_else(|| ApiError::Internal("пустой раунд без карт".into()))?;

    Ok(map_round_status_to_response(status, snapshot))
}
