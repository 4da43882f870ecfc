use crate::domain::hand::HandStatus;
use crate::domain::round::{Round, RoundPhase};
use crate::engine::actions::ActionKind;
use crate::engine::errors::EngineError;
use crate::eval;

/// Проверка, допустимо ли действие при текущем состоянии раунда.
///
/// Чистая валидация до любых мутаций (validate-then-mutate):
/// достаточность средств здесь НЕ проверяется — её атомарно
/// устанавливает сам дебет через леджер.
pub fn validate_action(round: &Round, kind: ActionKind) -> Result<(), EngineError> {
    if round.phase != RoundPhase::PlayerTurn {
        return Err(EngineError::InvalidAction);
    }

    let hand = round
        .player_hands
        .get(round.current_hand)
        .ok_or(EngineError::Internal("current_hand вне диапазона"))?;

    if hand.status != HandStatus::Active {
        return Err(EngineError::Internal("текущая рука не активна"));
    }

    match kind {
        // Deal обрабатывается менеджером раундов до создания Round.
        ActionKind::Deal { .. } => Err(EngineError::RoundInProgress),

        ActionKind::Hit | ActionKind::Stand => Ok(()),

        // Дабл и сплит доступны только первым решением по руке:
        // после любого hit карт уже больше двух.
        ActionKind::Double => {
            if eval::can_double(&hand.cards) {
                Ok(())
            } else {
                Err(EngineError::InvalidAction)
            }
        }

        ActionKind::Split => {
            if eval::can_split(&hand.cards) {
                Ok(())
            } else {
                Err(EngineError::InvalidAction)
            }
        }
    }
}

/// Список действий, легальных прямо сейчас (для UI-подсказок).
/// Достаточность средств на дабл/сплит внешний слой проверяет
/// отдельно по балансу из леджера.
pub fn legal_actions(round: &Round) -> Vec<ActionKind> {
    let mut actions = Vec::new();
    if round.phase != RoundPhase::PlayerTurn {
        return actions;
    }
    let Some(hand) = round.player_hands.get(round.current_hand) else {
        return actions;
    };
    if hand.status != HandStatus::Active {
        return actions;
    }

    actions.push(ActionKind::Hit);
    actions.push(ActionKind::Stand);
    if eval::can_double(&hand.cards) {
        actions.push(ActionKind::Double);
    }
    if eval::can_split(&hand.cards) {
        actions.push(ActionKind::Split);
    }
    actions
}
