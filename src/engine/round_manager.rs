use std::collections::HashMap;

use crate::domain::round::RoundPhase;
use crate::domain::tokens::Tokens;
use crate::domain::{RoundId, UserId};
use crate::engine::actions::ActionKind;
use crate::engine::errors::EngineError;
use crate::engine::ledger::Ledger;
use crate::engine::round_flow::{
    apply_action, resolve_round, start_round, start_round_with_deck, RoundEngine, RoundStatus,
};
use crate::engine::RandomSource;

/// Менеджер раундов:
/// - хранит по одному раунду на пользователя;
/// - следит за предусловием `Deal` (нет незавершённого раунда);
/// - маршрутизирует действия в движок раунда.
///
/// Сериализацию действий ОДНОГО пользователя обеспечивает внешний
/// слой сессий; раунды разных пользователей полностью независимы.
pub struct RoundManager {
    rounds: HashMap<UserId, RoundEngine>,
}

impl RoundManager {
    pub fn new() -> Self {
        Self {
            rounds: HashMap::new(),
        }
    }

    /// Раунд пользователя (включая уже рассчитанный — для истории).
    pub fn round(&self, user_id: UserId) -> Option<&RoundEngine> {
        self.rounds.get(&user_id)
    }

    /// Есть ли у пользователя незавершённый раунд.
    pub fn has_active_round(&self, user_id: UserId) -> bool {
        self.rounds
            .get(&user_id)
            .map(|e| !e.round.is_settled())
            .unwrap_or(false)
    }

    /// Начать новый раунд. Предусловие: предыдущий раунд пользователя
    /// (если был) рассчитан. Рассчитанный раунд при этом вытесняется.
    ///
    /// При натуральном блэкджеке раунд рассчитывается здесь же,
    /// и вызывающий сразу получает терминальный статус.
    pub fn deal<L: Ledger, R: RandomSource>(
        &mut self,
        ledger: &mut L,
        rng: &mut R,
        round_id: RoundId,
        user_id: UserId,
        bet: Tokens,
    ) -> Result<RoundStatus, EngineError> {
        if self.has_active_round(user_id) {
            return Err(EngineError::RoundInProgress);
        }

        let engine = start_round(ledger, rng, round_id, user_id, bet)?;
        self.install_round(ledger, user_id, engine)
    }

    /// `deal` с готовой колодой — для реплея и детерминированных тестов.
    pub fn deal_with_deck<L: Ledger>(
        &mut self,
        ledger: &mut L,
        deck: crate::domain::deck::Deck,
        round_id: RoundId,
        user_id: UserId,
        bet: Tokens,
    ) -> Result<RoundStatus, EngineError> {
        if self.has_active_round(user_id) {
            return Err(EngineError::RoundInProgress);
        }

        let engine = start_round_with_deck(ledger, deck, round_id, user_id, bet)?;
        self.install_round(ledger, user_id, engine)
    }

    fn install_round<L: Ledger>(
        &mut self,
        ledger: &mut L,
        user_id: UserId,
        engine: RoundEngine,
    ) -> Result<RoundStatus, EngineError> {
        // Рассчитанный раунд, если он был, вытесняется новым.
        self.rounds.insert(user_id, engine);
        let entry = self
            .rounds
            .get_mut(&user_id)
            .ok_or(EngineError::Internal("раунд потерян после вставки"))?;

        match entry.round.phase {
            RoundPhase::DealerTurn => resolve_round(entry, ledger),
            _ => Ok(RoundStatus::Ongoing),
        }
    }

    /// Действие игрока в его активном раунде.
    pub fn apply<L: Ledger>(
        &mut self,
        ledger: &mut L,
        user_id: UserId,
        kind: ActionKind,
    ) -> Result<RoundStatus, EngineError> {
        let engine = self
            .rounds
            .get_mut(&user_id)
            .filter(|e| !e.round.is_settled())
            .ok_or(EngineError::NoActiveRound(user_id))?;

        apply_action(engine, ledger, kind)
    }

    /// Повторить расчёт раунда, застрявшего в DealerTurn из-за
    /// отказа леджера на выплате.
    pub fn resolve<L: Ledger>(
        &mut self,
        ledger: &mut L,
        user_id: UserId,
    ) -> Result<RoundStatus, EngineError> {
        let engine = self
            .rounds
            .get_mut(&user_id)
            .filter(|e| !e.round.is_settled())
            .ok_or(EngineError::NoActiveRound(user_id))?;

        resolve_round(engine, ledger)
    }
}

impl Default for RoundManager {
    fn default() -> Self {
        Self::new()
    }
}
