//! Движок раунда блэкджека для онлайн-казино.
//!
//! Ядро — state machine одного раунда на пользователя: раздача,
//! легальные действия (hit/stand/double/split), автоигра дилера,
//! расчёт и выплата через внешний адаптер леджера.
//!
//! Библиотека вызывается окружающим сервисом: сессии, UI, слоты и
//! покупки — внешние коллабораторы. Движок видит только
//! `engine::Ledger` (баланс токенов) и отдаёт наружу чистые данные:
//! `api::RoundSnapshotDto` после каждого действия и
//! `engine::RoundAudit` — ровно одну запись на рассчитанный раунд.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use api::{execute_action, handle_query, CommandResponse, Query, QueryResponse};
pub use domain::{Card, Deck, Hand, HandStatus, Rank, Round, RoundPhase, Suit, Tokens};
pub use domain::{RoundId, UserId};
pub use engine::{
    ActionKind, ActionRequest, EngineError, Ledger, LedgerError, RoundAudit, RoundManager,
    RoundStatus,
};
