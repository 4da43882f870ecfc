//! Внешний API движка: типизированные команды, запросы и DTO.
//!
//! Этот слой — контракт для окружающего сервиса: он не знает
//! ни про UI, ни про транспорт, только про чистые данные.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::execute_action;
pub use dto::{CommandResponse, DealerViewDto, HandViewDto, RoundSnapshotDto};
pub use errors::ApiError;
pub use queries::{handle_query, Query, QueryResponse};
