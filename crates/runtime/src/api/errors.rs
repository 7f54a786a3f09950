//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from oracle access, repositories and the writer worker so
//! hosts can bubble them up with consistent context.

use rules_core::{ActorId, ErrorSeverity, ItemId, OracleError, RulesError};
use thiserror::Error;

use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("item {item} not found on actor {actor}")]
    ItemNotFound { actor: ActorId, item: ItemId },

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("runtime requires an actor repository to be configured before building")]
    MissingRepository,

    #[error("document writer channel closed")]
    WriterClosed,

    #[error("document writer join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("hook '{hook}' failed: {message}")]
    Hook { hook: &'static str, message: String },
}

impl RulesError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound { .. } => ErrorSeverity::Validation,
            Self::Oracle(error) => error.severity(),
            Self::Repository(error) => error.severity(),
            Self::MissingOracles | Self::MissingRepository => ErrorSeverity::Validation,
            Self::WriterClosed | Self::Hook { .. } => ErrorSeverity::Recoverable,
            Self::WorkerJoin(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotFound { .. } => "RUNTIME_ITEM_NOT_FOUND",
            Self::Oracle(error) => error.error_code(),
            Self::Repository(error) => error.error_code(),
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::MissingRepository => "RUNTIME_MISSING_REPOSITORY",
            Self::WriterClosed => "RUNTIME_WRITER_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            Self::Hook { .. } => "RUNTIME_HOOK_FAILED",
        }
    }
}
