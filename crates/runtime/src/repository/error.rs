//! Error types raised by repository implementations.

use rules_core::{ActorId, ErrorSeverity, ItemId, RulesError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("actor repository lock was poisoned")]
    LockPoisoned,

    #[error("actor {0} not found")]
    ActorNotFound(ActorId),

    #[error("item {item} not found on actor {actor}")]
    ItemNotFound { actor: ActorId, item: ItemId },

    #[error("field '{path}' cannot be written on this document")]
    UnknownField { path: String },

    #[error("field '{path}' cannot hold the submitted value")]
    InvalidValue { path: String },
}

impl RulesError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned => ErrorSeverity::Internal,
            Self::ActorNotFound(_)
            | Self::ItemNotFound { .. }
            | Self::UnknownField { .. }
            | Self::InvalidValue { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::ActorNotFound(_) => "REPOSITORY_ACTOR_NOT_FOUND",
            Self::ItemNotFound { .. } => "REPOSITORY_ITEM_NOT_FOUND",
            Self::UnknownField { .. } => "REPOSITORY_UNKNOWN_FIELD",
            Self::InvalidValue { .. } => "REPOSITORY_INVALID_VALUE",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
