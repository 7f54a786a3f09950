//! Collaborator access errors.

use crate::error::{ErrorSeverity, RulesError};

/// Errors that occur when a rule asks for a collaborator the host never wired.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ArmourOracle is not available in the environment.
    #[error("ArmourOracle not available")]
    ArmourNotAvailable,

    /// SkillContext is not available in the environment.
    #[error("SkillContext not available")]
    SkillsNotAvailable,
}

impl RulesError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ArmourNotAvailable => "ORACLE_ARMOUR_NOT_AVAILABLE",
            Self::SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
        }
    }
}
