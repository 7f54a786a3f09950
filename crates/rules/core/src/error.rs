//! Error classification shared by every crate in the workspace.
//!
//! The rule engines themselves never fail: missing data is skipped and bad
//! numbers are clamped or coerced. Errors only exist at the seams where a
//! caller asks for a collaborator that was never provided, or where a host
//! adapter cannot find the document it was asked about. Each seam has its own
//! enum; all of them report an [`ErrorSeverity`] and a stable code.

/// How the caller should treat a failed sheet operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Skip the operation; the next preparation cycle can succeed.
    ///
    /// Example: armour lookup not wired for a sheet build.
    Recoverable,

    /// The request named a document or field that does not exist.
    ///
    /// Example: a write addressed to an item the actor no longer owns.
    Validation,

    /// Broken internal state, e.g. a poisoned repository lock.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Implemented by every error enum around the rules engine.
///
/// Codes are SCREAMING_SNAKE_CASE and unique per variant, so logs and tests
/// can match on them without parsing messages.
pub trait RulesError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Falls back to the type name when a variant has no dedicated code.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
