//! Preparation hook system for actor documents.
//!
//! Preparing an actor runs every registered hook in two phases, mirroring the
//! host's own data preparation:
//!
//! - **Base** hooks adjust source-level state, such as which item effects
//!   apply
//! - **Derived** hooks compute values from that state, such as characteristic
//!   DMs and hit points
//!
//! Within a phase hooks run by ascending priority.

mod context;
mod derived;
mod registry;
mod suppression;

pub use context::HookContext;
pub use derived::DerivedDataHook;
pub use registry::HookRegistry;
pub use suppression::EffectSuppressionHook;

use rules_core::Actor;

use crate::api::Result;

/// Stage of actor preparation a hook belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreparationPhase {
    Base,
    Derived,
}

/// Defines the criticality level of a hook for error handling.
///
/// - Critical hooks must succeed or preparation fails
/// - Important hooks log errors but allow continuation
/// - Optional hooks can fail silently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCriticality {
    /// Hook failure fails the whole preparation.
    Critical,

    /// Hook failure is logged as an error and preparation continues.
    Important,

    /// Hook failure is logged at debug level and ignored.
    Optional,
}

/// A step of actor preparation.
pub trait PreparationHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging and debugging).
    fn name(&self) -> &'static str;

    fn phase(&self) -> PreparationPhase;

    /// Ordering within the phase. Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    /// Whether this hook applies to the actor at all.
    fn should_trigger(&self, _actor: &Actor, _ctx: &HookContext<'_>) -> bool {
        true
    }

    fn prepare(&self, actor: &mut Actor, ctx: &HookContext<'_>) -> Result<()>;
}
