use rules_core::{Actor, Resolver};

use super::{HookContext, HookCriticality, PreparationHook, PreparationPhase};
use crate::api::Result;

/// Resolves characteristics, hit points, encumbrance and initiative.
pub struct DerivedDataHook;

impl PreparationHook for DerivedDataHook {
    fn name(&self) -> &'static str {
        "derived_data"
    }

    fn phase(&self) -> PreparationPhase {
        PreparationPhase::Derived
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Critical
    }

    fn prepare(&self, actor: &mut Actor, ctx: &HookContext<'_>) -> Result<()> {
        Resolver::new(ctx.config).resolve(actor);
        Ok(())
    }
}
