use rules_core::{Actor, refresh_suppression};
use tracing::trace;

use super::{HookContext, PreparationHook, PreparationPhase};
use crate::api::Result;

/// Suppresses effects granted by items that are not equipped.
pub struct EffectSuppressionHook;

impl PreparationHook for EffectSuppressionHook {
    fn name(&self) -> &'static str {
        "effect_suppression"
    }

    fn phase(&self) -> PreparationPhase {
        PreparationPhase::Base
    }

    fn should_trigger(&self, actor: &Actor, _ctx: &HookContext<'_>) -> bool {
        !actor.effects.is_empty()
    }

    fn prepare(&self, actor: &mut Actor, _ctx: &HookContext<'_>) -> Result<()> {
        let changed = refresh_suppression(actor);
        trace!(
            target: "runtime::hooks",
            actor = %actor.id,
            changed,
            "refreshed effect suppression"
        );
        Ok(())
    }
}
