//! Hook registry for running actor preparation.

use std::sync::Arc;

use rules_core::{Actor, RulesError};
use tracing::{debug, error};

use super::{HookContext, HookCriticality, PreparationHook, PreparationPhase};
use crate::api::{Result, RuntimeError};

/// Registry that runs preparation hooks in phase and priority order.
#[derive(Clone)]
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn PreparationHook>]>,
}

impl HookRegistry {
    /// Creates a registry, ordering hooks by phase and then priority.
    ///
    /// Hooks with equal phase and priority keep their registration order.
    pub fn new(mut hooks: Vec<Arc<dyn PreparationHook>>) -> Self {
        hooks.sort_by_key(|h| (h.phase(), h.priority()));
        Self {
            hooks: hooks.into(),
        }
    }

    /// Creates a registry with the default set of hooks.
    ///
    /// Default hooks include:
    /// - EffectSuppressionHook: item effects follow equipped state (base)
    /// - DerivedDataHook: characteristic and vitals resolution (derived)
    pub fn default_hooks() -> Self {
        use super::{DerivedDataHook, EffectSuppressionHook};

        Self::new(vec![
            Arc::new(EffectSuppressionHook) as Arc<dyn PreparationHook>,
            Arc::new(DerivedDataHook) as Arc<dyn PreparationHook>,
        ])
    }

    /// Returns a registry with one more hook.
    pub fn with_hook(&self, hook: Arc<dyn PreparationHook>) -> Self {
        let mut hooks = self.hooks.to_vec();
        hooks.push(hook);
        Self::new(hooks)
    }

    /// Runs every triggered hook against the actor.
    ///
    /// # Error Handling
    ///
    /// - `Critical`: Returns the error immediately
    /// - `Important`: Logs the error and continues with the next hook
    /// - `Optional`: Logs at debug level and continues
    pub fn prepare(&self, actor: &mut Actor, ctx: &HookContext<'_>) -> Result<()> {
        for hook in self.hooks.iter() {
            if !hook.should_trigger(actor, ctx) {
                continue;
            }
            if let Err(e) = hook.prepare(actor, ctx) {
                self.handle_hook_error(hook.as_ref(), e)?;
            }
        }
        Ok(())
    }

    /// Returns the number of hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names, phases and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, PreparationPhase, i32)> + '_ {
        self.hooks
            .iter()
            .map(|h| (h.name(), h.phase(), h.priority()))
    }

    fn handle_hook_error(&self, hook: &dyn PreparationHook, error: RuntimeError) -> Result<()> {
        match hook.criticality() {
            HookCriticality::Critical => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "critical",
                    severity = error.severity().as_str(),
                    code = error.error_code(),
                    error = %error,
                    "Critical hook failed, aborting preparation"
                );
                Err(error)
            }
            HookCriticality::Important => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "important",
                    code = error.error_code(),
                    error = %error,
                    "Hook failed, continuing"
                );
                Ok(())
            }
            HookCriticality::Optional => {
                debug!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "optional",
                    error = %error,
                    "Optional hook failed"
                );
                Ok(())
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}
