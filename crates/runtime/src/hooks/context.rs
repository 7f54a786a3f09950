//! Execution context provided to hooks during preparation.

use rules_core::RulesConfig;

use crate::oracle::OracleManager;

/// Read-only collaborators available to every hook.
pub struct HookContext<'a> {
    /// Rule parameters for this session
    pub config: &'a RulesConfig,

    /// Oracle manager for accessing rule content
    pub oracles: &'a OracleManager,
}
