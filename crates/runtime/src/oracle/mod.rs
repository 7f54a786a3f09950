//! Runtime bundle of the static rule content.
//!
//! [`OracleManager`] owns the armour table and the global skill catalogue and
//! lends them out as a [`RulesEnv`] on demand. The data is immutable at
//! runtime; actor documents live in repositories.

use std::sync::Arc;

use rules_content::HullArmourTable;
use rules_core::{ArmourOracle, RulesEnv, SkillContext, SkillSet};

/// Manages the rule collaborators and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) armour: Arc<dyn ArmourOracle>,
    pub(crate) skills: Arc<SkillSet>,
}

impl OracleManager {
    pub fn new(armour: Arc<dyn ArmourOracle>, skills: Arc<SkillSet>) -> Self {
        Self { armour, skills }
    }

    /// The rulebook armour table and an empty skill catalogue.
    pub fn rulebook() -> Self {
        Self::new(Arc::new(HullArmourTable::rulebook()), Arc::new(SkillSet::new()))
    }

    /// Borrows the collaborators as an environment for rule evaluation.
    pub fn as_rules_env(&self) -> RulesEnv<'_> {
        let skills: &dyn SkillContext = self.skills.as_ref();
        RulesEnv::with_all(self.armour.as_ref(), skills)
    }

    /// The global skill catalogue.
    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }
}

impl Default for OracleManager {
    fn default() -> Self {
        Self::rulebook()
    }
}
