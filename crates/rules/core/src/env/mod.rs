//! Host collaborators the rules consult but never own.
//!
//! The armour lookup and the skill context are supplied by the host adapter.
//! The [`Env`] aggregate bundles them so rule code can ask for what it needs
//! without reaching into ambient host state.
mod armour;
mod error;
mod skills;

pub use armour::{ArmourOracle, FixedArmour};
pub use error::OracleError;
pub use skills::SkillContext;

/// Aggregates the read-only collaborators needed during sheet preparation.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, A, S>
where
    A: ArmourOracle + ?Sized,
    S: SkillContext + ?Sized,
{
    armour: Option<&'a A>,
    skills: Option<&'a S>,
}

pub type RulesEnv<'a> = Env<'a, dyn ArmourOracle + 'a, dyn SkillContext + 'a>;

impl<'a, A, S> Env<'a, A, S>
where
    A: ArmourOracle + ?Sized,
    S: SkillContext + ?Sized,
{
    pub fn new(armour: Option<&'a A>, skills: Option<&'a S>) -> Self {
        Self { armour, skills }
    }

    pub fn with_all(armour: &'a A, skills: &'a S) -> Self {
        Self::new(Some(armour), Some(skills))
    }

    pub fn empty() -> Self {
        Self {
            armour: None,
            skills: None,
        }
    }

    /// Returns the armour lookup, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ArmourNotAvailable` if no armour oracle was provided.
    pub fn armour(&self) -> Result<&'a A, OracleError> {
        self.armour.ok_or(OracleError::ArmourNotAvailable)
    }

    /// Returns the skill context, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill context was provided.
    pub fn skills(&self) -> Result<&'a S, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }
}
