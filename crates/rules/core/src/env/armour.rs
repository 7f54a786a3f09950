use crate::state::VesselData;

/// Looks up the armour tonnage multiplier for a vessel's hull.
///
/// Only armour sizing consults this; other hardware never triggers a lookup.
pub trait ArmourOracle: Send + Sync {
    fn armour_multiplier(&self, vessel: &VesselData) -> f64;
}

/// The same multiplier for every hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedArmour(pub f64);

impl Default for FixedArmour {
    fn default() -> Self {
        Self(1.0)
    }
}

impl ArmourOracle for FixedArmour {
    fn armour_multiplier(&self, _vessel: &VesselData) -> f64 {
        self.0
    }
}
