//! Armour tonnage multipliers by hull configuration.

use std::collections::BTreeMap;

use rules_core::{ArmourOracle, HullConfiguration, VesselData};

/// Multiplier applied to armour tonnage for each hull shape.
///
/// Hulls missing from the table armour at the standard rate.
#[derive(Clone, Debug, PartialEq)]
pub struct HullArmourTable {
    multipliers: BTreeMap<HullConfiguration, f64>,
}

impl HullArmourTable {
    pub const STANDARD_MULTIPLIER: f64 = 1.0;

    pub fn new(multipliers: BTreeMap<HullConfiguration, f64>) -> Self {
        Self { multipliers }
    }

    /// The rulebook table.
    pub fn rulebook() -> Self {
        use HullConfiguration::*;

        Self::new(BTreeMap::from([
            (Standard, 1.0),
            (Streamlined, 1.2),
            (Sphere, 0.9),
            (CloseStructure, 1.5),
            (DispersedStructure, 2.0),
            (Planetoid, 1.0),
            (BufferedPlanetoid, 1.0),
        ]))
    }

    pub fn multiplier(&self, configuration: HullConfiguration) -> f64 {
        self.multipliers
            .get(&configuration)
            .copied()
            .unwrap_or(Self::STANDARD_MULTIPLIER)
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

impl Default for HullArmourTable {
    fn default() -> Self {
        Self::rulebook()
    }
}

impl ArmourOracle for HullArmourTable {
    fn armour_multiplier(&self, vessel: &VesselData) -> f64 {
        self.multiplier(vessel.spacecraft.configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rulebook_multipliers() {
        let table = HullArmourTable::rulebook();
        assert_eq!(table.multiplier(HullConfiguration::Streamlined), 1.2);
        assert_eq!(table.multiplier(HullConfiguration::DispersedStructure), 2.0);
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn unlisted_hull_uses_standard_rate() {
        let table = HullArmourTable::new(BTreeMap::from([(HullConfiguration::Sphere, 0.9)]));
        assert_eq!(table.multiplier(HullConfiguration::Planetoid), 1.0);

        let mut vessel = VesselData::default();
        vessel.spacecraft.configuration = HullConfiguration::Sphere;
        assert_eq!(table.armour_multiplier(&vessel), 0.9);
    }
}
