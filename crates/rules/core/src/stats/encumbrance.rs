//! Carrying capacity.

use std::collections::BTreeMap;

use crate::config::RulesConfig;
use crate::env::SkillContext;
use crate::stats::{Characteristic, CharacteristicCode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Encumbrance {
    pub heavy_load: i32,
    pub max_load: i32,
}

impl Encumbrance {
    /// Heavy load is current STR + END, plus the athletics strength and
    /// endurance specialities when athletics is trained. Missing
    /// characteristics and specialities count as zero.
    pub fn compute(
        characteristics: &BTreeMap<CharacteristicCode, Characteristic>,
        skills: &dyn SkillContext,
        config: &RulesConfig,
    ) -> Self {
        let mut heavy_load: i32 = [CharacteristicCode::Str, CharacteristicCode::End]
            .iter()
            .filter_map(|code| characteristics.get(code))
            .map(|ch| ch.current.unwrap_or_else(|| ch.augmented()))
            .fold(0, i32::saturating_add);

        if skills.is_trained(&config.athletics_skill) {
            for speciality in [&config.strength_speciality, &config.endurance_speciality] {
                heavy_load = heavy_load.saturating_add(
                    skills
                        .speciality_value(&config.athletics_skill, speciality)
                        .unwrap_or(0),
                );
            }
        }

        Self {
            heavy_load,
            max_load: heavy_load.saturating_mul(config.load_multiplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Skill, SkillSet, Speciality};

    fn resolved(value: i32) -> Characteristic {
        let mut ch = Characteristic::new(value);
        ch.resolve(None);
        ch
    }

    fn athletics(trained: bool) -> SkillSet {
        let mut skill = Skill::new("Athletics")
            .with_speciality("strength", Speciality::new("Strength", 2))
            .with_speciality("endurance", Speciality::new("Endurance", 1));
        skill.trained = trained;
        SkillSet::from([("athletics".to_owned(), skill)])
    }

    #[test]
    fn trained_athletics_adds_specialities() {
        let characteristics = BTreeMap::from([
            (CharacteristicCode::Str, resolved(7)),
            (CharacteristicCode::End, resolved(8)),
        ]);
        let load = Encumbrance::compute(&characteristics, &athletics(true), &RulesConfig::new());

        assert_eq!(load.heavy_load, 18);
        assert_eq!(load.max_load, 36);
    }

    #[test]
    fn untrained_athletics_is_ignored() {
        let characteristics = BTreeMap::from([
            (CharacteristicCode::Str, resolved(7)),
            (CharacteristicCode::End, resolved(8)),
        ]);
        let load = Encumbrance::compute(&characteristics, &athletics(false), &RulesConfig::new());

        assert_eq!(load.heavy_load, 15);
        assert_eq!(load.max_load, 30);
    }

    #[test]
    fn missing_characteristics_count_as_zero() {
        let characteristics = BTreeMap::from([(CharacteristicCode::End, resolved(6))]);
        let load = Encumbrance::compute(&characteristics, &SkillSet::new(), &RulesConfig::new());

        assert_eq!(load.heavy_load, 6);
        assert_eq!(load.max_load, 12);
    }

    #[test]
    fn extreme_loads_saturate() {
        let characteristics = BTreeMap::from([
            (CharacteristicCode::Str, resolved(i32::MAX)),
            (CharacteristicCode::End, resolved(i32::MAX)),
        ]);
        let load = Encumbrance::compute(&characteristics, &athletics(true), &RulesConfig::new());

        assert_eq!(load.heavy_load, i32::MAX);
        assert_eq!(load.max_load, i32::MAX);
    }
}
