//! Roll formulas and the data that feeds them.
//!
//! Formulas are plain strings in the host's dice syntax; evaluating them is
//! the host's business.

use std::collections::BTreeMap;

use crate::config::RulesConfig;
use crate::env::SkillContext;
use crate::state::{Actor, Skill, Speciality};
use crate::stats::{Characteristic, CharacteristicCode, characteristic_modifier};

const UNDEFINED_FORMULA: &str = "2d6[Undefined]";
const UNDEFINED_LABEL: &str = "Roll";

/// Characteristic DMs exposed to roll formulas as `@STR`, `@DEX` and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollData {
    pub dms: BTreeMap<CharacteristicCode, i32>,
}

impl RollData {
    /// Roll data for travellers and NPCs. A characteristic that has not been
    /// resolved rolls at the floor modifier.
    pub fn from_actor(actor: &Actor) -> Option<Self> {
        let data = actor.data.character()?;
        let dms = data
            .characteristics
            .iter()
            .map(|(code, ch)| (*code, ch.dm.unwrap_or(characteristic_modifier(0))))
            .collect();
        Some(Self { dms })
    }

    pub fn dm(&self, code: CharacteristicCode) -> Option<i32> {
        self.dms.get(&code).copied()
    }
}

/// DM for an untrained skill: the untrained penalty, softened by a trained
/// Jack-of-all-Trades but never above zero.
pub fn default_skill_dm(skills: &dyn SkillContext, config: &RulesConfig) -> i32 {
    match skills.skill(&config.jack_of_all_trades_skill) {
        Some(jack) if jack.trained => config.untrained_dm.saturating_add(jack.value).min(0),
        _ => config.untrained_dm,
    }
}

/// Button label for a skill roll, e.g. `DEX + Gun Combat (Slug)`.
pub fn skill_label(
    characteristics: &BTreeMap<CharacteristicCode, Characteristic>,
    skill: Option<&Skill>,
    speciality: Option<&Speciality>,
) -> String {
    let Some(skill) = skill else {
        return UNDEFINED_LABEL.to_owned();
    };
    let prefix = roll_characteristic(characteristics, skill)
        .map(|code| format!("{code} + "))
        .unwrap_or_default();

    match (skill.trained, speciality) {
        (true, Some(speciality)) => format!("{prefix}{} ({})", skill.label, speciality.label),
        (true, None) => format!("{prefix}{}", skill.label),
        (false, _) => format!("{prefix}{} (untrained)", skill.label),
    }
}

/// Dice formula for a skill roll, e.g. `2d6 + @DEX[DEX] + 1[Slug]`.
pub fn skill_formula(
    characteristics: &BTreeMap<CharacteristicCode, Characteristic>,
    skills: &dyn SkillContext,
    skill: Option<&Skill>,
    speciality: Option<&Speciality>,
    config: &RulesConfig,
) -> String {
    let Some(skill) = skill else {
        return UNDEFINED_FORMULA.to_owned();
    };
    let characteristic = roll_characteristic(characteristics, skill)
        .map(|code| format!(" + @{code}[{code}]"))
        .unwrap_or_default();

    if skill.trained {
        let (value, label) = match speciality {
            Some(speciality) => (speciality.value, speciality.label.as_str()),
            None => (skill.value, skill.label.as_str()),
        };
        format!("2d6{characteristic} + {value}[{label}]")
    } else {
        let jack = skills
            .skill(&config.jack_of_all_trades_skill)
            .filter(|jack| jack.trained)
            .map_or(0, |jack| jack.value);
        let untrained = config.untrained_dm.saturating_add(jack);
        format!("2d6{characteristic} + {untrained}[untrained]")
    }
}

// A sheet-wide preferred characteristic wins over the skill's own default.
fn roll_characteristic(
    characteristics: &BTreeMap<CharacteristicCode, Characteristic>,
    skill: &Skill,
) -> Option<CharacteristicCode> {
    characteristics
        .iter()
        .find(|(_, ch)| ch.default)
        .map(|(code, _)| *code)
        .or(skill.default)
}
