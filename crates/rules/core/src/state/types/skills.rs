use std::collections::BTreeMap;

use crate::stats::CharacteristicCode;

/// Skills keyed by their lowercase id (`"athletics"`, `"jackofalltrades"`).
pub type SkillSet = BTreeMap<String, Skill>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Skill {
    pub label: String,
    pub trained: bool,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::int"))]
    pub value: i32,
    /// Characteristic rolled with this skill when the sheet has no preference.
    pub default: Option<CharacteristicCode>,
    pub specialities: BTreeMap<String, Speciality>,
}

impl Skill {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn trained(mut self, value: i32) -> Self {
        self.trained = true;
        self.value = value;
        self
    }

    pub fn with_default(mut self, code: CharacteristicCode) -> Self {
        self.default = Some(code);
        self
    }

    pub fn with_speciality(mut self, key: impl Into<String>, speciality: Speciality) -> Self {
        self.specialities.insert(key.into(), speciality);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Speciality {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::int"))]
    pub value: i32,
}

impl Speciality {
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
