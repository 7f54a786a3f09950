/// Tunable rule parameters.
///
/// The characteristic modifier table and the hit point formulas are fixed by
/// the rulebook and not configurable; what lives here are the
/// skill keys the resolver looks up and the roll conventions the host uses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RulesConfig {
    /// Skill whose specialities raise carrying capacity.
    pub athletics_skill: String,
    /// Athletics speciality added to heavy load.
    pub strength_speciality: String,
    /// Athletics speciality added to heavy load.
    pub endurance_speciality: String,
    /// `max_load = heavy_load × load_multiplier`.
    pub load_multiplier: i32,
    /// DM applied to rolls with a skill the actor has not trained.
    pub untrained_dm: i32,
    /// Skill that softens the untrained penalty.
    pub jack_of_all_trades_skill: String,
    pub initiative: InitiativeConfig,
}

impl RulesConfig {
    pub const DEFAULT_LOAD_MULTIPLIER: i32 = 2;
    pub const DEFAULT_UNTRAINED_DM: i32 = -3;

    pub fn new() -> Self {
        Self {
            athletics_skill: "athletics".to_owned(),
            strength_speciality: "strength".to_owned(),
            endurance_speciality: "endurance".to_owned(),
            load_multiplier: Self::DEFAULT_LOAD_MULTIPLIER,
            untrained_dm: Self::DEFAULT_UNTRAINED_DM,
            jack_of_all_trades_skill: "jackofalltrades".to_owned(),
            initiative: InitiativeConfig::default(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Combat initiative roll as registered with the host's combat tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InitiativeConfig {
    pub formula: String,
    pub decimals: u8,
}

impl Default for InitiativeConfig {
    fn default() -> Self {
        Self {
            formula: "2d6".to_owned(),
            decimals: 2,
        }
    }
}
