use std::collections::BTreeMap;

use crate::number::Numeric;
use crate::state::types::{ActiveEffect, ActorId, Item, ItemId, SkillSet};
use crate::stats::{Characteristic, CharacteristicCode, DamageRecord, HitPoints};

/// An actor document: a character, creature or vessel and everything it owns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub data: ActorData,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<ActiveEffect>,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>, data: ActorData) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
            items: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn kind(&self) -> &'static str {
        self.data.kind()
    }
}

/// Kind-specific actor data.
///
/// Travellers and NPCs share a sheet layout but resolve hit points
/// differently.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "system", rename_all = "snake_case")
)]
pub enum ActorData {
    Traveller(CharacterData),
    Npc(CharacterData),
    Creature(CreatureData),
    Spacecraft(VesselData),
}

impl ActorData {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Traveller(_) => "traveller",
            Self::Npc(_) => "npc",
            Self::Creature(_) => "creature",
            Self::Spacecraft(_) => "spacecraft",
        }
    }

    /// Character data for travellers and NPCs.
    pub fn character(&self) -> Option<&CharacterData> {
        match self {
            Self::Traveller(data) | Self::Npc(data) => Some(data),
            Self::Creature(_) | Self::Spacecraft(_) => None,
        }
    }

    pub fn skills(&self) -> Option<&SkillSet> {
        self.character().map(|data| &data.skills)
    }

    pub fn vessel(&self) -> Option<&VesselData> {
        match self {
            Self::Spacecraft(data) => Some(data),
            _ => None,
        }
    }
}

/// Traveller and NPC sheet data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CharacterData {
    pub characteristics: BTreeMap<CharacteristicCode, Characteristic>,
    /// Per-characteristic damage. Only travellers track damage this way.
    pub damage: Option<BTreeMap<CharacteristicCode, DamageRecord>>,
    pub hits: Option<HitPoints>,
    pub skills: SkillSet,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::opt_int"))]
    pub heavy_load: Option<i32>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::opt_int"))]
    pub max_load: Option<i32>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::opt_int"))]
    pub initiative: Option<i32>,
}

impl CharacterData {
    pub fn with_characteristic(mut self, code: CharacteristicCode, value: Characteristic) -> Self {
        self.characteristics.insert(code, value);
        self
    }

    pub fn with_damage(mut self, code: CharacteristicCode, value: i32) -> Self {
        self.damage
            .get_or_insert_with(BTreeMap::new)
            .insert(code, DamageRecord::new(value));
        self
    }

    pub fn with_hits(mut self, hits: HitPoints) -> Self {
        self.hits = Some(hits);
        self
    }

    pub fn characteristic(&self, code: CharacteristicCode) -> Option<&Characteristic> {
        self.characteristics.get(&code)
    }

    /// Current DM of a characteristic, once resolved.
    pub fn dm(&self, code: CharacteristicCode) -> Option<i32> {
        self.characteristic(code).and_then(|ch| ch.dm)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreatureData {
    pub hits: Option<HitPoints>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VesselData {
    pub spacecraft: SpacecraftData,
}

impl VesselData {
    /// Hull displacement in tons, coerced.
    pub fn displacement(&self) -> f64 {
        self.spacecraft.dtons.parse_float()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpacecraftData {
    pub dtons: Numeric,
    pub configuration: HullConfiguration,
}

/// Hull shape, which determines how much armour a given rating costs in tons.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HullConfiguration {
    #[default]
    Standard,
    Streamlined,
    Sphere,
    CloseStructure,
    DispersedStructure,
    Planetoid,
    BufferedPlanetoid,
}
