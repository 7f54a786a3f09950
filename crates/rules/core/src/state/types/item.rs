use core::fmt;
use core::str::FromStr;

use crate::number::Numeric;
use crate::state::types::ItemId;

/// An item embedded in an actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: ItemStatus,
    /// Stack size. Absent on most items and displayed as one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quantity: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: Numeric,
    pub data: ItemData,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, data: ItemData) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: ItemStatus::default(),
            quantity: None,
            cost: Numeric::ZERO,
            data,
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_cost(mut self, cost: impl Into<Numeric>) -> Self {
        self.cost = cost.into();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn hardware(&self) -> Option<&HardwareData> {
        match &self.data {
            ItemData::Hardware(data) => Some(data),
            _ => None,
        }
    }

    pub fn hardware_mut(&mut self) -> Option<&mut HardwareData> {
        match &mut self.data {
            ItemData::Hardware(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_equipped(&self) -> bool {
        self.status == ItemStatus::Equipped
    }
}

/// Where an owned item currently is.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ItemStatus {
    #[default]
    Owned,
    Carried,
    Equipped,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "system", rename_all = "snake_case")
)]
pub enum ItemData {
    Weapon(WeaponData),
    Armour(ArmourData),
    Cargo(CargoData),
    Hardware(HardwareData),
    #[cfg_attr(feature = "serde", serde(rename = "item"))]
    Gear,
}

impl ItemData {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Weapon(_) => "weapon",
            Self::Armour(_) => "armour",
            Self::Cargo(_) => "cargo",
            Self::Hardware(_) => "hardware",
            Self::Gear => "item",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponData {
    /// Damage dice, e.g. `3d6`.
    pub damage: String,
    pub range: Option<String>,
    /// Skill key rolled when attacking.
    pub skill: Option<String>,
    pub speciality: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArmourData {
    pub protection: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CargoData {
    pub tons: Numeric,
}

/// Ship hardware as stored on the item.
///
/// Every numeric field may hold free text; sizing coerces on read.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct HardwareData {
    pub system: HardwareSystem,
    /// Tons of hull space the hardware occupies.
    pub tons: Numeric,
    pub rating: Numeric,
    pub power_per_ton: Numeric,
    pub tonnage: TonnageTable,
}

impl HardwareData {
    pub fn new(system: HardwareSystem) -> Self {
        Self {
            system,
            ..Self::default()
        }
    }

    pub fn with_rating(mut self, rating: impl Into<Numeric>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn with_tons(mut self, tons: impl Into<Numeric>) -> Self {
        self.tons = tons.into();
        self
    }

    pub fn with_power_per_ton(mut self, power_per_ton: impl Into<Numeric>) -> Self {
        self.power_per_ton = power_per_ton.into();
        self
    }

    pub fn with_tonnage(mut self, tonnage: TonnageTable) -> Self {
        self.tonnage = tonnage;
        self
    }
}

/// Hull-relative sizing table for a piece of hardware.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TonnageTable {
    /// Percent of hull displacement consumed per rating point.
    pub percent: Numeric,
    /// Credits per ton.
    pub cost: Numeric,
    /// Fixed tonnage before the hull-relative part.
    pub tons: Numeric,
}

impl TonnageTable {
    pub fn new(
        percent: impl Into<Numeric>,
        cost: impl Into<Numeric>,
        tons: impl Into<Numeric>,
    ) -> Self {
        Self {
            percent: percent.into(),
            cost: cost.into(),
            tons: tons.into(),
        }
    }
}

/// Hardware category. Anything the sizing rules don't single out is kept by
/// name and sized with the generic formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum HardwareSystem {
    Armour,
    Fuel,
    Power,
    Other(String),
}

impl HardwareSystem {
    pub const GENERIC: &'static str = "generic";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Armour => "armour",
            Self::Fuel => "fuel",
            Self::Power => "power",
            Self::Other(name) => name,
        }
    }
}

impl Default for HardwareSystem {
    fn default() -> Self {
        Self::Other(Self::GENERIC.to_owned())
    }
}

impl FromStr for HardwareSystem {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<String> for HardwareSystem {
    fn from(name: String) -> Self {
        match name.as_str() {
            "armour" => Self::Armour,
            "fuel" => Self::Fuel,
            "power" => Self::Power,
            _ => Self::Other(name),
        }
    }
}

impl From<HardwareSystem> for String {
    fn from(system: HardwareSystem) -> Self {
        match system {
            HardwareSystem::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for HardwareSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
