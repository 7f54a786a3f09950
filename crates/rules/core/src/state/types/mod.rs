//! Typed actor and item documents.
mod actor;
mod common;
mod effect;
mod item;
mod skills;

pub use actor::{
    Actor, ActorData, CharacterData, CreatureData, HullConfiguration, SpacecraftData, VesselData,
};
pub use common::{ActorId, EffectId, ItemId};
pub use effect::ActiveEffect;
pub use item::{
    ArmourData, CargoData, HardwareData, HardwareSystem, Item, ItemData, ItemStatus,
    TonnageTable, WeaponData,
};
pub use skills::{Skill, SkillSet, Speciality};
