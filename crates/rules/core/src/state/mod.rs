//! Host documents as the rules engine sees them.
pub mod delta;
pub mod document;
pub mod types;

pub use delta::{HardwareFields, HardwarePatch};
pub use document::{DocumentRef, DocumentUpdate, FieldValue, paths};
pub use types::{
    ActiveEffect, Actor, ActorData, ActorId, ArmourData, CargoData, CharacterData, CreatureData,
    EffectId, HardwareData, HardwareSystem, HullConfiguration, Item, ItemData, ItemId,
    ItemStatus, Skill, SkillSet, SpacecraftData, Speciality, TonnageTable, VesselData,
    WeaponData,
};
