//! Deterministic Traveller rules shared by every host adapter.
//!
//! `rules-core` owns the typed actor and item documents and the two rule
//! engines that derive data from them:
//!
//! - [`resolve::Resolver`] turns raw characteristic scores, augments and damage
//!   into current values, dice modifiers, hit points, encumbrance and
//!   initiative.
//! - [`hardware`] sizes spacecraft hardware (tonnage and cost) and diffs the
//!   result against the stored document into field-scoped writes.
//!
//! Everything here is total over partially-populated documents: missing
//! branches are skipped, out-of-range numbers are clamped, and nothing
//! panics. Host collaborators (armour lookup, skill context) are passed in
//! through [`env::Env`] rather than read from ambient state.
pub mod config;
pub mod effects;
pub mod env;
pub mod error;
pub mod hardware;
pub mod number;
pub mod resolve;
pub mod roll;
pub mod state;
pub mod stats;

pub use config::{InitiativeConfig, RulesConfig};
pub use effects::refresh_suppression;
pub use env::{ArmourOracle, Env, FixedArmour, OracleError, RulesEnv, SkillContext};
pub use error::{ErrorSeverity, RulesError};
pub use hardware::{HardwareSizing, HardwareState, SizingResult, size, size_in};
pub use number::{Numeric, same_value};
pub use resolve::Resolver;
pub use roll::{RollData, default_skill_dm, skill_formula, skill_label};
pub use state::{
    ActiveEffect, Actor, ActorData, ActorId, ArmourData, CargoData, CharacterData, CreatureData,
    DocumentRef, DocumentUpdate, EffectId, FieldValue, HardwareData, HardwareFields,
    HardwarePatch, HardwareSystem, HullConfiguration, Item, ItemData, ItemId, ItemStatus, Skill,
    SkillSet, SpacecraftData, Speciality, TonnageTable, VesselData, WeaponData, paths,
};
pub use stats::{
    Characteristic, CharacteristicCode, DamageRecord, Encumbrance, HIT_CHARACTERISTICS,
    HitPoints, characteristic_modifier, modify_token_attribute,
};
