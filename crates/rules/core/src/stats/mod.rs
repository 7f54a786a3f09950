//! Character statistics derived from the raw sheet.
mod characteristic;
mod encumbrance;
mod hits;

pub use characteristic::{
    Characteristic, CharacteristicCode, DamageRecord, characteristic_modifier,
};
pub use encumbrance::Encumbrance;
pub use hits::{HIT_CHARACTERISTICS, HitPoints, modify_token_attribute};

pub(crate) use hits::PhysicalTotals;
