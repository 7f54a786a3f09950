//! Hit points for every actor kind, and token bar edits against them.
//!
//! - Travellers: `value` and `max` are sums of STR, DEX and END (current and
//!   base respectively); damage lives on the characteristics.
//! - NPCs: `max` is the base sum and `value = max − damage`.
//! - Creatures: `max` is entered by hand and `value = max − damage`.

use std::collections::BTreeMap;

use crate::number::Numeric;
use crate::state::{Actor, ActorData, DocumentRef, DocumentUpdate, paths};
use crate::stats::{Characteristic, CharacteristicCode};

/// Characteristics summed for hit points.
pub const HIT_CHARACTERISTICS: [CharacteristicCode; 3] = [
    CharacteristicCode::Str,
    CharacteristicCode::Dex,
    CharacteristicCode::End,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitPoints {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::int"))]
    pub value: i32,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::int"))]
    pub max: i32,
    /// Damage taken. Unused on traveller sheets.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::opt_int"))]
    pub damage: Option<i32>,
}

impl HitPoints {
    pub const fn new(value: i32, max: i32) -> Self {
        Self {
            value,
            max,
            damage: None,
        }
    }

    pub const fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub(crate) fn apply_traveller(&mut self, totals: PhysicalTotals) {
        self.value = totals.current;
        self.max = totals.base;
    }

    pub(crate) fn apply_npc(&mut self, totals: PhysicalTotals) {
        self.max = totals.base;
        self.value = self.max.saturating_sub(self.damage.unwrap_or(0));
    }

    pub(crate) fn apply_creature(&mut self) {
        let damage = *self.damage.get_or_insert(0);
        self.value = self.max.saturating_sub(damage);
    }
}

/// STR + DEX + END, resolved and base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PhysicalTotals {
    pub current: i32,
    pub base: i32,
}

impl PhysicalTotals {
    /// `None` unless all three characteristics are present and resolved.
    pub(crate) fn of(characteristics: &BTreeMap<CharacteristicCode, Characteristic>) -> Option<Self> {
        let mut totals = Self {
            current: 0,
            base: 0,
        };
        for code in HIT_CHARACTERISTICS {
            let characteristic = characteristics.get(&code)?;
            totals.current = totals.current.saturating_add(characteristic.current?);
            totals.base = totals.base.saturating_add(characteristic.value);
        }
        Some(totals)
    }
}

/// Applies a token bar edit to an NPC's or creature's hit points.
///
/// With `is_delta` the value is added to hit points (so a negative value is
/// damage taken); otherwise it is the new hit point total. Damage is adjusted
/// and `value` follows as `max − damage`. Returns the write to submit, or
/// `None` when the actor has no hit points to edit, is a traveller, or the
/// value has no integer reading.
pub fn modify_token_attribute(
    actor: &mut Actor,
    value: &Numeric,
    is_delta: bool,
) -> Option<DocumentUpdate> {
    let hits = match &mut actor.data {
        ActorData::Npc(data) => data.hits.as_mut()?,
        ActorData::Creature(data) => data.hits.as_mut()?,
        ActorData::Traveller(_) | ActorData::Spacecraft(_) => return None,
    };
    let amount = i32::try_from(value.parse_int()?).ok()?;

    let damage = if is_delta {
        hits.damage.unwrap_or(0).saturating_sub(amount)
    } else {
        hits.max.saturating_sub(amount)
    };
    hits.damage = Some(damage);
    hits.value = hits.max.saturating_sub(damage);
    let current = hits.value;

    Some(
        DocumentUpdate::new(DocumentRef::actor(actor.id.clone()))
            .with(paths::HITS_DAMAGE, damage)
            .with(paths::HITS_VALUE, current),
    )
}
