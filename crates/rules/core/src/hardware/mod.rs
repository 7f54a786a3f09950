//! Spacecraft hardware sizing.
//!
//! Each hardware category has its own tonnage and cost formula, driven by the
//! owning vessel's displacement and the item's rating and tonnage table.
//! Sizing is a pure function of the stored item; [`size`] pairs it with a
//! [`HardwarePatch`] holding only the fields that need writing back, so a
//! repeated sheet build over unchanged data never writes.
//!
//! | category | tons                                            | cost                       |
//! |----------|-------------------------------------------------|----------------------------|
//! | armour   | rating × hull × percent × multiplier / 100      | ⌊per-ton cost × tons⌋      |
//! | fuel     | rating                                          | 0                          |
//! | power    | max(1, ⌊rating / power per ton⌋)                | per-ton cost × tons        |
//! | other    | base tons + hull × percent × rating / 100       | ⌊per-ton cost × tons⌋ or stored |
mod formulas;

use std::convert::Infallible;

use crate::env::{ArmourOracle, Env, OracleError, SkillContext};
use crate::state::{Actor, ActorData, HardwareData, HardwarePatch, Item, ItemData, VesselData};

/// Stored sizing fields, coerced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HardwareState {
    pub tons: f64,
    pub cost: f64,
    pub power_per_ton: Option<i64>,
}

impl HardwareState {
    pub fn of(item: &Item, hardware: &HardwareData) -> Self {
        Self {
            tons: hardware.tons.parse_float(),
            cost: item.cost.parse_float(),
            power_per_ton: hardware.power_per_ton.parse_int(),
        }
    }
}

/// Freshly computed sizing. Either number may be `NaN` when an input had no
/// numeric reading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HardwareSizing {
    pub tons: f64,
    pub cost: f64,
    pub power_per_ton: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SizingResult {
    pub sizing: HardwareSizing,
    /// Fields that differ from what the item stores.
    pub patch: Option<HardwarePatch>,
}

/// Sizes a hardware item against the vessel that carries it.
///
/// Returns `None` when the item is not hardware or the owner is not a
/// spacecraft. The armour oracle is consulted only for armour.
pub fn size<A>(item: &Item, vessel: &Actor, armour: &A) -> Option<SizingResult>
where
    A: ArmourOracle + ?Sized,
{
    let sized = size_with(item, vessel, |ship| {
        Ok::<_, Infallible>(armour.armour_multiplier(ship))
    });
    match sized {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Sizes a hardware item with the armour oracle taken from `env`.
///
/// Only armour needs the oracle, so other categories size normally in an
/// environment that lacks one.
///
/// # Errors
///
/// Returns `OracleError::ArmourNotAvailable` when sizing armour without an
/// armour oracle.
pub fn size_in<A, S>(
    item: &Item,
    vessel: &Actor,
    env: &Env<'_, A, S>,
) -> Result<Option<SizingResult>, OracleError>
where
    A: ArmourOracle + ?Sized,
    S: SkillContext + ?Sized,
{
    size_with(item, vessel, |ship| Ok(env.armour()?.armour_multiplier(ship)))
}

fn size_with<E>(
    item: &Item,
    vessel: &Actor,
    armour_multiplier: impl FnOnce(&VesselData) -> Result<f64, E>,
) -> Result<Option<SizingResult>, E> {
    let ItemData::Hardware(hardware) = &item.data else {
        return Ok(None);
    };
    let ActorData::Spacecraft(ship) = &vessel.data else {
        return Ok(None);
    };

    let stored = HardwareState::of(item, hardware);
    let sizing = formulas::compute(hardware, &stored, ship, armour_multiplier)?;
    let patch = HardwarePatch::from_states(vessel.id.clone(), item.id.clone(), &stored, &sizing);

    Ok(Some(SizingResult { sizing, patch }))
}
