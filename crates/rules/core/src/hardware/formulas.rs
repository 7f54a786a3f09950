use crate::hardware::{HardwareSizing, HardwareState};
use crate::state::{HardwareData, HardwareSystem, VesselData};

/// `armour_multiplier` is called only when sizing armour.
pub(super) fn compute<E>(
    hardware: &HardwareData,
    stored: &HardwareState,
    vessel: &VesselData,
    armour_multiplier: impl FnOnce(&VesselData) -> Result<f64, E>,
) -> Result<HardwareSizing, E> {
    let hull = vessel.displacement();
    let sizing = match &hardware.system {
        HardwareSystem::Armour => {
            armour_sizing(hardware, stored, hull, armour_multiplier(vessel)?)
        }
        HardwareSystem::Fuel => fuel_sizing(hardware, stored),
        HardwareSystem::Power => power_sizing(hardware, stored),
        HardwareSystem::Other(_) => generic_sizing(hardware, stored, hull),
    };
    Ok(sizing)
}

fn armour_sizing(
    hardware: &HardwareData,
    stored: &HardwareState,
    hull: f64,
    multiplier: f64,
) -> HardwareSizing {
    let rating = hardware.rating.parse_int_or_nan();
    let percent = hardware.tonnage.percent.parse_float();
    let tons = rating * hull * percent * multiplier / 100.0;

    HardwareSizing {
        tons,
        cost: (hardware.tonnage.cost.parse_float() * tons).trunc(),
        power_per_ton: stored.power_per_ton,
    }
}

fn fuel_sizing(hardware: &HardwareData, stored: &HardwareState) -> HardwareSizing {
    HardwareSizing {
        tons: hardware.rating.parse_float(),
        cost: 0.0,
        power_per_ton: stored.power_per_ton,
    }
}

fn power_sizing(hardware: &HardwareData, stored: &HardwareState) -> HardwareSizing {
    let power_per_ton = match stored.power_per_ton {
        Some(value) if value < 1 => {
            // Only the output is corrected; sizing waits for the next pass.
            return HardwareSizing {
                tons: stored.tons,
                cost: stored.cost,
                power_per_ton: Some(1),
            };
        }
        Some(value) => value,
        None => {
            return HardwareSizing {
                tons: f64::NAN,
                cost: f64::NAN,
                power_per_ton: None,
            };
        }
    };

    let tons = match hardware.rating.parse_int() {
        Some(rating) => (rating / power_per_ton).max(1) as f64,
        None => f64::NAN,
    };

    HardwareSizing {
        tons,
        cost: hardware.tonnage.cost.parse_float() * tons,
        power_per_ton: Some(power_per_ton),
    }
}

fn generic_sizing(hardware: &HardwareData, stored: &HardwareState, hull: f64) -> HardwareSizing {
    let base = hardware.tonnage.tons.parse_int_or_nan();
    let percent = hardware.tonnage.percent.parse_float();
    let rating = hardware.rating.parse_int_or_nan();
    let tons = base + hull * percent * rating / 100.0;

    let per_ton = hardware.tonnage.cost.parse_float();
    let cost = if per_ton > 0.0 {
        (per_ton * tons).trunc()
    } else {
        stored.cost
    };

    HardwareSizing {
        tons,
        cost,
        power_per_ton: stored.power_per_ton,
    }
}
