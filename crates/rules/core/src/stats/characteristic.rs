//! Characteristics - the raw scores every other derived value starts from.
//!
//! current = base + augment − clamped damage
//! dm      = characteristic_modifier(current)

/// Characteristic codes used on Traveller sheets.
///
/// - **STR** (Strength), **DEX** (Dexterity), **END** (Endurance): physical,
///   summed for hit points
/// - **INT** (Intellect), **EDU** (Education), **SOC** (Social Standing)
/// - **PSI** (Psionic Strength) and the optional **CHA**, **TER** (Territory)
#[derive(
    Clone,
    Copy,
    Debug,
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
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CharacteristicCode {
    Str,
    Dex,
    End,
    Int,
    Edu,
    Soc,
    Psi,
    Cha,
    Ter,
}

/// One characteristic record as stored on the actor.
///
/// `value` and `augment` are user-edited; `current` and `dm` are derived and
/// rewritten on every preparation cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Characteristic {
    /// Base score.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::int"))]
    pub value: i32,
    /// Bonus from cybernetics, drugs or genetic work.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::opt_int"))]
    pub augment: Option<i32>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::opt_int"))]
    pub current: Option<i32>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::opt_int"))]
    pub dm: Option<i32>,
    /// Marks the characteristic the sheet prefers for skill rolls.
    pub default: bool,
}

impl Characteristic {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn with_augment(mut self, augment: i32) -> Self {
        self.augment = Some(augment);
        self
    }

    /// Base plus augment, before any damage.
    pub fn augmented(&self) -> i32 {
        self.value.saturating_add(self.augment.unwrap_or(0))
    }

    /// Recomputes `current` and `dm`.
    ///
    /// When a damage record is supplied it is first corrected in place so that
    /// it never goes below zero or above the augmented value.
    pub fn resolve(&mut self, damage: Option<&mut DamageRecord>) {
        let mut value = self.augmented();
        if let Some(record) = damage {
            record.value = clamp_damage(record.value, value);
            value = value.saturating_sub(record.value);
        }
        self.current = Some(value);
        self.dm = Some(characteristic_modifier(value));
    }
}

/// Damage taken against a single characteristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageRecord {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::number::coerce::int"))]
    pub value: i32,
}

impl DamageRecord {
    pub const fn new(value: i32) -> Self {
        Self { value }
    }
}

/// Dice modifier for a characteristic value.
///
/// | value | DM |
/// |-------|----|
/// | 0     | −3 |
/// | 1–2   | −2 |
/// | 3–5   | −1 |
/// | 6–8   | +0 |
/// | 9–11  | +1 |
/// | 12–14 | +2 |
/// | 15    | +3 |
pub const fn characteristic_modifier(value: i32) -> i32 {
    if value < 1 {
        -3
    } else if value < 3 {
        -2
    } else {
        value / 3 - 2
    }
}

// Negative first, then the ceiling; a negative augmented value leaves the
// ceiling below zero and wins.
fn clamp_damage(damage: i32, value: i32) -> i32 {
    let mut damage = damage;
    if damage < 0 {
        damage = 0;
    }
    if damage > value {
        damage = value;
    }
    damage
}
