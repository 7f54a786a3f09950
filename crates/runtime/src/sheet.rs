//! Item sheet view data.

use rules_core::{HardwareSizing, Item, RollData, SkillSet};
use serde::Serialize;

/// Everything an item sheet renders besides the stored item itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSheet {
    /// The item as it will read once submitted writes land.
    pub item: Item,
    /// Stack size; items without one display as a single unit.
    pub quantity: u32,
    /// Owner's characteristic DMs, for weapon and skill rolls.
    pub roll_data: Option<RollData>,
    /// Skills offered in the sheet's skill picker.
    pub skills: SkillSet,
    /// Sizing for hardware carried by a vessel.
    pub sizing: Option<HardwareSizing>,
}

impl ItemSheet {
    pub(crate) fn display_quantity(item: &Item) -> u32 {
        item.quantity.filter(|quantity| *quantity > 0).unwrap_or(1)
    }
}

/// Direction of a quantity button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityStep {
    Increment,
    Decrement,
}

impl QuantityStep {
    /// New quantity, or `None` when the press does nothing: items without a
    /// stack size never change, and a stack never drops below one.
    pub fn apply(self, quantity: Option<u32>) -> Option<u32> {
        let quantity = quantity.filter(|quantity| *quantity > 0)?;
        match self {
            Self::Increment => Some(quantity.saturating_add(1)),
            Self::Decrement if quantity > 1 => Some(quantity - 1),
            Self::Decrement => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_requires_a_stack() {
        assert_eq!(QuantityStep::Increment.apply(Some(3)), Some(4));
        assert_eq!(QuantityStep::Increment.apply(None), None);
        assert_eq!(QuantityStep::Increment.apply(Some(0)), None);
    }

    #[test]
    fn decrement_stops_at_one() {
        assert_eq!(QuantityStep::Decrement.apply(Some(2)), Some(1));
        assert_eq!(QuantityStep::Decrement.apply(Some(1)), None);
        assert_eq!(QuantityStep::Decrement.apply(None), None);
    }

    #[test]
    fn sheet_serializes_for_the_host() {
        let item = Item::new("kit", "Toolkit", rules_core::ItemData::Gear);
        let sheet = ItemSheet {
            quantity: ItemSheet::display_quantity(&item),
            item,
            roll_data: None,
            skills: SkillSet::new(),
            sizing: Some(HardwareSizing {
                tons: 4.0,
                cost: 2_000_000.0,
                power_per_ton: Some(15),
            }),
        };

        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["rollData"], serde_json::Value::Null);
        assert_eq!(json["sizing"]["powerPerTon"], 15);
        assert_eq!(json["item"]["data"]["type"], "item");
    }
}
