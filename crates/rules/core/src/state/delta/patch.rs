use crate::hardware::{HardwareSizing, HardwareState};
use crate::number::{Numeric, same_value};
use crate::state::delta::HardwareFields;
use crate::state::document::{DocumentRef, DocumentUpdate, paths};
use crate::state::types::{ActorId, Item, ItemId};

/// Minimal hardware update: only the fields whose sized value differs from
/// what the item currently stores.
#[derive(Clone, Debug, PartialEq)]
pub struct HardwarePatch {
    pub actor: ActorId,
    pub item: ItemId,
    pub tons: Option<f64>,
    pub cost: Option<f64>,
    pub power_per_ton: Option<i64>,
}

impl HardwarePatch {
    pub fn from_states(
        actor: ActorId,
        item: ItemId,
        before: &HardwareState,
        after: &HardwareSizing,
    ) -> Option<Self> {
        let mut tons = None;
        if !same_value(before.tons, after.tons) {
            tons = Some(after.tons);
        }

        let mut cost = None;
        if !same_value(before.cost, after.cost) {
            cost = Some(after.cost);
        }

        let mut power_per_ton = None;
        if after.power_per_ton.is_some() && before.power_per_ton != after.power_per_ton {
            power_per_ton = after.power_per_ton;
        }

        if tons.is_none() && cost.is_none() && power_per_ton.is_none() {
            return None;
        }

        Some(Self {
            actor,
            item,
            tons,
            cost,
            power_per_ton,
        })
    }

    pub fn fields(&self) -> HardwareFields {
        let mut fields = HardwareFields::empty();
        fields.set(HardwareFields::TONS, self.tons.is_some());
        fields.set(HardwareFields::COST, self.cost.is_some());
        fields.set(HardwareFields::POWER_PER_TON, self.power_per_ton.is_some());
        fields
    }

    /// Writes the patched values into an in-memory item.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(cost) = self.cost {
            item.cost = Numeric::Number(cost);
        }
        let Some(hardware) = item.hardware_mut() else {
            return;
        };
        if let Some(tons) = self.tons {
            hardware.tons = Numeric::Number(tons);
        }
        if let Some(power_per_ton) = self.power_per_ton {
            hardware.power_per_ton = Numeric::from(power_per_ton);
        }
    }

    /// One single-field update per changed field: tons, then cost, then
    /// power per ton.
    pub fn into_updates(self) -> Vec<DocumentUpdate> {
        let target = DocumentRef::item(self.actor, self.item);
        let mut updates = Vec::with_capacity(3);
        if let Some(tons) = self.tons {
            updates.push(DocumentUpdate::new(target.clone()).with(paths::HARDWARE_TONS, tons));
        }
        if let Some(cost) = self.cost {
            updates.push(DocumentUpdate::new(target.clone()).with(paths::COST, cost));
        }
        if let Some(power_per_ton) = self.power_per_ton {
            updates.push(
                DocumentUpdate::new(target).with(paths::HARDWARE_POWER_PER_TON, power_per_ton),
            );
        }
        updates
    }
}
