//! Sheet operations a host invokes from its preparation and UI callbacks.
//!
//! Every operation runs to completion synchronously. Writes are handed to the
//! [`DocumentWriter`] and never awaited.

use std::sync::Arc;

use rules_core::{
    Actor, DocumentRef, DocumentUpdate, Item, ItemId, Numeric, RollData, RulesConfig, paths,
    size_in,
};
use tracing::{debug, info};

use crate::api::{DocumentWriter, Result, RuntimeError};
use crate::hooks::{HookContext, HookRegistry};
use crate::oracle::OracleManager;
use crate::sheet::{ItemSheet, QuantityStep};

pub struct Session {
    config: Arc<RulesConfig>,
    oracles: OracleManager,
    hooks: HookRegistry,
    writer: Arc<dyn DocumentWriter>,
}

impl Session {
    pub fn new(
        config: Arc<RulesConfig>,
        oracles: OracleManager,
        hooks: HookRegistry,
        writer: Arc<dyn DocumentWriter>,
    ) -> Self {
        Self {
            config,
            oracles,
            hooks,
            writer,
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Runs base and derived preparation on an actor in memory.
    pub fn prepare_actor(&self, actor: &mut Actor) -> Result<()> {
        let ctx = HookContext {
            config: &self.config,
            oracles: &self.oracles,
        };
        self.hooks.prepare(actor, &ctx)?;
        debug!(
            target: "runtime::session",
            actor = %actor.id,
            kind = actor.kind(),
            "prepared actor"
        );
        Ok(())
    }

    /// Builds item sheet data.
    ///
    /// Hardware owned by a vessel is sized, and any fields that differ from
    /// the stored item are submitted as writes.
    pub fn item_sheet(&self, owner: Option<&Actor>, item: &Item) -> Result<ItemSheet> {
        let env = self.oracles.as_rules_env();
        let mut sheet_item = item.clone();

        let mut sizing = None;
        if let Some(vessel) = owner.filter(|_| item.hardware().is_some()) {
            if let Some(result) = size_in(item, vessel, &env)? {
                if let Some(patch) = result.patch {
                    patch.apply_to(&mut sheet_item);
                    debug!(
                        target: "runtime::session",
                        actor = %vessel.id,
                        item = %item.id,
                        fields = ?patch.fields(),
                        "hardware resized"
                    );
                    for update in patch.into_updates() {
                        self.writer.submit(update);
                    }
                }
                sizing = Some(result.sizing);
            }
        }

        let skills = owner
            .and_then(|actor| actor.data.skills())
            .unwrap_or_else(|| self.oracles.skills())
            .clone();

        Ok(ItemSheet {
            quantity: ItemSheet::display_quantity(item),
            roll_data: owner.and_then(RollData::from_actor),
            skills,
            sizing,
            item: sheet_item,
        })
    }

    /// Sizes every hardware item on a vessel, updating it in memory and
    /// submitting the writes. Returns the number of items that changed.
    pub fn size_hardware(&self, vessel: &mut Actor) -> Result<usize> {
        let env = self.oracles.as_rules_env();

        let mut resized = 0;
        for index in 0..vessel.items.len() {
            let Some(result) = size_in(&vessel.items[index], vessel, &env)? else {
                continue;
            };
            let Some(patch) = result.patch else {
                continue;
            };
            patch.apply_to(&mut vessel.items[index]);
            for update in patch.into_updates() {
                self.writer.submit(update);
            }
            resized += 1;
        }

        if resized > 0 {
            info!(
                target: "runtime::session",
                actor = %vessel.id,
                resized,
                "vessel hardware resized"
            );
        }
        Ok(resized)
    }

    /// Token bar edit against hit points. Returns whether anything changed.
    pub fn modify_token_attribute(
        &self,
        actor: &mut Actor,
        value: &Numeric,
        is_delta: bool,
    ) -> bool {
        let Some(update) = rules_core::modify_token_attribute(actor, value, is_delta) else {
            debug!(
                target: "runtime::session",
                actor = %actor.id,
                value = %value,
                "token edit ignored"
            );
            return false;
        };
        self.writer.submit(update);
        true
    }

    /// Quantity button press. Returns the new quantity, or `None` when the
    /// press changed nothing.
    pub fn adjust_quantity(
        &self,
        owner: &mut Actor,
        item_id: &ItemId,
        step: QuantityStep,
    ) -> Result<Option<u32>> {
        let owner_id = owner.id.clone();
        let item = owner
            .item_mut(item_id)
            .ok_or_else(|| RuntimeError::ItemNotFound {
                actor: owner_id.clone(),
                item: item_id.clone(),
            })?;

        let Some(quantity) = step.apply(item.quantity) else {
            return Ok(None);
        };
        item.quantity = Some(quantity);

        self.writer.submit(
            DocumentUpdate::new(DocumentRef::item(owner_id, item_id.clone()))
                .with(paths::QUANTITY, quantity),
        );
        Ok(Some(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UpdateLog;
    use rules_core::{
        ActorData, ArmourOracle, CharacterData, FieldValue, HardwareData, HardwareSystem,
        HullConfiguration, ItemData, SkillSet, SpacecraftData, TonnageTable, VesselData,
    };

    fn session(log: &Arc<UpdateLog>) -> Session {
        Session::new(
            Arc::new(RulesConfig::new()),
            OracleManager::rulebook(),
            HookRegistry::default_hooks(),
            Arc::clone(log) as Arc<dyn DocumentWriter>,
        )
    }

    fn traveller() -> Actor {
        Actor::new("t1", "Jamison", ActorData::Traveller(CharacterData::default()))
            .with_item(Item::new("ammo", "Ammunition", ItemData::Gear).with_quantity(2))
            .with_item(Item::new("kit", "Toolkit", ItemData::Gear))
    }

    #[test]
    fn quantity_writes_follow_each_press() {
        let log = Arc::new(UpdateLog::new());
        let session = session(&log);
        let mut actor = traveller();
        let ammo = ItemId::from("ammo");

        assert_eq!(
            session.adjust_quantity(&mut actor, &ammo, QuantityStep::Decrement).unwrap(),
            Some(1)
        );
        assert_eq!(
            session.adjust_quantity(&mut actor, &ammo, QuantityStep::Decrement).unwrap(),
            None
        );
        assert_eq!(
            session.adjust_quantity(&mut actor, &ammo, QuantityStep::Increment).unwrap(),
            Some(2)
        );

        let writes = log.take();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[1].get(paths::QUANTITY), Some(&FieldValue::Integer(2)));
    }

    #[test]
    fn quantity_on_unknown_item_is_an_error() {
        let log = Arc::new(UpdateLog::new());
        let mut actor = traveller();

        let result =
            session(&log).adjust_quantity(&mut actor, &"gone".into(), QuantityStep::Increment);
        assert!(matches!(result, Err(RuntimeError::ItemNotFound { .. })));
    }

    #[test]
    fn sheet_without_owner_uses_catalogue_and_single_quantity() {
        let log = Arc::new(UpdateLog::new());
        let item = Item::new("kit", "Toolkit", ItemData::Gear);

        let sheet = session(&log).item_sheet(None, &item).unwrap();
        assert_eq!(sheet.quantity, 1);
        assert_eq!(sheet.roll_data, None);
        assert_eq!(sheet.skills, SkillSet::new());
        assert!(log.is_empty());
    }

    #[test]
    fn hardware_on_a_traveller_is_not_sized() {
        let log = Arc::new(UpdateLog::new());
        let item = Item::new(
            "hw",
            "Fuel Tank",
            ItemData::Hardware(
                HardwareData::new(HardwareSystem::Fuel)
                    .with_rating(20)
                    .with_tonnage(TonnageTable::default()),
            ),
        );

        let sheet = session(&log).item_sheet(Some(&traveller()), &item).unwrap();
        assert_eq!(sheet.sizing, None);
        assert!(sheet.roll_data.is_some());
        assert!(log.is_empty());
    }

    struct UnusedArmour;

    impl ArmourOracle for UnusedArmour {
        fn armour_multiplier(&self, _vessel: &VesselData) -> f64 {
            panic!("armour table consulted for non-armour hardware")
        }
    }

    #[test]
    fn non_armour_hardware_never_consults_the_armour_table() {
        let log = Arc::new(UpdateLog::new());
        let session = Session::new(
            Arc::new(RulesConfig::new()),
            OracleManager::new(Arc::new(UnusedArmour), Arc::new(SkillSet::new())),
            HookRegistry::default_hooks(),
            Arc::clone(&log) as Arc<dyn DocumentWriter>,
        );
        let tank = Item::new(
            "tank",
            "Fuel Tank",
            ItemData::Hardware(HardwareData::new(HardwareSystem::Fuel).with_rating(12)),
        );
        let mut vessel = Actor::new(
            "ship",
            "Beowulf",
            ActorData::Spacecraft(VesselData {
                spacecraft: SpacecraftData {
                    dtons: Numeric::Number(200.0),
                    configuration: HullConfiguration::Standard,
                },
            }),
        )
        .with_item(tank.clone());

        let sheet = session.item_sheet(Some(&vessel), &tank).unwrap();
        assert_eq!(sheet.sizing.unwrap().tons, 12.0);
        assert_eq!(session.size_hardware(&mut vessel).unwrap(), 1);
        assert!(!log.is_empty());
    }
}
