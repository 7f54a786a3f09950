//! Applying sparse field writes to actor documents.

use rules_core::{
    Actor, ActorData, DocumentRef, DocumentUpdate, FieldValue, HitPoints, Item, Numeric, paths,
};

use super::{RepositoryError, Result};

/// Applies every change in `update` to `actor` (or to the addressed item).
///
/// Returns the number of fields written. Nothing is written if any path is
/// unknown for the target or a value has the wrong shape.
pub fn apply_update(actor: &mut Actor, update: &DocumentUpdate) -> Result<usize> {
    match &update.target {
        DocumentRef::Actor { .. } => {
            let mut patched = actor.clone();
            for (path, value) in &update.changes {
                apply_actor_field(&mut patched, path, value)?;
            }
            *actor = patched;
        }
        DocumentRef::Item { actor: owner, item } => {
            let target = actor
                .item_mut(item)
                .ok_or_else(|| RepositoryError::ItemNotFound {
                    actor: owner.clone(),
                    item: item.clone(),
                })?;
            let mut patched = target.clone();
            for (path, value) in &update.changes {
                apply_item_field(&mut patched, path, value)?;
            }
            *target = patched;
        }
    }
    Ok(update.len())
}

fn apply_actor_field(actor: &mut Actor, path: &str, value: &FieldValue) -> Result<()> {
    let hits = hits_mut(actor).ok_or_else(|| unknown(path))?;
    match path {
        paths::HITS_VALUE => hits.value = int_value(path, value)?,
        paths::HITS_DAMAGE => hits.damage = Some(int_value(path, value)?),
        _ => return Err(unknown(path)),
    }
    Ok(())
}

fn apply_item_field(item: &mut Item, path: &str, value: &FieldValue) -> Result<()> {
    match path {
        paths::COST => item.cost = numeric_value(path, value)?,
        paths::QUANTITY => {
            let quantity = value
                .as_i64()
                .and_then(|quantity| u32::try_from(quantity).ok())
                .ok_or_else(|| invalid(path))?;
            item.quantity = Some(quantity);
        }
        paths::HARDWARE_TONS => {
            let tons = numeric_value(path, value)?;
            item.hardware_mut().ok_or_else(|| unknown(path))?.tons = tons;
        }
        paths::HARDWARE_POWER_PER_TON => {
            let power_per_ton = numeric_value(path, value)?;
            item.hardware_mut().ok_or_else(|| unknown(path))?.power_per_ton = power_per_ton;
        }
        _ => return Err(unknown(path)),
    }
    Ok(())
}

fn hits_mut(actor: &mut Actor) -> Option<&mut HitPoints> {
    match &mut actor.data {
        ActorData::Traveller(data) | ActorData::Npc(data) => data.hits.as_mut(),
        ActorData::Creature(data) => data.hits.as_mut(),
        ActorData::Spacecraft(_) => None,
    }
}

fn int_value(path: &str, value: &FieldValue) -> Result<i32> {
    value
        .as_i64()
        .and_then(|value| i32::try_from(value).ok())
        .ok_or_else(|| invalid(path))
}

fn numeric_value(path: &str, value: &FieldValue) -> Result<Numeric> {
    match value {
        FieldValue::Text(text) => Ok(Numeric::Text(text.clone())),
        other => other.as_f64().map(Numeric::Number).ok_or_else(|| invalid(path)),
    }
}

fn unknown(path: &str) -> RepositoryError {
    RepositoryError::UnknownField {
        path: path.to_owned(),
    }
}

fn invalid(path: &str) -> RepositoryError {
    RepositoryError::InvalidValue {
        path: path.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::{
        ActorId, HardwareData, HardwareSystem, ItemData, ItemId, SpacecraftData, VesselData,
    };

    fn ship() -> Actor {
        Actor::new(
            "s1",
            "Beowulf",
            ActorData::Spacecraft(VesselData {
                spacecraft: SpacecraftData::default(),
            }),
        )
        .with_item(Item::new(
            "hw",
            "Fuel Tank",
            ItemData::Hardware(HardwareData::new(HardwareSystem::Fuel)),
        ))
        .with_item(Item::new("crate", "Cargo Crate", ItemData::Gear).with_quantity(3))
    }

    fn item_update(item: &str) -> DocumentUpdate {
        DocumentUpdate::new(DocumentRef::item(ActorId::from("s1"), ItemId::from(item)))
    }

    #[test]
    fn writes_hardware_fields() {
        let mut actor = ship();
        let update = item_update("hw")
            .with(paths::HARDWARE_TONS, 40.0)
            .with(paths::COST, 0.0);

        assert_eq!(apply_update(&mut actor, &update).unwrap(), 2);
        let item = actor.item(&"hw".into()).unwrap();
        assert_eq!(item.hardware().unwrap().tons, Numeric::Number(40.0));
        assert_eq!(item.cost, Numeric::Number(0.0));
    }

    #[test]
    fn writes_quantity() {
        let mut actor = ship();
        apply_update(&mut actor, &item_update("crate").with(paths::QUANTITY, 4u32)).unwrap();

        assert_eq!(actor.item(&"crate".into()).unwrap().quantity, Some(4));
    }

    #[test]
    fn hardware_path_on_plain_item_is_rejected_whole() {
        let mut actor = ship();
        let before = actor.clone();
        let update = item_update("crate")
            .with(paths::QUANTITY, 9u32)
            .with(paths::HARDWARE_TONS, 1.0);

        assert!(matches!(
            apply_update(&mut actor, &update),
            Err(RepositoryError::UnknownField { .. })
        ));
        assert_eq!(actor, before);
    }

    #[test]
    fn missing_item_is_reported() {
        let mut actor = ship();
        let update = item_update("gone").with(paths::COST, 1.0);

        assert_eq!(
            apply_update(&mut actor, &update),
            Err(RepositoryError::ItemNotFound {
                actor: "s1".into(),
                item: "gone".into(),
            })
        );
    }

    #[test]
    fn vessels_have_no_hits() {
        let mut actor = ship();
        let update = DocumentUpdate::new(DocumentRef::actor("s1".into())).with(paths::HITS_VALUE, 3);

        assert!(apply_update(&mut actor, &update).is_err());
    }
}
