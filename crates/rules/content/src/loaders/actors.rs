//! Actor world loader.
//!
//! Worlds are host exports: a list of actor documents with their embedded
//! items and effects. JSON is what the host writes; RON is accepted for
//! hand-written fixtures.

use std::path::Path;

use rules_core::Actor;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A set of actor documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub actors: Vec<Actor>,
}

/// Loader for actor worlds from JSON or RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load a world, choosing the format by file extension (`.ron` is RON,
    /// anything else is JSON).
    pub fn load(path: &Path) -> LoadResult<World> {
        let content = read_file(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::parse_ron(&content),
            _ => Self::parse_json(&content),
        }
    }

    pub fn parse_json(content: &str) -> LoadResult<World> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world JSON: {}", e))
    }

    pub fn parse_ron(content: &str) -> LoadResult<World> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse world RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::{ActorData, CharacteristicCode, HardwareSystem, HitPoints, ItemData, Numeric};

    const WORLD: &str = r#"{
        "actors": [
            {
                "id": "t1",
                "name": "Jamison",
                "data": {
                    "type": "traveller",
                    "system": {
                        "characteristics": { "STR": { "value": 7 }, "DEX": { "value": 8, "augment": 1 } },
                        "damage": { "STR": { "value": 2 } },
                        "hits": { "value": 0, "max": 0 }
                    }
                }
            },
            {
                "id": "s1",
                "name": "Beowulf",
                "data": { "type": "spacecraft", "system": { "spacecraft": { "dtons": "200", "configuration": "streamlined" } } },
                "items": [
                    {
                        "id": "i1",
                        "name": "Fusion Plant",
                        "cost": "1000000",
                        "data": { "type": "hardware", "system": { "system": "power", "rating": 60, "powerPerTon": "15" } }
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_host_json() {
        let world = ActorLoader::parse_json(WORLD).unwrap();
        assert_eq!(world.actors.len(), 2);

        let ActorData::Traveller(data) = &world.actors[0].data else {
            panic!("expected traveller");
        };
        assert_eq!(data.characteristics[&CharacteristicCode::Dex].augment, Some(1));
        assert_eq!(data.damage.as_ref().unwrap()[&CharacteristicCode::Str].value, 2);

        let ship = &world.actors[1];
        let ItemData::Hardware(hardware) = &ship.items[0].data else {
            panic!("expected hardware");
        };
        assert_eq!(hardware.system, HardwareSystem::Power);
        assert_eq!(hardware.power_per_ton, Numeric::Text("15".to_owned()));
        assert_eq!(ship.items[0].cost.parse_float(), 1_000_000.0);
    }

    #[test]
    fn integer_fields_accept_text() {
        let world = ActorLoader::parse_json(
            r#"{
                "actors": [
                    {
                        "id": "t1",
                        "name": "Jamison",
                        "data": {
                            "type": "traveller",
                            "system": {
                                "characteristics": { "DEX": { "value": "8", "augment": "2" }, "END": { "value": 7, "augment": "none" } },
                                "damage": { "DEX": { "value": "3 wounds" } },
                                "skills": { "pilot": { "label": "Pilot", "trained": true, "value": "1" } }
                            }
                        }
                    },
                    {
                        "id": "c1",
                        "name": "Kiiklos",
                        "data": { "type": "creature", "system": { "hits": { "value": 0, "max": "12", "damage": "4" } } }
                    }
                ]
            }"#,
        )
        .unwrap();

        let ActorData::Traveller(data) = &world.actors[0].data else {
            panic!("expected traveller");
        };
        let dex = &data.characteristics[&CharacteristicCode::Dex];
        assert_eq!((dex.value, dex.augment), (8, Some(2)));
        assert_eq!(data.characteristics[&CharacteristicCode::End].augment, None);
        assert_eq!(data.damage.as_ref().unwrap()[&CharacteristicCode::Dex].value, 3);
        assert_eq!(data.skills["pilot"].value, 1);

        let ActorData::Creature(data) = &world.actors[1].data else {
            panic!("expected creature");
        };
        assert_eq!(data.hits, Some(HitPoints::new(0, 12).with_damage(4)));
    }

    #[test]
    fn chooses_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("world.json");
        std::fs::write(&json, WORLD).unwrap();
        assert_eq!(ActorLoader::load(&json).unwrap().actors.len(), 2);

        let ron_path = dir.path().join("world.ron");
        std::fs::write(
            &ron_path,
            r#"(actors: [(id: "c1", name: "Kiiklos", data: (type: "creature", system: (hits: Some((value: 0, max: 20)))))])"#,
        )
        .unwrap();
        let world = ActorLoader::load(&ron_path).unwrap();
        assert_eq!(world.actors[0].kind(), "creature");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ActorLoader::load(&dir.path().join("absent.json")).is_err());
    }
}
