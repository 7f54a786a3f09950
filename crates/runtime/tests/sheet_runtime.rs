use std::sync::Arc;

use rules_core::{
    Actor, ActorData, CharacterData, Characteristic, CharacteristicCode, CreatureData,
    HardwareData, HardwareSystem, HitPoints, HullConfiguration, Item, ItemData, ItemId, Numeric,
    SpacecraftData, TonnageTable, VesselData,
};
use runtime::{ActorRepository, InMemoryActorRepo, OracleManager, QuantityStep, Runtime};

fn ship() -> Actor {
    Actor::new(
        "ship",
        "Beowulf",
        ActorData::Spacecraft(VesselData {
            spacecraft: SpacecraftData {
                dtons: Numeric::from("200"),
                configuration: HullConfiguration::Streamlined,
            },
        }),
    )
    .with_item(Item::new(
        "armour",
        "Crystaliron",
        ItemData::Hardware(
            HardwareData::new(HardwareSystem::Armour)
                .with_rating(4)
                .with_tonnage(TonnageTable::new(2.5, 50_000, 0)),
        ),
    ))
    .with_item(
        Item::new(
            "fuel",
            "Fuel Tank",
            ItemData::Hardware(HardwareData::new(HardwareSystem::Fuel).with_rating(40)),
        )
        .with_cost(5_000),
    )
    .with_item(Item::new("crates", "Spare Parts", ItemData::Gear).with_quantity(3))
}

fn creature() -> Actor {
    Actor::new(
        "beast",
        "Kiiklos",
        ActorData::Creature(CreatureData {
            hits: Some(HitPoints::new(30, 30)),
        }),
    )
}

fn traveller() -> Actor {
    let data = [
        (CharacteristicCode::Str, 7),
        (CharacteristicCode::Dex, 9),
        (CharacteristicCode::End, 8),
        (CharacteristicCode::Int, 6),
    ]
    .into_iter()
    .fold(CharacterData::default(), |data, (code, value)| {
        data.with_characteristic(code, Characteristic::new(value))
    })
    .with_damage(CharacteristicCode::End, 3)
    .with_hits(HitPoints::default());
    Actor::new("jamison", "Jamison", ActorData::Traveller(data))
}

async fn start(repo: &Arc<InMemoryActorRepo>) -> Runtime {
    Runtime::builder()
        .oracles(OracleManager::rulebook())
        .repository(Arc::clone(repo) as Arc<dyn ActorRepository>)
        .build()
        .await
        .expect("runtime should build")
}

#[tokio::test]
async fn hardware_writes_reach_the_store_once() {
    let repo = Arc::new(InMemoryActorRepo::with_actors([ship()]));
    let runtime = start(&repo).await;
    let session = runtime.session();

    let vessel = repo.load(&"ship".into()).unwrap().unwrap();
    let armour = session
        .item_sheet(Some(&vessel), vessel.item(&"armour".into()).unwrap())
        .unwrap();
    let fuel = session
        .item_sheet(Some(&vessel), vessel.item(&"fuel".into()).unwrap())
        .unwrap();

    // 4 × 200 × 2.5 × 1.2 / 100
    assert_eq!(armour.sizing.unwrap().tons, 24.0);
    assert_eq!(fuel.sizing.unwrap().tons, 40.0);
    assert_eq!(fuel.sizing.unwrap().cost, 0.0);

    let summary = runtime.flush().await.unwrap();
    // armour: tons + cost; fuel: tons + cost
    assert_eq!(summary.applied, 4);
    assert_eq!(summary.rejected, 0);

    let stored = repo.load(&"ship".into()).unwrap().unwrap();
    let stored_armour = stored.item(&"armour".into()).unwrap();
    assert_eq!(stored_armour.hardware().unwrap().tons, Numeric::Number(24.0));
    assert_eq!(stored_armour.cost, Numeric::Number(1_200_000.0));
    assert_eq!(stored_armour, &armour.item);

    // Rebuilding from the stored documents issues nothing new.
    for id in ["armour", "fuel"] {
        session
            .item_sheet(Some(&stored), stored.item(&ItemId::from(id)).unwrap())
            .unwrap();
    }
    assert_eq!(runtime.flush().await.unwrap(), summary);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn size_hardware_updates_vessel_in_place() {
    let repo = Arc::new(InMemoryActorRepo::with_actors([ship()]));
    let runtime = start(&repo).await;

    let mut vessel = repo.load(&"ship".into()).unwrap().unwrap();
    assert_eq!(runtime.session().size_hardware(&mut vessel).unwrap(), 2);
    assert_eq!(runtime.session().size_hardware(&mut vessel).unwrap(), 0);

    let summary = runtime.shutdown().await.unwrap();
    assert_eq!(summary.applied, 4);
    assert_eq!(repo.load(&"ship".into()).unwrap().unwrap(), vessel);
}

#[tokio::test]
async fn token_edits_and_quantity_presses_are_persisted() {
    let repo = Arc::new(InMemoryActorRepo::with_actors([creature(), ship()]));
    let runtime = start(&repo).await;
    let session = runtime.session();

    let mut beast = repo.load(&"beast".into()).unwrap().unwrap();
    assert!(session.modify_token_attribute(&mut beast, &Numeric::from(-7), true));
    assert!(!session.modify_token_attribute(&mut beast, &Numeric::from("oops"), true));

    let mut vessel = repo.load(&"ship".into()).unwrap().unwrap();
    let crates = ItemId::from("crates");
    assert_eq!(
        session
            .adjust_quantity(&mut vessel, &crates, QuantityStep::Increment)
            .unwrap(),
        Some(4)
    );

    runtime.shutdown().await.unwrap();

    let stored = repo.load(&"beast".into()).unwrap().unwrap();
    let ActorData::Creature(data) = stored.data else {
        panic!("expected creature");
    };
    assert_eq!(data.hits, Some(HitPoints::new(23, 30).with_damage(7)));

    let stored_ship = repo.load(&"ship".into()).unwrap().unwrap();
    assert_eq!(stored_ship.item(&crates).unwrap().quantity, Some(4));
}

#[tokio::test]
async fn preparation_resolves_without_writing() {
    let repo = Arc::new(InMemoryActorRepo::with_actors([traveller()]));
    let runtime = start(&repo).await;

    let mut actor = repo.load(&"jamison".into()).unwrap().unwrap();
    runtime.session().prepare_actor(&mut actor).unwrap();

    let data = actor.data.character().unwrap();
    assert_eq!(data.characteristic(CharacteristicCode::End).unwrap().current, Some(5));
    assert_eq!(data.hits, Some(HitPoints::new(21, 24)));
    assert_eq!(data.initiative, Some(1));
    assert_eq!(data.max_load, Some(24));

    let summary = runtime.shutdown().await.unwrap();
    assert_eq!(summary.applied, 0);
}

#[tokio::test]
async fn writes_for_missing_actors_are_rejected_not_fatal() {
    let repo = Arc::new(InMemoryActorRepo::new());
    let runtime = start(&repo).await;

    let mut beast = creature();
    assert!(runtime
        .session()
        .modify_token_attribute(&mut beast, &Numeric::from(10), false));

    let summary = runtime.shutdown().await.unwrap();
    assert_eq!(summary.applied, 0);
    assert_eq!(summary.rejected, 1);
}

#[tokio::test]
async fn builder_requires_oracles_and_repository() {
    assert!(Runtime::builder().build().await.is_err());
    assert!(
        Runtime::builder()
            .oracles(OracleManager::rulebook())
            .build()
            .await
            .is_err()
    );
}
