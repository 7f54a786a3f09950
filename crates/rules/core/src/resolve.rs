//! Derived sheet data for characters and creatures.
//!
//! Resolution is a pure rewrite of the derived fields on an [`Actor`]: it
//! reads base values, augments and damage and writes `current`, `dm`, hit
//! points, encumbrance and initiative. The only source field it touches is a
//! traveller's characteristic damage, which is clamped into range. Running it
//! twice gives the same document as running it once.

use crate::config::RulesConfig;
use crate::env::SkillContext;
use crate::state::{Actor, ActorData, CharacterData, CreatureData};
use crate::stats::{CharacteristicCode, Encumbrance, PhysicalTotals};

/// Recomputes derived data in place.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a RulesConfig,
    skills: Option<&'a dyn SkillContext>,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a RulesConfig) -> Self {
        Self {
            config,
            skills: None,
        }
    }

    /// Uses an external skill context for encumbrance instead of the actor's
    /// own skill list.
    pub fn with_skills(mut self, skills: &'a dyn SkillContext) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn config(&self) -> &'a RulesConfig {
        self.config
    }

    pub fn resolve<'b>(&self, actor: &'b mut Actor) -> &'b mut Actor {
        match &mut actor.data {
            ActorData::Traveller(data) => self.resolve_traveller(data),
            ActorData::Npc(data) => self.resolve_npc(data),
            ActorData::Creature(data) => resolve_creature(data),
            ActorData::Spacecraft(_) => {}
        }
        actor
    }

    fn resolve_traveller(&self, data: &mut CharacterData) {
        let CharacterData {
            characteristics,
            damage,
            ..
        } = data;
        for (code, characteristic) in characteristics.iter_mut() {
            let record = damage.as_mut().and_then(|damage| damage.get_mut(code));
            characteristic.resolve(record);
        }

        if let (Some(hits), Some(totals)) =
            (data.hits.as_mut(), PhysicalTotals::of(&data.characteristics))
        {
            hits.apply_traveller(totals);
        }

        self.resolve_character(data);
    }

    fn resolve_npc(&self, data: &mut CharacterData) {
        for characteristic in data.characteristics.values_mut() {
            characteristic.resolve(None);
        }

        if let (Some(hits), Some(totals)) =
            (data.hits.as_mut(), PhysicalTotals::of(&data.characteristics))
        {
            hits.apply_npc(totals);
        }

        self.resolve_character(data);
    }

    // Shared by travellers and NPCs once characteristics are current.
    fn resolve_character(&self, data: &mut CharacterData) {
        let load = {
            let skills: &dyn SkillContext = match self.skills {
                Some(skills) => skills,
                None => &data.skills,
            };
            Encumbrance::compute(&data.characteristics, skills, self.config)
        };
        data.heavy_load = Some(load.heavy_load);
        data.max_load = Some(load.max_load);

        if let (Some(dex), Some(int)) = (
            data.dm(CharacteristicCode::Dex),
            data.dm(CharacteristicCode::Int),
        ) {
            data.initiative = Some(dex.max(int));
        }
    }
}

fn resolve_creature(data: &mut CreatureData) {
    if let Some(hits) = data.hits.as_mut() {
        hits.apply_creature();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Skill, SkillSet, Speciality};
    use crate::stats::{Characteristic, HitPoints};
    use CharacteristicCode::*;

    fn sheet(values: &[(CharacteristicCode, i32)]) -> CharacterData {
        values
            .iter()
            .fold(CharacterData::default(), |data, &(code, value)| {
                data.with_characteristic(code, Characteristic::new(value))
            })
    }

    fn character(actor: &Actor) -> &CharacterData {
        actor.data.character().unwrap()
    }

    #[test]
    fn traveller_hits_follow_physical_characteristics() {
        let data = sheet(&[(Str, 7), (Dex, 8), (End, 6), (Int, 9)])
            .with_damage(Str, 3)
            .with_hits(HitPoints::default());
        let mut actor = Actor::new("t1", "Jamison", ActorData::Traveller(data));

        let config = RulesConfig::new();
        Resolver::new(&config).resolve(&mut actor);
        let data = character(&actor);

        assert_eq!(data.characteristic(Str).unwrap().current, Some(4));
        assert_eq!(data.dm(Str), Some(-1));
        assert_eq!(data.hits, Some(HitPoints::new(18, 21)));
        assert_eq!(data.initiative, Some(1));
        assert_eq!(data.heavy_load, Some(10));
        assert_eq!(data.max_load, Some(20));
    }

    #[test]
    fn undamaged_traveller_is_at_full_hits() {
        let data = sheet(&[(Str, 8), (Dex, 6), (End, 7)]).with_hits(HitPoints::default());
        let mut actor = Actor::new("t1", "Jamison", ActorData::Traveller(data));

        let config = RulesConfig::new();
        Resolver::new(&config).resolve(&mut actor);

        assert_eq!(character(&actor).hits, Some(HitPoints::new(21, 21)));
    }

    #[test]
    fn traveller_damage_is_clamped_in_place() {
        let data = sheet(&[(Str, 5)]).with_damage(Str, 9).with_damage(Dex, -2);
        let mut actor = Actor::new("t1", "Jamison", ActorData::Traveller(data));

        let config = RulesConfig::new();
        Resolver::new(&config).resolve(&mut actor);
        let damage = character(&actor).damage.as_ref().unwrap();

        assert_eq!(damage[&Str].value, 5);
        // No DEX characteristic, so its damage record is left as entered.
        assert_eq!(damage[&Dex].value, -2);
    }

    #[test]
    fn missing_physical_characteristic_skips_hits() {
        let data = sheet(&[(Str, 7), (Dex, 8)]).with_hits(HitPoints::new(3, 4));
        let mut actor = Actor::new("t1", "Jamison", ActorData::Traveller(data));

        let config = RulesConfig::new();
        Resolver::new(&config).resolve(&mut actor);

        assert_eq!(character(&actor).hits, Some(HitPoints::new(3, 4)));
        assert_eq!(character(&actor).initiative, None);
    }

    #[test]
    fn npc_ignores_damage_records() {
        let data = sheet(&[(Str, 7), (Dex, 7), (End, 7)])
            .with_damage(Str, 4)
            .with_hits(HitPoints::default().with_damage(5));
        let mut actor = Actor::new("n1", "Guard", ActorData::Npc(data));

        let config = RulesConfig::new();
        Resolver::new(&config).resolve(&mut actor);
        let data = character(&actor);

        assert_eq!(data.characteristic(Str).unwrap().current, Some(7));
        assert_eq!(data.hits.unwrap().max, 21);
        assert_eq!(data.hits.unwrap().value, 16);
    }

    #[test]
    fn injected_skills_replace_the_actor_list() {
        let data = sheet(&[(Str, 6), (End, 6)]);
        let mut actor = Actor::new("t1", "Jamison", ActorData::Traveller(data));
        let skills = SkillSet::from([(
            "athletics".to_owned(),
            Skill::new("Athletics")
                .trained(1)
                .with_speciality("endurance", Speciality::new("Endurance", 2)),
        )]);

        let config = RulesConfig::new();
        Resolver::new(&config).with_skills(&skills).resolve(&mut actor);

        assert_eq!(character(&actor).heavy_load, Some(14));
        assert_eq!(character(&actor).max_load, Some(28));
    }

    #[test]
    fn resolving_twice_is_stable() {
        let data = sheet(&[(Str, 7), (Dex, 8), (End, 6), (Int, 4)])
            .with_damage(End, 2)
            .with_hits(HitPoints::default());
        let mut actor = Actor::new("t1", "Jamison", ActorData::Traveller(data));

        let config = RulesConfig::new();
        let resolver = Resolver::new(&config);
        resolver.resolve(&mut actor);
        let once = actor.clone();
        resolver.resolve(&mut actor);

        assert_eq!(actor, once);
    }

    #[test]
    fn creature_value_is_max_less_damage() {
        let mut actor = Actor::new(
            "c1",
            "Kiiklos",
            ActorData::Creature(CreatureData {
                hits: Some(HitPoints::new(0, 30).with_damage(12)),
            }),
        );

        let config = RulesConfig::new();
        Resolver::new(&config).resolve(&mut actor);

        let ActorData::Creature(data) = &actor.data else {
            panic!("expected creature");
        };
        assert_eq!(data.hits.unwrap().value, 18);
    }
}
