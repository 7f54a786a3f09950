//! In-memory ActorRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use rules_core::{Actor, ActorId, DocumentUpdate};

use super::{ActorRepository, RepositoryError, Result, apply_update};

/// In-memory implementation of ActorRepository.
pub struct InMemoryActorRepo {
    actors: RwLock<HashMap<ActorId, Actor>>,
}

impl InMemoryActorRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            actors: RwLock::new(HashMap::new()),
        }
    }

    /// Create with an initial set of actors.
    pub fn with_actors(actors: impl IntoIterator<Item = Actor>) -> Self {
        let actors = actors
            .into_iter()
            .map(|actor| (actor.id.clone(), actor))
            .collect();
        Self {
            actors: RwLock::new(actors),
        }
    }
}

impl Default for InMemoryActorRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorRepository for InMemoryActorRepo {
    fn save(&self, actor: &Actor) -> Result<()> {
        let mut actors = self
            .actors
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        actors.insert(actor.id.clone(), actor.clone());
        Ok(())
    }

    fn load(&self, id: &ActorId) -> Result<Option<Actor>> {
        let actors = self
            .actors
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(actors.get(id).cloned())
    }

    fn exists(&self, id: &ActorId) -> bool {
        self.actors
            .read()
            .map(|actors| actors.contains_key(id))
            .unwrap_or(false)
    }

    fn delete(&self, id: &ActorId) -> Result<()> {
        let mut actors = self
            .actors
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        actors.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<ActorId>> {
        let actors = self
            .actors
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<ActorId> = actors.keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    // Patches in place under the write lock.
    fn apply(&self, update: &DocumentUpdate) -> Result<usize> {
        let mut actors = self
            .actors
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let owner = update.target.owner();
        let actor = actors
            .get_mut(owner)
            .ok_or_else(|| RepositoryError::ActorNotFound(owner.clone()))?;
        apply_update(actor, update)
    }
}
