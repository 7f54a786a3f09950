//! Repository contract for persisted actor documents.

use rules_core::{Actor, ActorId, DocumentUpdate};

use super::{RepositoryError, Result, apply_update};

/// Store of actor documents, keyed by actor id.
pub trait ActorRepository: Send + Sync {
    /// Insert or replace an actor.
    fn save(&self, actor: &Actor) -> Result<()>;

    /// Load an actor by id.
    fn load(&self, id: &ActorId) -> Result<Option<Actor>>;

    /// Check if an actor exists.
    fn exists(&self, id: &ActorId) -> bool;

    /// Delete an actor.
    fn delete(&self, id: &ActorId) -> Result<()>;

    /// List all stored actor ids.
    fn list_ids(&self) -> Result<Vec<ActorId>> {
        Ok(vec![])
    }

    /// Apply a sparse update to the actor that owns its target.
    ///
    /// Returns the number of fields written. The default implementation
    /// loads, patches and saves; stores with finer-grained writes should
    /// override it.
    fn apply(&self, update: &DocumentUpdate) -> Result<usize> {
        let owner = update.target.owner();
        let mut actor = self
            .load(owner)?
            .ok_or_else(|| RepositoryError::ActorNotFound(owner.clone()))?;
        let written = apply_update(&mut actor, update)?;
        self.save(&actor)?;
        Ok(written)
    }
}
