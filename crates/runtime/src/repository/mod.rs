//! Repository layer for actor documents.
//!
//! Repositories stand in for the host's document store: they hold the
//! persisted actors that sheet writes are applied to. Rule tables and the
//! skill catalogue are static content and live in oracles instead.

mod apply;
mod error;
mod memory;
mod traits;

pub use apply::apply_update;
pub use error::{RepositoryError, Result};
pub use memory::InMemoryActorRepo;
pub use traits::ActorRepository;
