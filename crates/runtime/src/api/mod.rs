//! Public API surface for host adapters.
//!
//! Hosts hand rule results back through [`DocumentWriter`] and surface
//! failures as [`RuntimeError`].

mod errors;
mod writer;

pub use errors::{Result, RuntimeError};
pub use writer::{ChannelWriter, DocumentWriter, UpdateLog};
