//! Host-facing runtime for Traveller sheets.
//!
//! This crate wires the rule engines in `rules-core` to a host. Sheet writes
//! go to a background worker that applies them to a document repository.
//! Hosts embed [`Runtime`] and call into its [`Session`] from their
//! preparation and UI callbacks.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`session`] exposes the sheet operations
//! - [`api`] holds the error and writer types hosts interact with
//! - [`hooks`] provides the preparation hook system
//! - [`oracle`] and [`repository`] provide data adapters
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod hooks;
pub mod oracle;
pub mod repository;
pub mod runtime;
pub mod session;
pub mod sheet;

mod workers;

pub use api::{ChannelWriter, DocumentWriter, Result, RuntimeError, UpdateLog};
pub use hooks::{
    DerivedDataHook, EffectSuppressionHook, HookContext, HookCriticality, HookRegistry,
    PreparationHook, PreparationPhase,
};
pub use oracle::OracleManager;
pub use repository::{ActorRepository, InMemoryActorRepo, RepositoryError, apply_update};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::Session;
pub use sheet::{ItemSheet, QuantityStep};
pub use workers::WriteSummary;
