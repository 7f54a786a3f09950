//! Rule tables and loaders for sheet data.
//!
//! This crate houses the static content the rules consult and provides
//! loaders for the data files a table is configured with:
//! - Hull armour multipliers (data-driven via RON)
//! - The global skill catalogue (data-driven via RON)
//! - Rule parameters (data-driven via TOML)
//! - Actor worlds exported from the host (JSON or RON)
//!
//! The stock tables ship embedded in the crate, so a host without a data
//! directory still gets the rulebook defaults.

pub mod armour;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use armour::HullArmourTable;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ArmourTableLoader, ConfigLoader, ContentFactory, LoadResult, SkillCatalogueLoader,
    World,
};
