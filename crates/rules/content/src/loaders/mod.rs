//! Content loaders for reading rule data from files.
//!
//! Each loader parses one file format into `rules-core` types. Every loader
//! also accepts the file contents directly, which is how the embedded
//! rulebook tables are read.

pub mod actors;
pub mod armour;
pub mod config;
pub mod factory;
pub mod skills;

pub use actors::{ActorLoader, World};
pub use armour::ArmourTableLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use skills::SkillCatalogueLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
