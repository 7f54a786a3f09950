//! Content factory for building rule tables from data files.

use std::path::{Path, PathBuf};

use rules_core::{RulesConfig, SkillSet};
use tracing::debug;

use crate::armour::HullArmourTable;
use crate::loaders::{
    ActorLoader, ArmourTableLoader, ConfigLoader, LoadResult, SkillCatalogueLoader, World,
};

/// Content factory that loads rule content from a data directory.
///
/// Tables missing from the directory fall back to the embedded rulebook
/// copies; a file that exists but fails to parse is an error.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── armour.ron
/// ├── skills.ron
/// └── worlds/
///     └── sample_world.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rule parameters from `rules.toml`.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            debug!(target: "content", path = %path.display(), "using embedded rules");
            return ConfigLoader::embedded();
        }
        ConfigLoader::load(&path)
    }

    /// Load the hull armour table from `armour.ron`.
    pub fn load_armour(&self) -> LoadResult<HullArmourTable> {
        let path = self.data_dir.join("armour.ron");
        if !path.exists() {
            debug!(target: "content", path = %path.display(), "using embedded armour table");
            return ArmourTableLoader::embedded();
        }
        ArmourTableLoader::load(&path)
    }

    /// Load the global skill catalogue from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillSet> {
        let path = self.data_dir.join("skills.ron");
        if !path.exists() {
            debug!(target: "content", path = %path.display(), "using embedded skill catalogue");
            return SkillCatalogueLoader::embedded();
        }
        SkillCatalogueLoader::load(&path)
    }

    /// Load a world export from `worlds/{file_name}`.
    pub fn load_world(&self, file_name: &str) -> LoadResult<World> {
        let path = self.data_dir.join("worlds").join(file_name);
        ActorLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
