//! Rule parameter loader.

use std::path::Path;

use rules_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rule parameters from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    pub const EMBEDDED: &'static str = include_str!("../../data/rules.toml");

    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their rulebook defaults.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))
    }

    /// The rule parameters shipped with the crate.
    pub fn embedded() -> LoadResult<RulesConfig> {
        Self::parse(Self::EMBEDDED)
    }
}
