//! Hull armour table loader.

use std::collections::BTreeMap;
use std::path::Path;

use rules_core::HullConfiguration;
use serde::{Deserialize, Serialize};

use crate::armour::HullArmourTable;
use crate::loaders::{LoadResult, read_file};

/// Armour table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmourTableFile {
    pub hulls: Vec<HullEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HullEntry {
    pub configuration: HullConfiguration,
    pub multiplier: f64,
}

/// Loader for the hull armour table from RON files.
pub struct ArmourTableLoader;

impl ArmourTableLoader {
    pub const EMBEDDED: &'static str = include_str!("../../data/armour.ron");

    pub fn load(path: &Path) -> LoadResult<HullArmourTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<HullArmourTable> {
        let file: ArmourTableFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse armour table RON: {}", e))?;

        let mut multipliers = BTreeMap::new();
        for entry in file.hulls {
            if !entry.multiplier.is_finite() || entry.multiplier < 0.0 {
                anyhow::bail!(
                    "Invalid armour multiplier {} for hull '{}'",
                    entry.multiplier,
                    entry.configuration
                );
            }
            if multipliers
                .insert(entry.configuration, entry.multiplier)
                .is_some()
            {
                anyhow::bail!("Duplicate armour entry for hull '{}'", entry.configuration);
            }
        }

        Ok(HullArmourTable::new(multipliers))
    }

    /// The rulebook table shipped with the crate.
    pub fn embedded() -> LoadResult<HullArmourTable> {
        Self::parse(Self::EMBEDDED)
    }
}
