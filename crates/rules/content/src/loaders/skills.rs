//! Global skill catalogue loader.

use std::path::Path;

use rules_core::SkillSet;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Skill catalogue structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalogue {
    pub skills: SkillSet,
}

/// Loader for the skill list offered to sheets whose owner has none.
pub struct SkillCatalogueLoader;

impl SkillCatalogueLoader {
    pub const EMBEDDED: &'static str = include_str!("../../data/skills.ron");

    pub fn load(path: &Path) -> LoadResult<SkillSet> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SkillSet> {
        let catalogue: SkillCatalogue = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalogue RON: {}", e))?;

        Ok(catalogue.skills)
    }

    pub fn embedded() -> LoadResult<SkillSet> {
        Self::parse(Self::EMBEDDED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::CharacteristicCode;

    #[test]
    fn embedded_catalogue_has_core_skills() {
        let skills = SkillCatalogueLoader::embedded().unwrap();

        let athletics = &skills["athletics"];
        assert!(!athletics.trained);
        assert!(athletics.specialities.contains_key("strength"));
        assert!(athletics.specialities.contains_key("endurance"));

        assert!(skills.contains_key("jackofalltrades"));
        assert_eq!(skills["pilot"].default, Some(CharacteristicCode::Dex));
    }
}
