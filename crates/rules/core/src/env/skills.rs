use crate::state::{Skill, SkillSet};

/// Read access to trained skills and their specialities.
pub trait SkillContext {
    fn skill(&self, key: &str) -> Option<&Skill>;

    fn is_trained(&self, key: &str) -> bool {
        self.skill(key).is_some_and(|skill| skill.trained)
    }

    fn speciality_value(&self, key: &str, speciality: &str) -> Option<i32> {
        self.skill(key)?
            .specialities
            .get(speciality)
            .map(|speciality| speciality.value)
    }
}

impl SkillContext for SkillSet {
    fn skill(&self, key: &str) -> Option<&Skill> {
        self.get(key)
    }
}
