//! JSON data compiled into the binary.

use thiserror::Error;

use crate::model::{ExperienceRecord, ProjectCatalog, SkillCatalog};

pub const SKILLS_JSON: &str = include_str!("../data/skills.json");
pub const PROJECTS_JSON: &str = include_str!("../data/projects.json");
pub const EXPERIENCE_JSON: &str = include_str!("../data/experience.json");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid {kind} data: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_skills(raw: &str) -> Result<SkillCatalog, DataError> {
    serde_json::from_str(raw).map_err(|source| DataError::Parse {
        kind: "skills",
        source,
    })
}

pub fn parse_projects(raw: &str) -> Result<ProjectCatalog, DataError> {
    serde_json::from_str(raw).map_err(|source| DataError::Parse {
        kind: "projects",
        source,
    })
}

pub fn parse_experience(raw: &str) -> Result<ExperienceRecord, DataError> {
    serde_json::from_str(raw).map_err(|source| DataError::Parse {
        kind: "experience",
        source,
    })
}

pub fn bundled_skills() -> Result<SkillCatalog, DataError> {
    parse_skills(SKILLS_JSON)
}

pub fn bundled_projects() -> Result<ProjectCatalog, DataError> {
    parse_projects(PROJECTS_JSON)
}

pub fn bundled_experience() -> Result<ExperienceRecord, DataError> {
    parse_experience(EXPERIENCE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillLevel;

    #[test]
    fn bundled_data_parses() {
        let skills = bundled_skills().unwrap();
        assert!(!skills.is_empty());
        let cloud = skills.get("cloud_platforms").unwrap();
        assert!(cloud.iter().any(|s| s.level == SkillLevel::Expert));

        let projects = bundled_projects().unwrap();
        assert!(!projects.featured.is_empty());
        assert!(!projects.other.is_empty());

        let experience = bundled_experience().unwrap();
        assert!(!experience.timeline.is_empty());
        assert!(!experience.current_role.key_achievements.is_empty());
    }

    #[test]
    fn parse_error_names_the_kind() {
        let err = parse_projects("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid projects data"));
    }
}
