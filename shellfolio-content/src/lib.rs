//! Portfolio content consumed by the shellfolio interpreter.
//!
//! Everything in this crate is read-only data: the structured records behind
//! `skills`, `projects` and `experience`, the JSON bundled into the binary, and
//! the static pages printed by the informational commands.

mod bundled;
mod model;
pub mod pages;

pub use bundled::{
    DataError, EXPERIENCE_JSON, PROJECTS_JSON, SKILLS_JSON, bundled_experience, bundled_projects,
    bundled_skills, parse_experience, parse_projects, parse_skills,
};
pub use model::{
    CATEGORY_DISPLAY_NAMES, Education, ExperienceRecord, Project, ProjectCatalog, Role,
    SkillCatalog, SkillEntry, SkillLevel, TimelineEntry, category_display_name, format_duration,
};
