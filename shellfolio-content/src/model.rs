//! Structured portfolio records.
//!
//! The shapes mirror the JSON files under `data/` so a content directory can be
//! swapped in without code changes.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Proficiency of a single skill, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }

    /// Five-slot star gauge shown next to every skill.
    pub fn stars(&self) -> &'static str {
        match self {
            SkillLevel::Expert => "★★★★★",
            SkillLevel::Advanced => "★★★★☆",
            SkillLevel::Intermediate => "★★★☆☆",
            SkillLevel::Beginner => "★★☆☆☆",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,
    pub icon: String,
}

/// Category key -> skills in that category, kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    categories: Vec<(String, Vec<SkillEntry>)>,
}

impl SkillCatalog {
    /// Build from `(key, skills)` pairs. A repeated key replaces the earlier
    /// skills but keeps its first position.
    pub fn new(categories: impl IntoIterator<Item = (String, Vec<SkillEntry>)>) -> Self {
        let mut catalog = Self::default();
        for (key, skills) in categories {
            catalog.insert(key, skills);
        }
        catalog
    }

    fn insert(&mut self, key: String, skills: Vec<SkillEntry>) {
        match self.categories.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = skills,
            None => self.categories.push((key, skills)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[SkillEntry]> {
        self.categories
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(key, _)| key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories in the order they appear in the source data.
    pub fn ordered(&self) -> Vec<(&str, &[SkillEntry])> {
        self.categories
            .iter()
            .map(|(key, skills)| (key.as_str(), skills.as_slice()))
            .collect()
    }
}

impl Serialize for SkillCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.categories.iter().map(|(key, skills)| (key, skills)))
    }
}

impl<'de> Deserialize<'de> for SkillCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = SkillCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of skill category to skills")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SkillCatalog, A::Error> {
                let mut catalog = SkillCatalog::default();
                while let Some((key, skills)) = map.next_entry::<String, Vec<SkillEntry>>()? {
                    catalog.insert(key, skills);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

pub const CATEGORY_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("cloud_platforms", "CLOUD PLATFORMS"),
    ("devops_tools", "DEVOPS TOOLS"),
    ("programming_languages", "PROGRAMMING LANGUAGES"),
    ("monitoring_security", "MONITORING & SECURITY"),
    ("infrastructure_automation", "INFRASTRUCTURE AUTOMATION"),
    ("genai_technologies", "GENAI TECHNOLOGIES"),
    ("compliance", "COMPLIANCE & STANDARDS"),
];

/// Heading for a skill category. Unknown keys are upper-cased and only their
/// first underscore becomes a space.
pub fn category_display_name(key: &str) -> String {
    CATEGORY_DISPLAY_NAMES
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| key.to_uppercase().replacen('_', " ", 1))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Project {
    /// Case-insensitive match over name, category, company and technologies.
    pub fn matches(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(&needle);
        hit(&self.name)
            || self.category.as_deref().is_some_and(hit)
            || self.company.as_deref().is_some_and(hit)
            || self.technologies.iter().any(|t| hit(t))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    #[serde(rename = "featured_projects")]
    pub featured: Vec<Project>,
    #[serde(rename = "other_projects", default)]
    pub other: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub key_achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl TimelineEntry {
    /// Stored duration, or one derived from the `start - end` period.
    pub fn duration_label(&self) -> String {
        if let Some(duration) = &self.duration {
            return duration.clone();
        }
        match self.period.split_once(" - ") {
            Some((start, end)) => format_duration(start.trim(), end.trim()),
            None => format_duration(self.period.trim(), "Present"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub year: String,
    pub specialization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub current_role: Role,
    #[serde(rename = "experience_timeline", default)]
    pub timeline: Vec<TimelineEntry>,
    pub education: Education,
}

/// `Current` for open-ended ranges, otherwise the end date verbatim. No date
/// arithmetic is attempted.
pub fn format_duration(_start: &str, end: &str) -> String {
    if end == "Present" {
        "Current".to_string()
    } else {
        end.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: SkillLevel) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            level,
            years: None,
            icon: "*".to_string(),
        }
    }

    #[test]
    fn skill_levels_are_ordered() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);
        assert_eq!(SkillLevel::Advanced.stars(), "★★★★☆");
        assert_eq!(SkillLevel::Beginner.stars(), "★★☆☆☆");
    }

    #[test]
    fn unknown_category_is_uppercased_once() {
        assert_eq!(category_display_name("compliance"), "COMPLIANCE & STANDARDS");
        assert_eq!(category_display_name("data_eng_tools"), "DATA ENG_TOOLS");
    }

    #[test]
    fn catalog_keeps_document_order() {
        let raw = r#"{
            "zeta": [{"name": "Z", "level": "Beginner", "icon": "z"}],
            "compliance": [{"name": "HIPAA", "level": "Expert", "icon": "h"}],
            "alpha": []
        }"#;
        let catalog: SkillCatalog = serde_json::from_str(raw).unwrap();

        let keys: Vec<&str> = catalog.ordered().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "compliance", "alpha"]);
        assert_eq!(catalog.keys().collect::<Vec<_>>(), keys);
        assert_eq!(catalog.get("zeta").map(<[SkillEntry]>::len), Some(1));

        let again: SkillCatalog =
            serde_json::from_str(&serde_json::to_string(&catalog).unwrap()).unwrap();
        assert_eq!(again, catalog);
    }

    #[test]
    fn repeated_key_keeps_first_position() {
        let catalog = SkillCatalog::new([
            ("devops_tools".to_string(), vec![skill("Jenkins", SkillLevel::Advanced)]),
            ("alpha".to_string(), vec![]),
            ("devops_tools".to_string(), vec![skill("Terraform", SkillLevel::Expert)]),
        ]);
        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, vec!["devops_tools", "alpha"]);
        assert_eq!(catalog.get("devops_tools").unwrap()[0].name, "Terraform");
    }

    #[test]
    fn project_filter_is_case_insensitive() {
        let project = Project {
            name: "Addy Healthcare".to_string(),
            company: Some("Leapfrog".to_string()),
            period: "2023".to_string(),
            category: Some("GenAI".to_string()),
            description: String::new(),
            technologies: vec!["Bedrock".to_string()],
            achievements: vec![],
        };
        assert!(project.matches("healthcare"));
        assert!(project.matches("LEAPFROG"));
        assert!(project.matches("bedrock"));
        assert!(!project.matches("kafka"));
    }

    #[test]
    fn duration_falls_back_to_period_end() {
        let mut entry = TimelineEntry {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            period: "2019 - Present".to_string(),
            duration: None,
            highlights: vec![],
        };
        assert_eq!(entry.duration_label(), "Current");

        entry.period = "2016 - 2019".to_string();
        assert_eq!(entry.duration_label(), "2019");

        entry.duration = Some("3 yrs".to_string());
        assert_eq!(entry.duration_label(), "3 yrs");
    }
}
